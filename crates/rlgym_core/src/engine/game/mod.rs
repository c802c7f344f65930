//! Game snapshot types consumed by observation builders and produced by state setters.

mod action;
mod game_state;
mod physics_object;
mod player_data;

pub use action::{Action, ACTION_SIZE};
pub use game_state::GameState;
pub use physics_object::PhysObj;
pub use player_data::PlayerData;
