//! Observation Module - GameState-based Observation Builders
//!
//! ## Design Principles
//!
//! 1. **Snapshot only**: observations are derived solely from `GameState`
//! 2. **No arena dependency**: builders never touch the physics engine
//! 3. **Team perspective**: Orange players see a mirrored field, so every
//!    agent attacks +Y
//!
//! ## Available Builders
//!
//! - `AdvancedObsPadder`: fixed-length vector padded to team size (237 floats for 3v3)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rlgym_core::engine::observation::{AdvancedObsPadder, ObsBuilder};
//!
//! let padder = AdvancedObsPadder::new(3, false)?;
//! let obs = padder.build_obs(&state.players[0], &state, &prev_action);
//! assert_eq!(obs.len(), 237);
//! ```

mod advanced_padder;
mod builder;
mod common;

pub use advanced_padder::{
    AdvancedObsPadder, BALL_OBS_SIZE, DUMMY_OBS_SIZE, PLAYER_OBS_SIZE, RELATIVE_OBS_SIZE,
};
pub use builder::ObsBuilder;
pub use common::{push_flag, push_scaled, push_vec, push_zeros};
