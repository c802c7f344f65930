pub mod arena; // Physics engine seam + in-memory SnapshotArena
pub mod common_values;
pub mod config; // EnvConfig, GameMode, selector weights
pub mod game; // GameState / PlayerData snapshots
pub mod math;
pub mod observation; // AdvancedObsPadder
pub mod state_setters; // Episode reset scenarios + weighted selector

pub use arena::{Arena, BallState, CarId, CarInfo, CarState, SnapshotArena, Team};
pub use config::{EnvConfig, GameMode, ObsConfig, SelectorWeights};
pub use game::{Action, GameState, PhysObj, PlayerData};
pub use math::{Angle, RotMat, Vec3};
