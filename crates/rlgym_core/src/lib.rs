//! # rlgym_core - Rocket League RL Environment Components
//!
//! Observation encoding and episode reset scenarios for reinforcement
//! learning agents trained against a Rocket League physics simulator.
//!
//! ## Features
//! - Fixed-length padded observations (one policy serves 1v1, 2v2 and 3v3)
//! - Team-perspective mirroring (every agent attacks +Y)
//! - Seedable scenario placers (kickoff, flick, aerial, air dribble, ceiling shot)
//! - Weighted scenario selection from JSON/YAML config

// Doc formatting lints - purely cosmetic, fix incrementally
#![allow(clippy::doc_lazy_continuation)]
// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Loop style - can fix incrementally
#![allow(clippy::needless_range_loop)]

pub mod engine;
pub mod error;

pub use engine::observation::{AdvancedObsPadder, ObsBuilder};
pub use engine::state_setters::{reset_with_entropy, StateSetter, WeightedStateSetter};
pub use engine::{Arena, EnvConfig, GameMode, GameState, SnapshotArena};
pub use error::{ArenaError, ConfigError, Result, StateSetterError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
