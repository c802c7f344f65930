use thiserror::Error;

use crate::engine::arena::{CarId, Team};

/// Physics engine seam errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArenaError {
    #[error("Unknown car id: {id}")]
    UnknownCar { id: CarId },
}

/// State setter / selector errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateSetterError {
    /// 공격/수비 차량을 정할 수 없음 (해당 팀 차량 없음)
    #[error("No {team:?} car in arena, scenario needs one car per team")]
    MissingTeamCar { team: Team },

    #[error("Invalid state setter weights: {0}")]
    InvalidWeights(String),

    #[error("Arena error: {0}")]
    Arena(#[from] ArenaError),
}

impl StateSetterError {
    /// Roster problems can be fixed by the caller re-spawning cars;
    /// weight problems are configuration bugs.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StateSetterError::MissingTeamCar { .. } => true,
            StateSetterError::Arena(_) => true,
            StateSetterError::InvalidWeights(_) => false,
        }
    }
}

/// Configuration loading / validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<StateSetterError> for ConfigError {
    fn from(err: StateSetterError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StateSetterError>;
