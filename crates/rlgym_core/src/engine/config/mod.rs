//! # Environment Configuration Module
//!
//! 관측 빌더, 시나리오 선택기, 시나리오 파라미터를 한 곳에서 관리.
//!
//! ## 사용법
//! ```rust
//! use rlgym_core::engine::config::EnvConfig;
//!
//! let config = EnvConfig::default();
//! let duel = EnvConfig::duel();
//! assert_eq!(duel.obs_size(), 237);
//! ```

mod game_mode;
mod selector_config;

pub use game_mode::GameMode;
pub use selector_config::SelectorWeights;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::common_values::{ball, field};
use super::observation::AdvancedObsPadder;
use super::state_setters::{
    AerialState, AirDribbleSetup, CeilingShotState, FlickState, KickoffState, RandomState, StateSetter,
    WeightedStateSetter,
};
use crate::error::ConfigError;

/// Upper bound on padded team size
pub const MAX_TEAM_SIZE: usize = 8;

/// Observation builder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObsConfig {
    /// Padding target (cars per team)
    pub team_size: usize,
    pub expanding: bool,
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self { team_size: 3, expanding: false }
    }
}

/// 환경 전체 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub game_mode: GameMode,
    pub obs: ObsConfig,
    /// `None` ⇒ default table for `game_mode`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<SelectorWeights>,
    pub flick: FlickState,
    pub aerial: AerialState,
    pub air_dribble: AirDribbleSetup,
    pub ceiling_shot: CeilingShotState,
    pub random: RandomState,
}

impl EnvConfig {
    /// 1v1 (관측은 3v3 크기로 패딩)
    pub fn duel() -> Self {
        Self { game_mode: GameMode::Duel, ..Self::default() }
    }

    pub fn doubles() -> Self {
        Self { game_mode: GameMode::Doubles, ..Self::default() }
    }

    pub fn standard() -> Self {
        Self { game_mode: GameMode::Standard, ..Self::default() }
    }

    pub fn for_game_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Duel => Self::duel(),
            GameMode::Doubles => Self::doubles(),
            GameMode::Standard => Self::standard(),
        }
    }

    // ========== Loading ==========

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Err(ConfigError::UnsupportedFormat { path: path.display().to_string() }),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EnvConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: EnvConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    // ========== Validation ==========

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.obs.team_size == 0 || self.obs.team_size > MAX_TEAM_SIZE {
            return Err(ConfigError::Invalid(format!(
                "obs.team_size must be 1-{}, got {}",
                MAX_TEAM_SIZE, self.obs.team_size
            )));
        }

        let fl = &self.flick;
        check_finite("flick.max_speed", fl.max_speed)?;
        if fl.max_speed < 0.0 {
            return Err(ConfigError::Invalid(format!("flick.max_speed must be >= 0, got {}", fl.max_speed)));
        }

        let ae = &self.aerial;
        check_finite("aerial.ball_min_z", ae.ball_min_z)?;
        check_finite("aerial.ball_max_z", ae.ball_max_z)?;
        check_finite("aerial.safe_ceiling_z", ae.safe_ceiling_z)?;
        if ae.ball_min_z < ball::RADIUS || ae.ball_min_z > ae.ball_max_z {
            return Err(ConfigError::Invalid(format!(
                "aerial ball height range invalid: [{}, {}]",
                ae.ball_min_z, ae.ball_max_z
            )));
        }
        if ae.safe_ceiling_z < ae.ball_max_z || ae.safe_ceiling_z > field::CEILING_Z {
            return Err(ConfigError::Invalid(format!(
                "aerial.safe_ceiling_z must be in [{}, {}], got {}",
                ae.ball_max_z,
                field::CEILING_Z,
                ae.safe_ceiling_z
            )));
        }

        let ad = &self.air_dribble;
        check_finite("air_dribble.ball_vel_mult", ad.ball_vel_mult)?;
        if ad.ball_vel_mult < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "air_dribble.ball_vel_mult must be >= 0, got {}",
                ad.ball_vel_mult
            )));
        }

        let cs = &self.ceiling_shot;
        check_finite("ceiling_shot.car_min_z", cs.car_min_z)?;
        check_finite("ceiling_shot.car_max_z", cs.car_max_z)?;
        check_finite("ceiling_shot.safe_ceiling_z", cs.safe_ceiling_z)?;
        check_finite("ceiling_shot.ball_min_vz", cs.ball_min_vz)?;
        check_finite("ceiling_shot.ball_max_vz", cs.ball_max_vz)?;
        if cs.car_min_z > cs.car_max_z || cs.car_max_z > field::CEILING_Z {
            return Err(ConfigError::Invalid(format!(
                "ceiling_shot car height range invalid: [{}, {}] (ceiling {})",
                cs.car_min_z,
                cs.car_max_z,
                field::CEILING_Z
            )));
        }
        // 공이 스폰될 수 있는 최고 높이보다 낮으면 최고점 보장 불가
        let spawn_top = cs.max_ball_spawn_z();
        if cs.safe_ceiling_z < spawn_top || cs.safe_ceiling_z > field::CEILING_Z {
            return Err(ConfigError::Invalid(format!(
                "ceiling_shot.safe_ceiling_z must be in [{}, {}], got {}",
                spawn_top,
                field::CEILING_Z,
                cs.safe_ceiling_z
            )));
        }
        if cs.ball_min_vz < 0.0 || cs.ball_min_vz > cs.ball_max_vz {
            return Err(ConfigError::Invalid(format!(
                "ceiling_shot ball vz range invalid: [{}, {}]",
                cs.ball_min_vz, cs.ball_max_vz
            )));
        }

        // 가중치 검증은 선택기 생성 규칙과 동일
        WeightedStateSetter::from_config(self)?;
        Ok(())
    }

    // ========== Builders ==========

    pub fn selector_weights(&self) -> SelectorWeights {
        self.selector.clone().unwrap_or_else(|| SelectorWeights::for_game_mode(self.game_mode))
    }

    pub fn obs_size(&self) -> usize {
        AdvancedObsPadder::obs_size_for(self.obs.team_size.max(1))
    }

    pub fn build_obs_builder(&self) -> Result<AdvancedObsPadder, ConfigError> {
        AdvancedObsPadder::from_config(&self.obs)
    }

    /// Single scenario by name, with this config's params.
    /// `None` for unknown names (`weighted`는 `build_state_setter` 사용).
    pub fn scenario(&self, name: &str) -> Option<Box<dyn StateSetter>> {
        let setter: Box<dyn StateSetter> = match name {
            "kickoff" => Box::new(KickoffState::new()),
            "flick" => Box::new(self.flick.clone()),
            "aerial" => Box::new(self.aerial.clone()),
            "air_dribble" => Box::new(self.air_dribble.clone()),
            "ceiling_shot" => Box::new(self.ceiling_shot.clone()),
            "random" => Box::new(self.random.clone()),
            _ => return None,
        };
        Some(setter)
    }

    pub fn build_state_setter(&self) -> Result<WeightedStateSetter, ConfigError> {
        Ok(WeightedStateSetter::from_config(self)?)
    }
}

fn check_finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be finite, got {}", name, value)))
    }
}
