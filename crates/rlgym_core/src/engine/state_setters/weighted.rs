//! WeightedStateSetter - 가중치 기반 시나리오 선택기
//!
//! 리셋마다 가중치 분포에서 하나의 시나리오를 뽑아 위임한다.
//! 가중치는 정규화할 필요 없음, 0이면 절대 선택되지 않음.

use std::fmt;

use rand::distributions::{Distribution, WeightedIndex};
use rand::RngCore;
use tracing::debug;

use super::StateSetter;
use crate::engine::arena::Arena;
use crate::engine::config::{EnvConfig, GameMode, SelectorWeights};
use crate::engine::game::GameState;
use crate::error::{Result, StateSetterError};

pub struct WeightedStateSetter {
    setters: Vec<Box<dyn StateSetter>>,
    weights: Vec<f32>,
    dist: WeightedIndex<f32>,
}

impl fmt::Debug for WeightedStateSetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedStateSetter")
            .field("names", &self.names())
            .field("weights", &self.weights)
            .finish()
    }
}

impl WeightedStateSetter {
    /// # Errors
    /// 빈 목록, 음수/NaN/무한대 가중치, 합계 0이면 `InvalidWeights`.
    pub fn new(entries: Vec<(Box<dyn StateSetter>, f32)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(StateSetterError::InvalidWeights("no state setters given".to_string()));
        }

        let (setters, weights): (Vec<_>, Vec<_>) = entries.into_iter().unzip();

        if let Some((i, w)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite() || **w < 0.0) {
            return Err(StateSetterError::InvalidWeights(format!(
                "weight for {} must be finite and >= 0, got {}",
                setters[i].name(),
                w
            )));
        }
        let total: f32 = weights.iter().sum();
        if total <= 0.0 {
            return Err(StateSetterError::InvalidWeights("weights sum to zero".to_string()));
        }

        let dist = WeightedIndex::new(&weights)
            .map_err(|e| StateSetterError::InvalidWeights(e.to_string()))?;

        Ok(Self { setters, weights, dist })
    }

    /// Default scenario table for a game mode
    pub fn for_game_mode(mode: GameMode) -> Result<Self> {
        Self::from_weights(&SelectorWeights::for_game_mode(mode), &EnvConfig::default())
    }

    /// Selector built from a full environment config (weights and scenario params)
    pub fn from_config(config: &EnvConfig) -> Result<Self> {
        Self::from_weights(&config.selector_weights(), config)
    }

    fn from_weights(w: &SelectorWeights, config: &EnvConfig) -> Result<Self> {
        let entries = w
            .entries()
            .into_iter()
            .map(|(name, weight)| {
                config
                    .scenario(name)
                    .map(|setter| (setter, weight))
                    .ok_or_else(|| StateSetterError::InvalidWeights(format!("unknown scenario: {}", name)))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Draw a scenario index from the weight distribution
    pub fn select_index(&self, rng: &mut dyn RngCore) -> usize {
        self.dist.sample(rng)
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn names(&self) -> Vec<&str> {
        self.setters.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.setters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}

impl StateSetter for WeightedStateSetter {
    fn reset_state(&self, arena: &mut dyn Arena, rng: &mut dyn RngCore) -> Result<GameState> {
        let idx = self.select_index(rng);
        let setter = &self.setters[idx];
        debug!("Selected scenario: {} (index: {})", setter.name(), idx);
        setter.reset_state(arena, rng)
    }

    fn name(&self) -> &str {
        "weighted"
    }
}
