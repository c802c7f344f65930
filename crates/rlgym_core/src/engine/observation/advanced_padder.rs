//! AdvancedObsPadder - fixed-length padded observation
//!
//! Every player gets the same layout regardless of how many cars are on the
//! field: missing teammates/opponents are zero-filled so a single policy
//! network serves 1v1, 2v2 and 3v3.
//!
//! ## Flat Vector Layout (team size T)
//! ```text
//! [0-8]      Ball pos / vel (÷ POS_STD), ang vel (÷ ANG_STD)
//! [9-16]     Previous action (8)
//! [17-50]    Boost pads (34, perspective order)
//! [51-76]    Self block (26)
//! [77-..]    Ally blocks    (T-1) × 32  (26 player + 6 relative to self)
//! [..-end]   Enemy blocks    T    × 32
//! ```
//! T=3 → 237 floats.

use serde::{Deserialize, Serialize};

use super::common::{push_flag, push_scaled, push_vec, push_zeros};
use super::ObsBuilder;
use crate::engine::arena::Team;
use crate::engine::common_values::{boost, norm};
use crate::engine::config::ObsConfig;
use crate::engine::game::{Action, GameState, PhysObj, PlayerData, ACTION_SIZE};
use crate::error::ConfigError;

/// Ball block size
pub const BALL_OBS_SIZE: usize = 9;
/// Per-player block size
pub const PLAYER_OBS_SIZE: usize = 26;
/// Relative position/velocity to the acting player
pub const RELATIVE_OBS_SIZE: usize = 6;
/// Zero block for an absent ally/enemy
pub const DUMMY_OBS_SIZE: usize = PLAYER_OBS_SIZE + RELATIVE_OBS_SIZE;

/// 역직렬화도 `new`를 거친다 (team_size 0 거부)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ObsConfig", into = "ObsConfig")]
pub struct AdvancedObsPadder {
    team_size: usize,
    pos_std: f32,
    ang_std: f32,
    /// Batch dimension is added by the caller; kept for config parity.
    expanding: bool,
}

impl Default for AdvancedObsPadder {
    fn default() -> Self {
        Self {
            team_size: 3,
            pos_std: norm::POS_STD,
            ang_std: norm::ANG_STD,
            expanding: false,
        }
    }
}

impl AdvancedObsPadder {
    pub fn new(team_size: usize, expanding: bool) -> Result<Self, ConfigError> {
        if team_size == 0 {
            return Err(ConfigError::Invalid("team_size must be at least 1".to_string()));
        }
        Ok(Self { team_size, expanding, ..Self::default() })
    }

    pub fn from_config(config: &ObsConfig) -> Result<Self, ConfigError> {
        Self::new(config.team_size, config.expanding)
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    pub fn expanding(&self) -> bool {
        self.expanding
    }

    /// `9 + 8 + 34 + 26 + 32·(T−1) + 32·T`
    pub const fn obs_size_for(team_size: usize) -> usize {
        BALL_OBS_SIZE
            + ACTION_SIZE
            + boost::LOCATIONS_AMOUNT
            + PLAYER_OBS_SIZE
            + DUMMY_OBS_SIZE * (team_size - 1)
            + DUMMY_OBS_SIZE * team_size
    }

    /// Offset of the first ally block
    pub const fn allies_offset() -> usize {
        BALL_OBS_SIZE + ACTION_SIZE + boost::LOCATIONS_AMOUNT + PLAYER_OBS_SIZE
    }

    /// 항상 34칸: 모자라면 0, 넘치면 잘라냄
    fn add_boost_pads(obs: &mut Vec<f32>, pads: &[f32]) {
        let n = pads.len().min(boost::LOCATIONS_AMOUNT);
        obs.extend_from_slice(&pads[..n]);
        push_zeros(obs, boost::LOCATIONS_AMOUNT - n);
    }

    fn add_dummy(obs: &mut Vec<f32>) {
        push_zeros(obs, DUMMY_OBS_SIZE);
    }

    /// Append a 26-float player block and return the physics view used.
    fn add_player_to_obs<'a>(
        &self,
        obs: &mut Vec<f32>,
        player: &'a PlayerData,
        ball: &PhysObj,
        inverted: bool,
    ) -> &'a PhysObj {
        let car = player.phys(inverted);

        let rel_pos = ball.pos - car.pos;
        let rel_vel = ball.vel - car.vel;

        push_scaled(obs, &rel_pos, self.pos_std);
        push_scaled(obs, &rel_vel, self.pos_std);
        push_scaled(obs, &car.pos, self.pos_std);
        push_vec(obs, &car.rot_mat.forward);
        push_vec(obs, &car.rot_mat.up);
        push_scaled(obs, &car.vel, self.pos_std);
        push_scaled(obs, &car.ang_vel, self.ang_std);

        obs.push(player.boost_fraction);
        push_flag(obs, player.is_on_ground());
        push_flag(obs, player.has_flip);
        push_flag(obs, player.is_demoed());
        push_flag(obs, player.has_jump);

        car
    }

    /// Other player's block followed by its position/velocity relative to `me`.
    fn add_other_to_obs(
        &self,
        obs: &mut Vec<f32>,
        other: &PlayerData,
        me: &PhysObj,
        ball: &PhysObj,
        inverted: bool,
    ) {
        let other_car = self.add_player_to_obs(obs, other, ball, inverted);
        push_scaled(obs, &(other_car.pos - me.pos), self.pos_std);
        push_scaled(obs, &(other_car.vel - me.vel), self.pos_std);
    }
}

impl TryFrom<ObsConfig> for AdvancedObsPadder {
    type Error = ConfigError;

    fn try_from(config: ObsConfig) -> Result<Self, ConfigError> {
        Self::from_config(&config)
    }
}

impl From<AdvancedObsPadder> for ObsConfig {
    fn from(padder: AdvancedObsPadder) -> Self {
        ObsConfig { team_size: padder.team_size, expanding: padder.expanding }
    }
}

impl ObsBuilder for AdvancedObsPadder {
    fn reset(&mut self, _initial_state: &GameState) {}

    fn build_obs(&self, player: &PlayerData, state: &GameState, prev_action: &Action) -> Vec<f32> {
        let mut obs = Vec::with_capacity(self.obs_size());

        let inverted = player.team == Team::Orange;
        let ball = state.ball_phys(inverted);

        // Ball
        push_scaled(&mut obs, &ball.pos, self.pos_std);
        push_scaled(&mut obs, &ball.vel, self.pos_std);
        push_scaled(&mut obs, &ball.ang_vel, self.ang_std);

        // Previous action
        obs.extend_from_slice(&prev_action.to_array());

        // Boost pads
        Self::add_boost_pads(&mut obs, state.boost_pads(inverted));

        // Self
        let me = self.add_player_to_obs(&mut obs, player, ball, inverted);

        // 스냅샷 순서 유지 (거리 정렬 없음)
        let (allies, enemies): (Vec<&PlayerData>, Vec<&PlayerData>) = state
            .players
            .iter()
            .filter(|other| other.car_id != player.car_id)
            .partition(|other| other.team == player.team);

        let ally_slots = self.team_size - 1;
        for ally in allies.iter().take(ally_slots) {
            self.add_other_to_obs(&mut obs, ally, me, ball, inverted);
        }
        for _ in allies.len().min(ally_slots)..ally_slots {
            Self::add_dummy(&mut obs);
        }

        let enemy_slots = self.team_size;
        for enemy in enemies.iter().take(enemy_slots) {
            self.add_other_to_obs(&mut obs, enemy, me, ball, inverted);
        }
        for _ in enemies.len().min(enemy_slots)..enemy_slots {
            Self::add_dummy(&mut obs);
        }

        debug_assert_eq!(obs.len(), self.obs_size());
        obs
    }

    fn obs_size(&self) -> usize {
        Self::obs_size_for(self.team_size)
    }
}

// =============================================================================
// Tests
// =============================================================================
