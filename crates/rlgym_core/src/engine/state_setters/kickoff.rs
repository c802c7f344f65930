//! Standard kickoff
//!
//! 공은 센터에 정지, Blue 차량은 섞인 킥오프 스폰 위치에,
//! Orange 차량은 같은 인덱스 스폰의 점대칭 위치에 배치.

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::common::ground_car;
use super::StateSetter;
use crate::engine::arena::{Arena, BallState, CarState, Team};
use crate::engine::common_values::{car, kickoff};
use crate::engine::game::GameState;
use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KickoffState;

impl KickoffState {
    pub fn new() -> Self {
        Self
    }

    /// Spawn for the `slot`-th car of `team`; Orange mirrors the Blue spawn.
    fn spawn(order: &[usize], slot: usize, team: Team) -> CarState {
        let (x, y, yaw) = kickoff::BLUE_SPAWNS[order[slot % order.len()]];
        match team {
            Team::Blue => ground_car(x, y, yaw, car::KICKOFF_BOOST),
            Team::Orange => ground_car(-x, -y, yaw + PI, car::KICKOFF_BOOST),
        }
    }
}

impl StateSetter for KickoffState {
    fn reset_state(&self, arena: &mut dyn Arena, rng: &mut dyn RngCore) -> Result<GameState> {
        let mut order: Vec<usize> = (0..kickoff::BLUE_SPAWNS.len()).collect();
        order.shuffle(rng);

        arena.set_ball_state(&BallState::default());

        let mut blue_slot = 0;
        let mut orange_slot = 0;
        for info in arena.cars() {
            let slot = match info.team {
                Team::Blue => &mut blue_slot,
                Team::Orange => &mut orange_slot,
            };
            let state = Self::spawn(&order, *slot, info.team);
            *slot += 1;
            arena.set_car_state(info.id, &state)?;
        }

        Ok(GameState::from_arena(arena))
    }

    fn name(&self) -> &str {
        "kickoff"
    }
}
