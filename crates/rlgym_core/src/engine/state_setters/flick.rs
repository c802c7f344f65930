//! Ground dribble / flick setup
//!
//! 공격 차량이 자기 진영에서 상대 골대 방향으로 천천히 달리고,
//! 공은 차 지붕 위에 올라가 같은 속도로 움직인다.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

use super::common::{place_defender_and_others, resolve_matchup};
use super::StateSetter;
use crate::engine::arena::{Arena, BallState, CarState};
use crate::engine::common_values::{ball, car};
use crate::engine::game::GameState;
use crate::engine::math::{rand_float, Angle, Vec3};
use crate::error::Result;

/// Ball sits slightly ahead of the car's centre
const ROOF_FORWARD_OFFSET: f32 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlickState {
    pub max_speed: f32,
}

impl Default for FlickState {
    fn default() -> Self {
        Self { max_speed: 500.0 }
    }
}

impl StateSetter for FlickState {
    fn reset_state(&self, arena: &mut dyn Arena, rng: &mut dyn RngCore) -> Result<GameState> {
        let matchup = resolve_matchup(arena, rng)?;
        let team_fix = matchup.team_fix;

        let pos = Vec3::new(
            rand_float(rng, -2500.0, 2500.0),
            -team_fix * rand_float(rng, 1000.0, 3500.0),
            car::RESTING_HEIGHT,
        );
        let yaw = team_fix * FRAC_PI_2 + rand_float(rng, -FRAC_PI_6, FRAC_PI_6);
        let rot_mat = Angle::from_yaw(yaw).to_rot_mat();
        let vel = rot_mat.forward * rand_float(rng, 0.0, self.max_speed);

        let attacker = CarState {
            pos,
            rot_mat,
            vel,
            boost: rand_float(rng, 30.0, car::MAX_BOOST),
            ..Default::default()
        };
        arena.set_car_state(matchup.attacker, &attacker)?;

        arena.set_ball_state(&BallState {
            pos: pos + rot_mat.forward * ROOF_FORWARD_OFFSET + Vec3::new(0.0, 0.0, ball::ROOF_OFFSET),
            vel,
            ang_vel: Vec3::zeros(),
        });

        place_defender_and_others(arena, rng, &matchup)?;

        Ok(GameState::from_arena(arena))
    }

    fn name(&self) -> &str {
        "flick"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arena::SnapshotArena;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_ball_on_roof_moving_with_car() {
        let setter = FlickState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        for _ in 0..100 {
            let mut arena = SnapshotArena::with_cars(1, 1);
            let state = setter.reset_state(&mut arena, &mut rng).unwrap();

            // 수비는 골대 (|y| ≥ 4500), 공격은 자기 진영 (|y| ≤ 3500)
            let attacker = state.players.iter().find(|p| p.car_state.pos.y.abs() <= 3500.0).unwrap();
            let sign = attacker.team.attack_sign();

            assert!(attacker.car_state.pos.y * sign <= -1000.0 + 1e-3);
            assert!(attacker.car_state.rot_mat.forward.y * sign > 0.86);
            assert!(attacker.car_state.vel.norm() <= 500.1);
            assert_eq!(state.ball.vel, attacker.car_state.vel);

            let offset = state.ball.pos - attacker.car_state.pos;
            assert!((offset.z - ball::ROOF_OFFSET).abs() < 1e-3);
            assert!((offset.xy().norm() - ROOF_FORWARD_OFFSET).abs() < 1e-3);
        }
    }

    #[test]
    fn test_extra_cars_on_ground() {
        let setter = FlickState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut arena = SnapshotArena::with_cars(3, 3);
        let state = setter.reset_state(&mut arena, &mut rng).unwrap();
        assert_eq!(state.players.len(), 6);
        assert!(state.players.iter().all(|p| p.is_on_ground()));
        assert!(state.players.iter().all(|p| p.car_state.pos.z == car::RESTING_HEIGHT));
    }
}
