//! Wall air-dribble setup
//!
//! 공격 차량이 자기 진영 사이드 월 근처에서 공과 함께 벽 쪽으로 달리는 상황.
//! 공은 벽에 붙어 차보다 1.2배 빠르게 굴러가므로 벽을 타고 올라가 에어 드리블로
//! 이어갈 수 있다. 수비 차량은 자기 골대 앞에서 대기.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use super::common::{ground_car, resolve_matchup};
use super::StateSetter;
use crate::engine::arena::{Arena, BallState, CarState};
use crate::engine::common_values::{ball, car, field};
use crate::engine::game::GameState;
use crate::engine::math::{coin_flip, rand_float, Angle, Vec3};
use crate::error::Result;

/// Distance from the side wall to the setup lane
const WALL_OFFSET: f32 = 700.0;
/// Gap between the ball and the wall
const BALL_WALL_GAP: f32 = 10.0;
/// Ball spawn height (just above resting)
const BALL_Z: f32 = 94.0;
/// Attacker sits this far from the ball towards the field centre
const CAR_BALL_GAP_X: f32 = 500.0;
const BALL_SPEED_RATIO: f32 = 1.2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AirDribbleSetup {
    /// Ball velocity multiplier on top of the 1.2 × car velocity
    pub ball_vel_mult: f32,
    /// Force zero vertical ball velocity
    pub ball_zero_z: bool,
}

impl Default for AirDribbleSetup {
    fn default() -> Self {
        Self { ball_vel_mult: 1.0, ball_zero_z: false }
    }
}

impl AirDribbleSetup {
    pub fn new(ball_vel_mult: f32, ball_zero_z: bool) -> Self {
        Self { ball_vel_mult, ball_zero_z }
    }
}

impl StateSetter for AirDribbleSetup {
    fn reset_state(&self, arena: &mut dyn Arena, rng: &mut dyn RngCore) -> Result<GameState> {
        let matchup = resolve_matchup(arena, rng)?;
        let team_fix = matchup.team_fix;

        // 왼쪽/오른쪽 벽 선택
        let wall_x = if coin_flip(rng) {
            field::SIDE_WALL_X - WALL_OFFSET
        } else {
            -field::SIDE_WALL_X + WALL_OFFSET
        };
        let wall_sign = wall_x.signum();

        // 차는 벽 방향 + 상대 골대 방향으로 주행
        let car_vel = Vec3::new(
            rand_float(rng, 1000.0, 1200.0) * wall_sign,
            rand_float(rng, 50.0, 500.0) * team_fix,
            0.0,
        );

        // 공격 팀 진영 안쪽 (Blue는 -Y, Orange는 +Y)
        let ball_y = rand_float(rng, 500.0, 3000.0) * -team_fix;
        let ball_x = wall_x - wall_sign * (ball::RADIUS + BALL_WALL_GAP);

        let mut ball_vel = car_vel * BALL_SPEED_RATIO * self.ball_vel_mult;
        if self.ball_zero_z {
            ball_vel.z = 0.0;
        }
        arena.set_ball_state(&BallState {
            pos: Vec3::new(ball_x, ball_y, BALL_Z),
            vel: ball_vel,
            ang_vel: Vec3::zeros(),
        });

        // 공격 차량: 공 뒤쪽(필드 중앙 방향), 진행 방향을 바라봄
        let attacker = CarState {
            pos: Vec3::new(
                ball_x - CAR_BALL_GAP_X * wall_sign,
                ball_y - car_vel.y * 0.5,
                car::RESTING_HEIGHT,
            ),
            rot_mat: Angle::from_yaw(car_vel.y.atan2(car_vel.x)).to_rot_mat(),
            vel: car_vel,
            ang_vel: Vec3::new(0.0, 0.1, 0.0),
            boost: rand_float(rng, 45.0, car::MAX_BOOST),
            ..Default::default()
        };
        arena.set_car_state(matchup.attacker, &attacker)?;

        // 나머지 차량은 모두 수비 골대 근처
        for info in arena.cars() {
            if info.id == matchup.attacker {
                continue;
            }
            let x = rand_float(rng, -2000.0, 2000.0);
            let y = team_fix * rand_float(rng, 4000.0, 5000.0);
            let boost = rand_float(rng, 30.0, car::MAX_BOOST);
            arena.set_car_state(info.id, &ground_car(x, y, -FRAC_PI_2 * team_fix, boost))?;
        }

        Ok(GameState::from_arena(arena))
    }

    fn name(&self) -> &str {
        "air_dribble"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arena::{SnapshotArena, Team};
    use crate::error::StateSetterError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_ball_hugs_wall_in_attacker_half() {
        let setter = AirDribbleSetup::default();
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        for _ in 0..100 {
            let mut arena = SnapshotArena::with_cars(1, 1);
            let state = setter.reset_state(&mut arena, &mut rng).unwrap();
            let ball = state.ball;

            let wall_gap = field::SIDE_WALL_X - WALL_OFFSET - ball.pos.x.abs();
            assert!((wall_gap - (ball::RADIUS + BALL_WALL_GAP)).abs() < 1e-3);
            assert_eq!(ball.pos.z, BALL_Z);
            assert!(ball.pos.y.abs() >= 500.0 && ball.pos.y.abs() <= 3000.0);

            let attacker = state
                .players
                .iter()
                .find(|p| p.car_state.vel.norm() > 0.0)
                .expect("attacker is moving");
            // 공격 팀 진영 + 상대 골대 방향 주행
            let sign = attacker.team.attack_sign();
            assert!(ball.pos.y * sign < 0.0);
            assert!(attacker.car_state.vel.y * sign > 0.0);
            // 벽 방향 주행, 공은 차보다 1.2배 빠름
            assert!(attacker.car_state.vel.x * ball.pos.x > 0.0);
            assert!((ball.vel - attacker.car_state.vel * 1.2).norm() < 1e-2);
            // 진행 방향을 바라봄
            let forward = attacker.car_state.rot_mat.forward;
            assert!(forward.dot(&attacker.car_state.vel.normalize()) > 0.999);
            assert!(attacker.boost_fraction >= 0.45);
        }
    }

    #[test]
    fn test_defenders_in_goal_facing_play() {
        let setter = AirDribbleSetup::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut arena = SnapshotArena::with_cars(2, 2);
        let state = setter.reset_state(&mut arena, &mut rng).unwrap();

        let moving: Vec<_> = state.players.iter().filter(|p| p.car_state.vel.norm() > 0.0).collect();
        assert_eq!(moving.len(), 1);
        let attack_sign = moving[0].team.attack_sign();

        for p in state.players.iter().filter(|p| p.car_id != moving[0].car_id) {
            let y = p.car_state.pos.y * attack_sign;
            assert!((4000.0..=5000.0).contains(&y), "car {} at y={}", p.car_id, p.car_state.pos.y);
            // 골대에서 필드 쪽을 바라봄
            assert!(p.car_state.rot_mat.forward.y * attack_sign < -0.99);
        }
    }

    #[test]
    fn test_zero_z_and_multiplier() {
        let setter = AirDribbleSetup::new(2.0, true);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut arena = SnapshotArena::with_cars(1, 1);
        let state = setter.reset_state(&mut arena, &mut rng).unwrap();
        let attacker = state.players.iter().find(|p| p.car_state.vel.norm() > 0.0).unwrap();
        assert_eq!(state.ball.vel.z, 0.0);
        assert!((state.ball.vel - attacker.car_state.vel * 2.4).norm() < 1e-2);
    }

    #[test]
    fn test_missing_team_leaves_arena_untouched() {
        let setter = AirDribbleSetup::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut arena = SnapshotArena::with_cars(1, 0);
        let before = GameState::from_arena(&arena);

        let err = setter.reset_state(&mut arena, &mut rng).unwrap_err();
        assert_eq!(err, StateSetterError::MissingTeamCar { team: Team::Orange });
        assert_eq!(GameState::from_arena(&arena), before);
    }
}
