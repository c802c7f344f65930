//! Fully random placement
//!
//! 공/차량을 필드 안 임의 위치·속도·회전으로 배치. 팀 조건 없음.

use rand::{Rng, RngCore};
use rand_distr::{Distribution, UnitSphere};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

use super::StateSetter;
use crate::engine::arena::{Arena, BallState, CarState};
use crate::engine::common_values::{ball, car, field};
use crate::engine::game::GameState;
use crate::engine::math::{rand_float, Angle, Vec3};
use crate::error::Result;

/// Spawn margin from walls and ceiling
const MARGIN: f32 = 300.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomState {
    pub random_pos: bool,
    pub random_vel: bool,
    pub cars_on_ground: bool,
}

impl Default for RandomState {
    fn default() -> Self {
        Self { random_pos: true, random_vel: true, cars_on_ground: false }
    }
}

impl RandomState {
    pub fn new(random_pos: bool, random_vel: bool, cars_on_ground: bool) -> Self {
        Self { random_pos, random_vel, cars_on_ground }
    }

    fn field_xy<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
        let x_lim = field::SIDE_WALL_X - MARGIN;
        let y_lim = field::BACK_WALL_Y - MARGIN;
        (rand_float(rng, -x_lim, x_lim), rand_float(rng, -y_lim, y_lim))
    }

    fn ball_state<R: Rng + ?Sized>(&self, rng: &mut R) -> BallState {
        let mut state = BallState::default();
        if self.random_pos {
            let (x, y) = Self::field_xy(rng);
            let z = rand_float(rng, ball::RADIUS, field::CEILING_Z - MARGIN);
            state.pos = Vec3::new(x, y, z);
        }
        if self.random_vel {
            state.vel = random_vector(rng, ball::MAX_SPEED);
            state.ang_vel = random_vector(rng, ball::MAX_ANG_SPEED);
        }
        state
    }

    fn car_state<R: Rng + ?Sized>(&self, rng: &mut R) -> CarState {
        let mut state = CarState { boost: rand_float(rng, 0.0, car::MAX_BOOST), ..Default::default() };

        let yaw = rand_float(rng, -PI, PI);
        let angle = if self.cars_on_ground {
            Angle::from_yaw(yaw)
        } else {
            Angle::new(yaw, rand_float(rng, -FRAC_PI_2, FRAC_PI_2), rand_float(rng, -PI, PI))
        };
        state.rot_mat = angle.to_rot_mat();

        if self.random_pos {
            let (x, y) = Self::field_xy(rng);
            let z = if self.cars_on_ground {
                car::RESTING_HEIGHT
            } else {
                rand_float(rng, car::RESTING_HEIGHT, field::CEILING_Z - MARGIN)
            };
            state.pos = Vec3::new(x, y, z);
        }

        if self.random_vel {
            if self.cars_on_ground {
                // 지상 차량은 바라보는 방향으로만 주행
                state.vel = state.rot_mat.forward * rand_float(rng, 0.0, car::MAX_SPEED);
                state.ang_vel = Vec3::new(0.0, 0.0, rand_float(rng, -car::MAX_ANG_SPEED, car::MAX_ANG_SPEED));
            } else {
                state.vel = random_vector(rng, car::MAX_SPEED);
                state.ang_vel = random_vector(rng, car::MAX_ANG_SPEED);
            }
        }

        state.is_on_ground = self.cars_on_ground;
        state
    }
}

/// Uniform direction on the unit sphere with magnitude `U(0, max)`
fn random_vector<R: Rng + ?Sized>(rng: &mut R, max: f32) -> Vec3 {
    let [x, y, z]: [f32; 3] = UnitSphere.sample(rng);
    Vec3::new(x, y, z) * rand_float(rng, 0.0, max)
}

impl StateSetter for RandomState {
    fn reset_state(&self, arena: &mut dyn Arena, rng: &mut dyn RngCore) -> Result<GameState> {
        let ball = self.ball_state(rng);
        arena.set_ball_state(&ball);

        for info in arena.cars() {
            let state = self.car_state(rng);
            arena.set_car_state(info.id, &state)?;
        }

        Ok(GameState::from_arena(arena))
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arena::SnapshotArena;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn in_field(p: &Vec3) -> bool {
        p.x.abs() <= field::SIDE_WALL_X && p.y.abs() <= field::BACK_WALL_Y && p.z >= 0.0 && p.z <= field::CEILING_Z
    }

    #[test]
    fn test_everything_in_bounds() {
        let setter = RandomState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        for _ in 0..200 {
            let mut arena = SnapshotArena::with_cars(3, 3);
            let state = setter.reset_state(&mut arena, &mut rng).unwrap();

            assert!(in_field(&state.ball.pos));
            assert!(state.ball.vel.norm() <= ball::MAX_SPEED + 1.0);
            assert!(state.ball.ang_vel.norm() <= ball::MAX_ANG_SPEED + 1e-3);

            for p in &state.players {
                assert!(in_field(&p.car_state.pos));
                assert!(p.car_state.vel.norm() <= car::MAX_SPEED + 1.0);
                assert!((0.0..=1.0).contains(&p.boost_fraction));
                assert!(!p.is_on_ground());
            }
        }
    }

    #[test]
    fn test_cars_on_ground_are_flat() {
        let setter = RandomState::new(true, true, true);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut arena = SnapshotArena::with_cars(2, 2);
        let state = setter.reset_state(&mut arena, &mut rng).unwrap();
        for p in &state.players {
            assert_eq!(p.car_state.pos.z, car::RESTING_HEIGHT);
            assert!(p.car_state.rot_mat.up.z > 0.999);
            assert!(p.car_state.vel.z.abs() < 1e-3);
            assert!(p.is_on_ground());
        }
    }

    #[test]
    fn test_no_randomization_keeps_defaults() {
        let setter = RandomState::new(false, false, true);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut arena = SnapshotArena::with_cars(1, 0);
        let state = setter.reset_state(&mut arena, &mut rng).unwrap();
        assert_eq!(state.ball.pos, BallState::default().pos);
        assert_eq!(state.ball.vel, Vec3::zeros());
        assert_eq!(state.players[0].car_state.vel, Vec3::zeros());
    }

    #[test]
    fn test_empty_arena_is_fine() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut arena = SnapshotArena::new();
        let state = RandomState::default().reset_state(&mut arena, &mut rng).unwrap();
        assert!(state.players.is_empty());
    }
}
