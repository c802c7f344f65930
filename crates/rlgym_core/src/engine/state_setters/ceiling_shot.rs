//! Ceiling shot setup
//!
//! 공격 차량이 뒤집힌 채 천장 쪽으로 솟구치고, 공은 차 앞쪽 위에서
//! 상대 골대 방향으로 떠오른다. 공의 최고점은 천장 안전 높이를 넘지 않는다.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::common::{place_defender_and_others, resolve_matchup};
use super::StateSetter;
use crate::engine::arena::{Arena, BallState, CarState};
use crate::engine::common_values::{car, field};
use crate::engine::game::GameState;
use crate::engine::math::{max_safe_vertical_speed, rand_float, Angle, Vec3};
use crate::error::Result;

/// Attacker launch speed (just under max car speed)
const CAR_LAUNCH_VZ: f32 = 2299.99;
/// Ball spawn height offset above the attacker
pub const BALL_DZ_MIN: f32 = 50.0;
pub const BALL_DZ_MAX: f32 = 120.0;
/// Ball spawn height cap before resampling
pub const BALL_Z_CAP: f32 = 1600.0;
/// Resampled spawn height floor when the cap is hit
const BALL_Z_RESAMPLE_MIN: f32 = 1400.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CeilingShotState {
    /// Attacker spawn height range
    pub car_min_z: f32,
    pub car_max_z: f32,
    /// Ball apex must stay at or below this height
    pub safe_ceiling_z: f32,
    pub ball_min_vz: f32,
    pub ball_max_vz: f32,
}

impl Default for CeilingShotState {
    fn default() -> Self {
        Self {
            car_min_z: 800.0,
            car_max_z: 1850.0,
            safe_ceiling_z: 2000.0,
            ball_min_vz: 600.0,
            ball_max_vz: 900.0,
        }
    }
}

impl CeilingShotState {
    /// Highest possible ball spawn for `car_max_z`.
    /// `safe_ceiling_z`가 이보다 낮으면 최고점 보장이 깨진다.
    pub fn max_ball_spawn_z(&self) -> f32 {
        (self.car_max_z + BALL_DZ_MAX).min(BALL_Z_CAP)
    }

    /// Ball spawn relative to the attacker's car position.
    ///
    /// 상승 속도는 `[ball_min_vz, min(v_max, ball_max_vz)]`에서 샘플링하며,
    /// `v_max`가 하한보다 작으면 하한을 `v_max`로 낮춘다.
    pub fn ball_launch<R: Rng + ?Sized>(&self, rng: &mut R, car_pos: &Vec3, team_fix: f32) -> BallState {
        let mut pos = Vec3::new(
            car_pos.x + rand_float(rng, -30.0, 30.0),
            car_pos.y + team_fix * rand_float(rng, 250.0, 400.0),
            car_pos.z + rand_float(rng, BALL_DZ_MIN, BALL_DZ_MAX),
        );
        if pos.z > BALL_Z_CAP {
            pos.z = rand_float(rng, BALL_Z_RESAMPLE_MIN, BALL_Z_CAP);
        }

        let v_max = max_safe_vertical_speed(pos.z, self.safe_ceiling_z, field::GRAVITY);
        let hi = v_max.min(self.ball_max_vz);
        let lo = self.ball_min_vz.min(hi);
        let vz = rand_float(rng, lo, hi);

        let vel = Vec3::new(
            rand_float(rng, -50.0, 50.0),
            team_fix * rand_float(rng, 400.0, 800.0),
            vz,
        );
        let ang_vel = Vec3::new(
            rand_float(rng, -3.0, 3.0),
            rand_float(rng, -3.0, 3.0),
            rand_float(rng, -3.0, 3.0),
        );

        BallState { pos, vel, ang_vel }
    }
}

impl StateSetter for CeilingShotState {
    fn reset_state(&self, arena: &mut dyn Arena, rng: &mut dyn RngCore) -> Result<GameState> {
        let matchup = resolve_matchup(arena, rng)?;
        let team_fix = matchup.team_fix;

        let car_pos = Vec3::new(
            rand_float(rng, -2500.0, 2500.0),
            rand_float(rng, -3500.0, 3500.0),
            rand_float(rng, self.car_min_z, self.car_max_z),
        );
        let yaw_deg = team_fix * 90.0 + rand_float(rng, -30.0, 30.0);
        // 뒤집힌 상태 (roll 180°)
        let rot = Angle::new(yaw_deg.to_radians(), 0.0, std::f32::consts::PI);

        let attacker = CarState {
            pos: car_pos,
            rot_mat: rot.to_rot_mat(),
            vel: Vec3::new(0.0, 0.0, CAR_LAUNCH_VZ),
            boost: rand_float(rng, 50.0, car::MAX_BOOST),
            is_on_ground: false,
            ..Default::default()
        };
        arena.set_car_state(matchup.attacker, &attacker)?;

        let ball = self.ball_launch(rng, &car_pos, team_fix);
        arena.set_ball_state(&ball);

        place_defender_and_others(arena, rng, &matchup)?;

        Ok(GameState::from_arena(arena))
    }

    fn name(&self) -> &str {
        "ceiling_shot"
    }
}
