//! Aerial setup: 공중에 뜬 공, 지상에서 공을 향해 달려가는 공격 차량.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::common::{place_defender_and_others, resolve_matchup};
use super::StateSetter;
use crate::engine::arena::{Arena, BallState, CarState};
use crate::engine::common_values::{car, field};
use crate::engine::game::GameState;
use crate::engine::math::{max_safe_vertical_speed, rand_float, Angle, Vec3};
use crate::error::Result;

/// Keeps the attacker clear of the walls
const WALL_MARGIN: f32 = 200.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AerialState {
    pub ball_min_z: f32,
    pub ball_max_z: f32,
    /// Ball apex must stay at or below this height
    pub safe_ceiling_z: f32,
}

impl Default for AerialState {
    fn default() -> Self {
        Self { ball_min_z: 500.0, ball_max_z: 1500.0, safe_ceiling_z: 2000.0 }
    }
}

impl StateSetter for AerialState {
    fn reset_state(&self, arena: &mut dyn Arena, rng: &mut dyn RngCore) -> Result<GameState> {
        let matchup = resolve_matchup(arena, rng)?;
        let team_fix = matchup.team_fix;

        let ball_pos = Vec3::new(
            rand_float(rng, -3000.0, 3000.0),
            rand_float(rng, -2500.0, 2500.0),
            rand_float(rng, self.ball_min_z, self.ball_max_z),
        );
        let vz_cap = max_safe_vertical_speed(ball_pos.z, self.safe_ceiling_z, field::GRAVITY).min(300.0);
        arena.set_ball_state(&BallState {
            pos: ball_pos,
            vel: Vec3::new(
                rand_float(rng, -200.0, 200.0),
                rand_float(rng, -200.0, 200.0),
                rand_float(rng, 0.0, vz_cap),
            ),
            ang_vel: Vec3::zeros(),
        });

        // 자기 골대 쪽으로 물러난 위치
        let back = rand_float(rng, 1000.0, 2000.0);
        let x_lim = field::SIDE_WALL_X - WALL_MARGIN;
        let y_lim = field::BACK_WALL_Y - WALL_MARGIN;
        let car_pos = Vec3::new(
            ball_pos.x.clamp(-x_lim, x_lim),
            (ball_pos.y - team_fix * back).clamp(-y_lim, y_lim),
            car::RESTING_HEIGHT,
        );

        let to_ball = ball_pos - car_pos;
        let rot_mat = Angle::from_yaw(to_ball.y.atan2(to_ball.x)).to_rot_mat();
        let attacker = CarState {
            pos: car_pos,
            rot_mat,
            vel: rot_mat.forward * rand_float(rng, 500.0, 1000.0),
            boost: rand_float(rng, 50.0, car::MAX_BOOST),
            ..Default::default()
        };
        arena.set_car_state(matchup.attacker, &attacker)?;

        place_defender_and_others(arena, rng, &matchup)?;

        Ok(GameState::from_arena(arena))
    }

    fn name(&self) -> &str {
        "aerial"
    }
}
