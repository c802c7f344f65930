use serde::{Deserialize, Serialize};

use super::physics_object::PhysObj;
use crate::engine::arena::{CarId, CarInfo, CarState, Team};
use crate::engine::common_values::car;

/// Per-player view derived from a car snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub car_id: CarId,
    pub team: Team,
    pub car_state: CarState,
    pub phys: PhysObj,
    pub phys_inv: PhysObj,
    /// 0..1
    pub boost_fraction: f32,
    pub has_flip: bool,
    pub has_jump: bool,
}

impl PlayerData {
    pub fn from_car(info: &CarInfo) -> Self {
        let state = &info.state;
        let phys = PhysObj::from(state);

        Self {
            car_id: info.id,
            team: info.team,
            car_state: *state,
            phys,
            phys_inv: phys.invert(),
            boost_fraction: state.boost / car::MAX_BOOST,
            has_flip: has_flip_or_jump(state),
            has_jump: !state.has_jumped,
        }
    }

    /// Physics view in the requested perspective
    #[inline]
    pub fn phys(&self, inverted: bool) -> &PhysObj {
        if inverted {
            &self.phys_inv
        } else {
            &self.phys
        }
    }

    #[inline]
    pub fn is_on_ground(&self) -> bool {
        self.car_state.is_on_ground
    }

    #[inline]
    pub fn is_demoed(&self) -> bool {
        self.car_state.is_demoed
    }
}

/// 바닥에 있거나, 공중에서 아직 플립/더블점프를 쓰지 않았고 유예 시간 내인 경우
fn has_flip_or_jump(state: &CarState) -> bool {
    state.is_on_ground
        || (!state.has_flipped
            && !state.has_double_jumped
            && state.air_time_since_jump < car::DOUBLEJUMP_MAX_DELAY)
}
