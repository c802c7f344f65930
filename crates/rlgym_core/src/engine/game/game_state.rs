use serde::{Deserialize, Serialize};

use super::physics_object::PhysObj;
use super::player_data::PlayerData;
use crate::engine::arena::{Arena, CarId};

/// Immutable snapshot of an arena
///
/// Holds both world-frame and mirrored (Orange perspective) views of the ball
/// and boost pads so builders can pick one with a single flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: PhysObj,
    pub ball_inv: PhysObj,
    /// Arena iteration order
    pub players: Vec<PlayerData>,
    /// 34 pads, world order
    pub boost_pads: Vec<f32>,
    /// 34 pads, mirrored order
    pub boost_pads_inv: Vec<f32>,
}

impl GameState {
    pub fn from_arena(arena: &dyn Arena) -> Self {
        let ball = PhysObj::from(&arena.ball_state());
        let players = arena.cars().iter().map(PlayerData::from_car).collect();

        let boost_pads = arena.boost_pad_states().to_vec();
        let mut boost_pads_inv = boost_pads.clone();
        boost_pads_inv.reverse();

        Self { ball, ball_inv: ball.invert(), players, boost_pads, boost_pads_inv }
    }

    #[inline]
    pub fn ball_phys(&self, inverted: bool) -> &PhysObj {
        if inverted {
            &self.ball_inv
        } else {
            &self.ball
        }
    }

    #[inline]
    pub fn boost_pads(&self, inverted: bool) -> &[f32] {
        if inverted {
            &self.boost_pads_inv
        } else {
            &self.boost_pads
        }
    }

    pub fn player(&self, car_id: CarId) -> Option<&PlayerData> {
        self.players.iter().find(|p| p.car_id == car_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arena::{BallState, SnapshotArena, Team};
    use crate::engine::math::Vec3;

    #[test]
    fn test_from_arena() {
        let mut arena = SnapshotArena::with_cars(1, 2);
        arena.set_ball_state(&BallState { pos: Vec3::new(10.0, 20.0, 30.0), ..Default::default() });
        arena.set_pad_active(0, false);

        let state = GameState::from_arena(&arena);
        assert_eq!(state.players.len(), 3);
        assert_eq!(state.players[0].team, Team::Blue);
        assert_eq!(state.ball.pos, Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(state.ball_inv.pos, Vec3::new(-10.0, -20.0, 30.0));
        assert_eq!(state.boost_pads[0], 0.0);
        assert_eq!(state.boost_pads_inv[33], 0.0);
        assert_eq!(state.boost_pads(true).len(), 34);
        assert!(state.player(2).is_some());
        assert!(state.player(99).is_none());
    }
}
