use serde::{Deserialize, Serialize};

use crate::engine::arena::{BallState, CarState};
use crate::engine::math::{mirror, RotMat, Vec3};

/// Read-only physics view of a car or the ball
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhysObj {
    pub pos: Vec3,
    pub rot_mat: RotMat,
    pub vel: Vec3,
    pub ang_vel: Vec3,
}

impl PhysObj {
    /// Mirrored view (Orange perspective): x/y of every vector negated, z kept.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            pos: mirror(&self.pos),
            rot_mat: self.rot_mat.invert(),
            vel: mirror(&self.vel),
            ang_vel: mirror(&self.ang_vel),
        }
    }
}

impl From<&CarState> for PhysObj {
    fn from(state: &CarState) -> Self {
        Self { pos: state.pos, rot_mat: state.rot_mat, vel: state.vel, ang_vel: state.ang_vel }
    }
}

impl From<&BallState> for PhysObj {
    fn from(state: &BallState) -> Self {
        Self { pos: state.pos, rot_mat: RotMat::identity(), vel: state.vel, ang_vel: state.ang_vel }
    }
}
