use serde::{Deserialize, Serialize};

/// Slots in the previous-action block of an observation
pub const ACTION_SIZE: usize = 8;

/// Car controls as a fixed 8-slot encoding
///
/// Slot order: throttle, steer, pitch, yaw, roll, jump, boost, handbrake.
/// Booleans are encoded as 0.0 / 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub throttle: f32,
    pub steer: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub jump: f32,
    pub boost: f32,
    pub handbrake: f32,
}

impl Action {
    pub fn to_array(&self) -> [f32; ACTION_SIZE] {
        [
            self.throttle,
            self.steer,
            self.pitch,
            self.yaw,
            self.roll,
            self.jump,
            self.boost,
            self.handbrake,
        ]
    }

    pub fn from_array(a: [f32; ACTION_SIZE]) -> Self {
        Self {
            throttle: a[0],
            steer: a[1],
            pitch: a[2],
            yaw: a[3],
            roll: a[4],
            jump: a[5],
            boost: a[6],
            handbrake: a[7],
        }
    }

    /// Zero-extends shorter encodings; slots past 8 are ignored.
    pub fn from_slice(values: &[f32]) -> Self {
        let mut a = [0.0f32; ACTION_SIZE];
        for (dst, src) in a.iter_mut().zip(values) {
            *dst = *src;
        }
        Self::from_array(a)
    }
}

impl From<[f32; ACTION_SIZE]> for Action {
    fn from(a: [f32; ACTION_SIZE]) -> Self {
        Self::from_array(a)
    }
}
