//! Vector / rotation helpers shared by the observation and state setter code.

use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// World-space vector (uu, uu/s or rad/s depending on field)
pub type Vec3 = Vector3<f32>;

/// Mirror across the field's long axis (Orange perspective): x, y negated.
#[inline]
pub fn mirror(v: &Vec3) -> Vec3 {
    Vec3::new(-v.x, -v.y, v.z)
}

// =============================================================================
// Rotation Matrix
// =============================================================================

/// Orientation as three orthonormal basis vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotMat {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Default for RotMat {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotMat {
    pub fn identity() -> Self {
        Self { forward: Vec3::x(), right: Vec3::y(), up: Vec3::z() }
    }

    /// Mirror every basis vector across the long axis (x, y negated).
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            forward: mirror(&self.forward),
            right: mirror(&self.right),
            up: mirror(&self.up),
        }
    }
}

// =============================================================================
// Euler Angle
// =============================================================================

/// Yaw / pitch / roll in radians (RocketSim argument order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Angle {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Flat on the ground, facing `yaw`.
    pub fn from_yaw(yaw: f32) -> Self {
        Self { yaw, pitch: 0.0, roll: 0.0 }
    }

    pub fn to_rot_mat(&self) -> RotMat {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let (sr, cr) = self.roll.sin_cos();

        RotMat {
            forward: Vec3::new(cp * cy, cp * sy, sp),
            right: Vec3::new(cy * sp * sr - cr * sy, sy * sp * sr + cr * cy, -cp * sr),
            up: Vec3::new(-cr * cy * sp - sr * sy, -cr * sy * sp + sr * cy, cp * cr),
        }
    }
}

// =============================================================================
// Random Helpers
// =============================================================================

/// Uniform float in `[min, max)`. Degenerate ranges (`min >= max`, NaN or
/// infinite span) return `min`.
#[inline]
pub fn rand_float<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span > 0.0 && span.is_finite() {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// 50% 확률로 true
#[inline]
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Maximum upward speed that keeps a projectile's apex at or below `ceiling`.
///
/// `v = sqrt(2 * g * (ceiling - z))`, zero when already at or above the ceiling.
#[inline]
pub fn max_safe_vertical_speed(spawn_z: f32, ceiling: f32, gravity: f32) -> f32 {
    (2.0 * gravity * (ceiling - spawn_z)).max(0.0).sqrt()
}

/// Apex height reached from `z` with upward speed `vz`.
#[inline]
pub fn apex_height(z: f32, vz: f32, gravity: f32) -> f32 {
    if vz <= 0.0 {
        z
    } else {
        z + vz * vz / (2.0 * gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f32::consts::PI;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let rot = Angle::default().to_rot_mat();
        assert!(approx(rot.forward, Vec3::x()));
        assert!(approx(rot.right, Vec3::y()));
        assert!(approx(rot.up, Vec3::z()));
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let rot = Angle::from_yaw(PI / 2.0).to_rot_mat();
        assert!(approx(rot.forward, Vec3::y()));
        assert!(approx(rot.up, Vec3::z()));
    }

    #[test]
    fn test_upside_down_roll() {
        let rot = Angle::new(0.0, 0.0, PI).to_rot_mat();
        assert!(approx(rot.forward, Vec3::x()));
        assert!(approx(rot.up, -Vec3::z()));
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let rot = Angle::new(0.7, -0.3, 2.1).to_rot_mat();
        assert!((rot.forward.norm() - 1.0).abs() < 1e-5);
        assert!((rot.up.norm() - 1.0).abs() < 1e-5);
        assert!(rot.forward.dot(&rot.up).abs() < 1e-5);
        assert!(rot.forward.dot(&rot.right).abs() < 1e-5);
    }

    #[test]
    fn test_invert_rot_mat() {
        let rot = Angle::from_yaw(0.3).to_rot_mat();
        let inv = rot.invert();
        assert!((inv.forward.x + rot.forward.x).abs() < 1e-6);
        assert!((inv.forward.y + rot.forward.y).abs() < 1e-6);
        assert_eq!(inv.up.z, rot.up.z);
        assert_eq!(inv.invert(), rot);
    }

    #[test]
    fn test_rand_float_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rand_float(&mut rng, -3.0, 5.0);
            assert!((-3.0..5.0).contains(&v));
        }
        assert_eq!(rand_float(&mut rng, 2.0, 2.0), 2.0);
        assert_eq!(rand_float(&mut rng, 3.0, 1.0), 3.0);
        assert_eq!(rand_float(&mut rng, 800.0, f32::INFINITY), 800.0);
        assert!(rand_float(&mut rng, f32::NAN, 1.0).is_nan());
        assert_eq!(rand_float(&mut rng, 800.0, f32::NAN), 800.0);
    }

    #[test]
    fn test_safe_vertical_speed_reaches_ceiling() {
        let v = max_safe_vertical_speed(1000.0, 2000.0, 650.0);
        assert!((apex_height(1000.0, v, 650.0) - 2000.0).abs() < 0.5);
        assert_eq!(max_safe_vertical_speed(2100.0, 2000.0, 650.0), 0.0);
    }
}
