//! Common Observation Utilities
//!
//! Shared push helpers for flat `Vec<f32>` observations.

use crate::engine::math::Vec3;

/// Append `v / scale` (3 floats)
#[inline]
pub fn push_scaled(obs: &mut Vec<f32>, v: &Vec3, scale: f32) {
    obs.extend_from_slice(&[v.x / scale, v.y / scale, v.z / scale]);
}

/// Append `v` unchanged (3 floats)
#[inline]
pub fn push_vec(obs: &mut Vec<f32>, v: &Vec3) {
    obs.extend_from_slice(&[v.x, v.y, v.z]);
}

/// Append a boolean as 0.0 / 1.0
#[inline]
pub fn push_flag(obs: &mut Vec<f32>, flag: bool) {
    obs.push(if flag { 1.0 } else { 0.0 });
}

/// Append `n` zeros
#[inline]
pub fn push_zeros(obs: &mut Vec<f32>, n: usize) {
    obs.resize(obs.len() + n, 0.0);
}
