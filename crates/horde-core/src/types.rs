//! Fundamental geometric and simulation types.
//!
//! The swarm moves on the X/Z plane. Helpers here flatten vectors onto that
//! plane and guard every normalization against near-zero input.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Project a vector onto the horizontal plane (Y = 0).
pub fn planar(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Normalize the planar part of `v`, or return `fallback` when it is too short
/// to have a meaningful direction.
pub fn safe_normalize(v: Vec3, fallback: Vec3) -> Vec3 {
    let flat = planar(v);
    let len_sq = flat.length_squared();
    if len_sq < EPSILON || !len_sq.is_finite() {
        return fallback;
    }
    flat / len_sq.sqrt()
}

/// Horizontal unit vector at `angle` radians, measured from +Z toward +X.
pub fn direction_from_yaw(angle: f32) -> Vec3 {
    Vec3::new(angle.sin(), 0.0, angle.cos())
}

/// Yaw (radians, from +Z toward +X) of a planar direction.
pub fn yaw_of(forward: Vec3) -> f32 {
    forward.x.atan2(forward.z)
}

/// Planar direction rotated +90° about Y.
pub fn perpendicular(v: Vec3) -> Vec3 {
    Vec3::new(v.z, 0.0, -v.x)
}

/// Orientation quaternion facing `forward` with +Y up.
pub fn look_rotation(forward: Vec3) -> Quat {
    Quat::from_rotation_y(yaw_of(safe_normalize(forward, Vec3::Z)))
}
