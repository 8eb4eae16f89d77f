//! Final heading blend, turn-rate limiting and position integration.

use glam::{Quat, Vec3};

use horde_core::config::SteeringConfig;
use horde_core::types::safe_normalize;

use crate::separation::SeparationForce;

/// Turn `current` toward `desired` about the Y axis by at most `max_angle`
/// radians. Snaps to `desired` when it is already within reach.
pub fn rotate_towards(current: Vec3, desired: Vec3, max_angle: f32) -> Vec3 {
    let current = safe_normalize(current, Vec3::Z);
    let desired = safe_normalize(desired, current);

    let cross_y = current.z * desired.x - current.x * desired.z;
    let angle = cross_y.atan2(current.dot(desired));
    if angle.abs() <= max_angle {
        return desired;
    }

    let step = max_angle.max(0.0).copysign(angle);
    safe_normalize(Quat::from_rotation_y(step) * current, current)
}

/// Mix the chosen heading with the separation direction. The separation share
/// grows with separation pressure, up to `separation_blend`.
pub fn blend_direction(
    chosen: Vec3,
    separation: &SeparationForce,
    config: &SteeringConfig,
) -> Vec3 {
    let blend = separation.ratio() * config.separation_blend;
    let mixed = chosen * (1.0 - blend) + separation.direction() * blend;
    safe_normalize(mixed, chosen)
}

/// Speed multiplier: slow down when blocked or crowded.
pub fn speed_scale(blocked: bool, separation: &SeparationForce, config: &SteeringConfig) -> f32 {
    let mut scale: f32 = 1.0;
    if blocked {
        scale = scale.min(config.blocked_speed_scale);
    }
    if separation.ratio() >= config.crowded_ratio {
        scale = scale.min(config.crowded_speed_scale);
    }
    scale
}

/// Advance `position` along `direction` at `speed` for `dt` seconds and turn
/// `forward` toward it by at most `max_turn` radians.
pub fn integrate(
    position: Vec3,
    forward: Vec3,
    direction: Vec3,
    speed: f32,
    dt: f32,
    max_turn: f32,
) -> (Vec3, Vec3) {
    let direction = safe_normalize(direction, Vec3::ZERO);
    let new_position = position + direction * speed * dt;
    let new_forward = if direction == Vec3::ZERO {
        forward
    } else {
        rotate_towards(forward, direction, max_turn)
    };
    (new_position, new_forward)
}
