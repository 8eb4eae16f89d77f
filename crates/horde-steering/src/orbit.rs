//! Orbit distance control around the target.
//!
//! Evaluated fresh every tick from the current distance; nothing persists.

use glam::Vec3;

use horde_core::config::SteeringConfig;
use horde_core::types::{perpendicular, planar, safe_normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitState {
    /// Within tolerance of the desired distance.
    Holding,
    Approaching,
    Retreating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDecision {
    pub state: OrbitState,
    /// Desired planar heading; zero while holding.
    pub direction: Vec3,
    /// Planar distance to the target.
    pub distance: f32,
}

/// Classify a distance against the hold band `desired ± tolerance`.
pub fn classify(distance: f32, desired: f32, tolerance: f32) -> OrbitState {
    let error = distance - desired;
    if error.abs() <= tolerance {
        OrbitState::Holding
    } else if error > 0.0 {
        OrbitState::Approaching
    } else {
        OrbitState::Retreating
    }
}

/// Decide how an agent at `position` should move relative to `target`.
///
/// Outside the band the heading blends the radial direction (toward the
/// target when approaching, away when retreating) with the tangential one, so
/// agents spiral onto the orbit instead of driving straight at it. An agent
/// standing on the target uses its own forward as the radial direction.
pub fn evaluate(
    position: Vec3,
    forward: Vec3,
    target: Vec3,
    desired: f32,
    config: &SteeringConfig,
) -> OrbitDecision {
    let offset = planar(target - position);
    let distance = offset.length();
    let state = classify(distance, desired, config.radius_tolerance);

    let radial = safe_normalize(offset, safe_normalize(forward, Vec3::Z));
    let sign = match state {
        OrbitState::Holding => {
            return OrbitDecision {
                state,
                direction: Vec3::ZERO,
                distance,
            }
        }
        OrbitState::Approaching => 1.0,
        OrbitState::Retreating => -1.0,
    };

    let tangential = perpendicular(radial) * config.orbit_handedness.sign();
    let blended = radial * sign * config.radial_weight + tangential * config.tangential_weight;

    OrbitDecision {
        state,
        direction: safe_normalize(blended, radial * sign),
        distance,
    }
}
