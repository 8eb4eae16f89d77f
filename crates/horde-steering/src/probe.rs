//! Blocked-path detection and sector sampling.
//!
//! A heading is blocked when a neighbor (or the player) sits ahead within the
//! lookahead distance with a small lateral offset. A blocked agent samples
//! evenly spaced headings around a full circle, starting at its own heading,
//! and takes the one with the most clear distance.

use std::f32::consts::TAU;

use glam::Vec3;

use horde_core::components::AvoidanceProfile;
use horde_core::config::SteeringConfig;
use horde_core::types::{direction_from_yaw, planar, yaw_of};

use crate::snapshot::SpatialSnapshot;

/// Outcome of probing one heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeResult {
    pub blocked: bool,
    /// Heading to travel: the probed heading when clear, the best sample when
    /// blocked.
    pub direction: Vec3,
}

/// Everything that can obstruct the agent at `index`: other agents and the player.
fn obstacles<'a>(
    index: usize,
    snapshot: &'a SpatialSnapshot,
    config: &'a SteeringConfig,
) -> impl Iterator<Item = (Vec3, f32)> + 'a {
    snapshot
        .iter()
        .filter(move |(i, _, _)| *i != index)
        .map(|(_, position, radius)| (position, radius))
        .chain(snapshot.target().map(|t| (t, config.target_radius)))
}

/// Split `offset` into its distance along `direction` and its lateral distance.
fn decompose(offset: Vec3, direction: Vec3) -> (f32, f32) {
    let ahead = offset.dot(direction);
    let lateral = (offset - direction * ahead).length();
    (ahead, lateral)
}

fn probe_range(profile: &AvoidanceProfile, config: &SteeringConfig) -> f32 {
    config.lookahead_distance.min(profile.detection_radius)
}

/// Whether anything sits ahead of `heading` closely enough to block it.
/// `heading` must be a planar unit vector.
pub fn is_blocked(
    index: usize,
    position: Vec3,
    heading: Vec3,
    profile: &AvoidanceProfile,
    snapshot: &SpatialSnapshot,
    config: &SteeringConfig,
) -> bool {
    let range = probe_range(profile, config);
    let range_sq = range * range;
    let threshold = config.lateral_threshold_scale * profile.entity_radius;

    obstacles(index, snapshot, config).any(|(other, _)| {
        let offset = planar(other - position);
        if offset.length_squared() > range_sq {
            return false;
        }
        let (ahead, lateral) = decompose(offset, heading);
        ahead > 0.0 && lateral < threshold
    })
}

/// Free travel along `direction` before touching the nearest obstacle in the
/// probe cone, capped at the probe range. Negative when an obstacle in the
/// cone is already closer than the two radii combined.
pub fn clear_distance(
    index: usize,
    position: Vec3,
    direction: Vec3,
    profile: &AvoidanceProfile,
    snapshot: &SpatialSnapshot,
    config: &SteeringConfig,
) -> f32 {
    let range = probe_range(profile, config);
    let cone = config.probe_cone_scale * profile.entity_radius;

    obstacles(index, snapshot, config)
        .filter_map(|(other, other_radius)| {
            let (ahead, lateral) = decompose(planar(other - position), direction);
            (ahead > 0.0 && ahead <= range && lateral < cone)
                .then(|| ahead - (profile.entity_radius + other_radius))
        })
        .fold(range, f32::min)
}

/// Probe `heading` and propose an alternative when it is blocked.
pub fn probe(
    index: usize,
    position: Vec3,
    heading: Vec3,
    profile: &AvoidanceProfile,
    snapshot: &SpatialSnapshot,
    config: &SteeringConfig,
) -> ProbeResult {
    if !is_blocked(index, position, heading, profile, snapshot, config) {
        return ProbeResult {
            blocked: false,
            direction: heading,
        };
    }

    let base_yaw = yaw_of(heading);
    let step = TAU / config.sector_count as f32;
    let mut best_score = f32::NEG_INFINITY;
    let mut best_direction = heading;

    for k in 0..config.sector_count {
        let candidate = direction_from_yaw(base_yaw + step * k as f32);
        let score = clear_distance(index, position, candidate, profile, snapshot, config);
        if score > best_score {
            best_score = score;
            best_direction = candidate;
        }
    }

    // Nowhere to go: keep pushing forward and let separation sort it out.
    if best_score < 0.0 {
        best_direction = heading;
    }

    ProbeResult {
        blocked: true,
        direction: best_direction,
    }
}
