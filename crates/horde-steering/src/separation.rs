//! Separation force from nearby agents and the player.
//!
//! Two tiers per contribution: overlapping pairs get a strong emergency push
//! scaled by penetration, pairs merely inside the detection radius get a
//! smooth push that fades to zero at the radius edge. Player contributions
//! are multiplied by `target_priority`. The result is the force-weighted mean
//! direction scaled by the strongest single contribution, clamped to the
//! agent's force ceiling, so crowd density alone cannot inflate it.

use glam::Vec3;

use horde_core::components::AvoidanceProfile;
use horde_core::config::SteeringConfig;
use horde_core::constants::EPSILON;
use horde_core::types::{direction_from_yaw, planar, safe_normalize};

use crate::snapshot::SpatialSnapshot;

/// Planar repulsion for one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparationForce {
    /// Repulsion vector (Y = 0).
    pub vector: Vec3,
    /// Length of `vector`, never above `max_force`.
    pub magnitude: f32,
    /// Ceiling this agent was clamped to.
    pub max_force: f32,
}

impl SeparationForce {
    pub fn zero(max_force: f32) -> Self {
        Self {
            vector: Vec3::ZERO,
            magnitude: 0.0,
            max_force,
        }
    }

    /// Unit direction of the push, or zero when there is none.
    pub fn direction(&self) -> Vec3 {
        safe_normalize(self.vector, Vec3::ZERO)
    }

    /// Magnitude as a fraction of the ceiling, in [0, 1].
    pub fn ratio(&self) -> f32 {
        if self.max_force <= 0.0 {
            return 0.0;
        }
        (self.magnitude / self.max_force).clamp(0.0, 1.0)
    }

    /// Whether the push is strong enough to override orbit steering.
    pub fn is_emergency(&self, config: &SteeringConfig) -> bool {
        self.magnitude > 0.0 && self.ratio() >= config.emergency_ratio
    }
}

#[derive(Default)]
struct Accumulator {
    sum: Vec3,
    weight: f32,
    peak: f32,
}

impl Accumulator {
    fn add(&mut self, direction: Vec3, force: f32) {
        if force <= 0.0 || !force.is_finite() {
            return;
        }
        self.sum += direction * force;
        self.weight += force;
        self.peak = self.peak.max(force);
    }

    fn finish(self, max_force: f32) -> SeparationForce {
        if self.weight <= 0.0 {
            return SeparationForce::zero(max_force);
        }
        let mut vector = planar(self.sum / self.weight * self.peak);
        let mut magnitude = vector.length();
        if magnitude > max_force {
            vector = if magnitude > 0.0 {
                vector * (max_force / magnitude)
            } else {
                Vec3::ZERO
            };
            magnitude = max_force;
        }
        SeparationForce {
            vector,
            magnitude,
            max_force,
        }
    }
}

/// Overlap tier: at least `multiplier` times the smooth tier's peak,
/// growing with penetration depth.
fn overlap_force(strength: f32, multiplier: f32, penetration: f32, min_distance: f32) -> f32 {
    strength * multiplier * (1.0 + penetration / min_distance)
}

/// Push direction for two agents at the same point. The lower index goes one
/// way, the higher the opposite way, so the pair separates symmetrically.
pub fn coincident_direction(index: usize, other: usize) -> Vec3 {
    let (lo, hi) = if index <= other {
        (index, other)
    } else {
        (other, index)
    };
    let seed = (lo as u64).wrapping_mul(0x9E37_79B9) ^ hi as u64;
    let yaw = ((seed % 360) as f32).to_radians();
    let dir = direction_from_yaw(yaw);
    if index <= other {
        dir
    } else {
        -dir
    }
}

/// Separation for the agent at `index` of `snapshot`.
pub fn compute(
    index: usize,
    position: Vec3,
    profile: &AvoidanceProfile,
    snapshot: &SpatialSnapshot,
    config: &SteeringConfig,
) -> SeparationForce {
    let strength = profile.avoidance_strength;
    let max_force = config.max_force(strength);
    let detection_sq = profile.detection_radius * profile.detection_radius;
    let mut acc = Accumulator::default();

    // --- Peers ---
    for (other, other_pos, other_radius) in snapshot.iter() {
        if other == index {
            continue;
        }
        let delta = planar(position - other_pos);
        let dist_sq = delta.length_squared();
        if dist_sq > detection_sq {
            continue;
        }

        let min_dist = profile.entity_radius + other_radius;
        if dist_sq < EPSILON {
            let force = overlap_force(strength, config.peer_overlap_multiplier, min_dist, min_dist);
            acc.add(coincident_direction(index, other), force);
            continue;
        }

        let dist = dist_sq.sqrt();
        let direction = delta / dist;
        if dist < min_dist {
            let force = overlap_force(
                strength,
                config.peer_overlap_multiplier,
                min_dist - dist,
                min_dist,
            );
            acc.add(direction, force);
        } else {
            acc.add(direction, strength * (1.0 - dist / profile.detection_radius));
        }
    }

    // --- Player ---
    if let Some(target) = snapshot.target() {
        let delta = planar(position - target);
        let dist_sq = delta.length_squared();
        let min_dist = profile.entity_radius + config.target_radius;
        let range = profile.player_separation_radius.max(min_dist);

        if dist_sq <= range * range {
            let overlap_scale = config.peer_overlap_multiplier * config.target_priority;
            if dist_sq < EPSILON {
                let force = overlap_force(strength, overlap_scale, min_dist, min_dist);
                acc.add(coincident_direction(index, usize::MAX), force);
            } else {
                let dist = dist_sq.sqrt();
                let direction = delta / dist;
                if dist < min_dist {
                    let force = overlap_force(strength, overlap_scale, min_dist - dist, min_dist);
                    acc.add(direction, force);
                } else if profile.player_separation_radius > 0.0 {
                    let proximity = 1.0 - dist / profile.player_separation_radius;
                    acc.add(direction, strength * config.target_priority * proximity);
                }
            }
        }
    }

    acc.finish(max_force)
}
