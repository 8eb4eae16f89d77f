//! Steering tuning and validation.
//!
//! `SteeringConfig` holds the global constants shared by every agent.
//! Per-agent values live in [`AvoidanceProfile`]. Both load from JSON with
//! missing fields falling back to the defaults in [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::components::{AgentBlueprint, AttackProfile, AvoidanceProfile};
use crate::constants::*;
use crate::enums::OrbitHandedness;
use crate::error::{
    require_non_negative, require_positive, require_unit, ConfigError,
};

/// Global steering constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Headings sampled around a blocked agent.
    pub sector_count: usize,
    /// Maximum turn rate (rad/s).
    pub turn_rate: f32,
    /// Half-width of the hold band around the desired distance.
    pub radius_tolerance: f32,
    /// Forward distance checked for obstructions.
    pub lookahead_distance: f32,
    /// Lateral offset below which a neighbor ahead blocks the path, in entity radii.
    pub lateral_threshold_scale: f32,
    /// Cone radius used when scoring sample headings, in entity radii.
    pub probe_cone_scale: f32,
    pub radial_weight: f32,
    pub tangential_weight: f32,
    pub orbit_handedness: OrbitHandedness,
    /// Largest share separation can take of the final heading.
    pub separation_blend: f32,
    /// Overlap force relative to the smooth proximity tier.
    pub peer_overlap_multiplier: f32,
    /// Player contributions relative to peer contributions.
    pub target_priority: f32,
    /// Physical radius of the player.
    pub target_radius: f32,
    /// Separation ceiling per unit of avoidance strength.
    pub max_force_scale: f32,
    /// Fraction of the ceiling that triggers the overlap escape.
    pub emergency_ratio: f32,
    /// Fraction of the ceiling that slows the agent down.
    pub crowded_ratio: f32,
    pub blocked_speed_scale: f32,
    pub crowded_speed_scale: f32,
    pub emergency_speed_multiplier: f32,
    pub hold_speed_scale: f32,
    /// Agent count below which steering stays on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            sector_count: SECTOR_COUNT,
            turn_rate: TURN_RATE,
            radius_tolerance: RADIUS_TOLERANCE,
            lookahead_distance: LOOKAHEAD_DISTANCE,
            lateral_threshold_scale: LATERAL_THRESHOLD_SCALE,
            probe_cone_scale: PROBE_CONE_SCALE,
            radial_weight: RADIAL_WEIGHT,
            tangential_weight: TANGENTIAL_WEIGHT,
            orbit_handedness: OrbitHandedness::default(),
            separation_blend: SEPARATION_BLEND,
            peer_overlap_multiplier: PEER_OVERLAP_MULTIPLIER,
            target_priority: TARGET_PRIORITY,
            target_radius: TARGET_RADIUS,
            max_force_scale: MAX_FORCE_SCALE,
            emergency_ratio: EMERGENCY_RATIO,
            crowded_ratio: CROWDED_RATIO,
            blocked_speed_scale: BLOCKED_SPEED_SCALE,
            crowded_speed_scale: CROWDED_SPEED_SCALE,
            emergency_speed_multiplier: EMERGENCY_SPEED_MULTIPLIER,
            hold_speed_scale: HOLD_SPEED_SCALE,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl SteeringConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SteeringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field for a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sector_count < MIN_SECTOR_COUNT {
            return Err(ConfigError::TooFewSectors {
                count: self.sector_count,
                min: MIN_SECTOR_COUNT,
            });
        }
        require_positive("turn_rate", self.turn_rate)?;
        require_non_negative("radius_tolerance", self.radius_tolerance)?;
        require_positive("lookahead_distance", self.lookahead_distance)?;
        require_positive("lateral_threshold_scale", self.lateral_threshold_scale)?;
        require_positive("probe_cone_scale", self.probe_cone_scale)?;
        require_non_negative("radial_weight", self.radial_weight)?;
        require_non_negative("tangential_weight", self.tangential_weight)?;
        if self.radial_weight + self.tangential_weight <= 0.0 {
            return Err(ConfigError::ZeroOrbitWeights);
        }
        require_unit("separation_blend", self.separation_blend)?;
        require_positive("peer_overlap_multiplier", self.peer_overlap_multiplier)?;
        require_positive("target_priority", self.target_priority)?;
        require_non_negative("target_radius", self.target_radius)?;
        require_positive("max_force_scale", self.max_force_scale)?;
        require_positive("emergency_ratio", self.emergency_ratio)?;
        require_unit("emergency_ratio", self.emergency_ratio)?;
        require_unit("crowded_ratio", self.crowded_ratio)?;
        require_unit("blocked_speed_scale", self.blocked_speed_scale)?;
        require_unit("crowded_speed_scale", self.crowded_speed_scale)?;
        require_positive("emergency_speed_multiplier", self.emergency_speed_multiplier)?;
        require_non_negative("hold_speed_scale", self.hold_speed_scale)?;
        Ok(())
    }

    /// Separation ceiling for an agent with the given avoidance strength.
    pub fn max_force(&self, avoidance_strength: f32) -> f32 {
        self.max_force_scale * avoidance_strength
    }
}

/// The soft ordering `player_separation_radius <= desired_distance_from_player`
/// does not hold for a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderingViolation {
    pub player_separation_radius: f32,
    pub desired_distance_from_player: f32,
}

impl AvoidanceProfile {
    /// Parse and validate a JSON profile. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let profile: AvoidanceProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reject profiles the steering math cannot handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("detection_radius", self.detection_radius)?;
        require_non_negative("avoidance_strength", self.avoidance_strength)?;
        require_non_negative(
            "desired_distance_from_player",
            self.desired_distance_from_player,
        )?;
        require_non_negative("player_separation_radius", self.player_separation_radius)?;
        require_positive("entity_radius", self.entity_radius)?;
        Ok(())
    }

    /// Report a player separation radius larger than the orbit it protects.
    /// Such profiles still steer; the agent just never settles inside the
    /// repulsion zone.
    pub fn ordering_violation(&self) -> Option<OrderingViolation> {
        (self.player_separation_radius > self.desired_distance_from_player).then_some(
            OrderingViolation {
                player_separation_radius: self.player_separation_radius,
                desired_distance_from_player: self.desired_distance_from_player,
            },
        )
    }
}

impl AttackProfile {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("attack.range", self.range)?;
        require_non_negative("attack.cooldown_secs", self.cooldown_secs)?;
        Ok(())
    }
}

impl AgentBlueprint {
    /// Validate the profile, speed, health and attack settings together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.profile.validate()?;
        require_non_negative("move_speed", self.move_speed)?;
        if self.health <= 0 {
            return Err(ConfigError::NonPositive {
                field: "health",
                value: self.health as f32,
            });
        }
        self.attack.validate()
    }
}
