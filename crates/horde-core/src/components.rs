//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and in the steering crate, not components.
//! Validation for the configurable ones lives in [`crate::config`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::SteeringMode;

/// Marks an entity as a steerable enemy agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks the single pursued target (the player).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// World placement. Only X/Z are steered; Y is carried through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Unit facing direction on the X/Z plane.
    pub forward: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
        }
    }
}

/// Movement speed in units per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveSpeed(pub f32);

/// Per-agent avoidance tuning, set at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvoidanceProfile {
    /// Distance within which other agents influence separation.
    pub detection_radius: f32,
    /// Multiplier on repulsion magnitude.
    pub avoidance_strength: f32,
    /// Radius of the orbit kept around the player.
    pub desired_distance_from_player: f32,
    /// Radius inside which player repulsion wins over orbit seeking.
    pub player_separation_radius: f32,
    /// Physical collision radius.
    pub entity_radius: f32,
}

impl Default for AvoidanceProfile {
    fn default() -> Self {
        Self {
            detection_radius: DEFAULT_DETECTION_RADIUS,
            avoidance_strength: DEFAULT_AVOIDANCE_STRENGTH,
            desired_distance_from_player: DEFAULT_DESIRED_DISTANCE,
            player_separation_radius: DEFAULT_PLAYER_SEPARATION_RADIUS,
            entity_radius: DEFAULT_ENTITY_RADIUS,
        }
    }
}

/// Result of the last steering pass for this agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SteeringStatus {
    pub mode: SteeringMode,
    /// Whether the path probe found the heading obstructed.
    pub blocked: bool,
}

/// Hit points. The agent is torn down once this reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health(pub i32);

/// Seconds until the next attack is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    pub remaining_secs: f32,
}

/// Attack reach and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackProfile {
    pub range: f32,
    pub cooldown_secs: f32,
}

impl Default for AttackProfile {
    fn default() -> Self {
        Self {
            range: DEFAULT_ATTACK_RANGE,
            cooldown_secs: DEFAULT_ATTACK_COOLDOWN_SECS,
        }
    }
}

/// Everything needed to spawn one agent, minus its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentBlueprint {
    pub profile: AvoidanceProfile,
    pub move_speed: f32,
    pub health: i32,
    pub attack: AttackProfile,
}

impl Default for AgentBlueprint {
    fn default() -> Self {
        Self {
            profile: AvoidanceProfile::default(),
            move_speed: DEFAULT_MOVE_SPEED,
            health: DEFAULT_AGENT_HEALTH,
            attack: AttackProfile::default(),
        }
    }
}
