//! Host commands sent to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, before any
//! system runs.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::AgentBlueprint;
use crate::config::SteeringConfig;

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Target ---
    /// Create the player at a position (replaces an existing one).
    SpawnPlayer { position: Vec3 },
    /// Move the player; ignored when no player exists.
    MovePlayer { position: Vec3 },
    /// Remove the player. Avoidance passes are skipped until one returns.
    RemovePlayer,

    // --- Agents ---
    /// Spawn one agent at a position.
    SpawnAgent {
        position: Vec3,
        #[serde(default)]
        blueprint: AgentBlueprint,
    },
    /// Spawn `count` agents evenly spaced on a ring around the player
    /// (or the origin when there is none).
    SpawnRing {
        count: usize,
        radius: f32,
        #[serde(default)]
        blueprint: AgentBlueprint,
    },
    /// Subtract hit points from an agent.
    DamageAgent { agent_id: u64, amount: i32 },

    // --- Tuning ---
    /// Replace the global steering constants.
    SetSteeringConfig { config: SteeringConfig },

    // --- Simulation control ---
    Pause,
    Resume,
}
