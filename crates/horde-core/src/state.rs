//! Swarm state snapshot, produced after each tick.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{SimPhase, SteeringMode};
use crate::events::SwarmEvent;
use crate::types::SimTime;

/// Complete swarm state handed to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwarmSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    /// Player position, if a player exists.
    pub player: Option<Vec3>,
    /// Agents ordered by id.
    pub agents: Vec<AgentView>,
    pub step: StepSummary,
    pub events: Vec<SwarmEvent>,
}

/// One agent as the host sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub agent_id: u64,
    pub position: Vec3,
    pub forward: Vec3,
    /// Yaw in radians, measured from +Z toward +X.
    pub yaw: f32,
    /// Orientation facing `forward` with +Y up, ready for a renderer.
    pub rotation: Quat,
    pub mode: SteeringMode,
    pub blocked: bool,
    pub health: i32,
}

/// Counts from the last avoidance pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    pub agents: u32,
    pub holding: u32,
    pub approaching: u32,
    pub retreating: u32,
    pub emergency: u32,
    pub blocked: u32,
}
