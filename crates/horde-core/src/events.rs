//! Events emitted by the simulation for the host.

use serde::{Deserialize, Serialize};

use crate::enums::{AttackKind, SkipReason};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SwarmEvent {
    /// An agent holding its orbit attacked; the host spawns the projectile or hitbox.
    AttackIssued { agent_id: u64, kind: AttackKind },
    /// An agent's health reached zero and it was removed.
    AgentDied { agent_id: u64 },
    /// The avoidance pass did not run this tick.
    AvoidanceSkipped { reason: SkipReason },
}
