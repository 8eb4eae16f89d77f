//! Snapshot system: queries the ECS world and builds a complete SwarmSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use horde_core::components::{Enemy, Health, SteeringStatus, Transform};
use horde_core::enums::SimPhase;
use horde_core::events::SwarmEvent;
use horde_core::state::{AgentView, StepSummary, SwarmSnapshot};
use horde_core::types::{look_rotation, yaw_of, SimTime};

use crate::world_setup::find_player;

/// Build a complete SwarmSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SimPhase,
    step: StepSummary,
    events: Vec<SwarmEvent>,
) -> SwarmSnapshot {
    SwarmSnapshot {
        time: *time,
        phase,
        player: find_player(world),
        agents: build_agents(world),
        step,
        events,
    }
}

/// Build AgentView list, sorted by id for stable output.
fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&Enemy, &Transform, &SteeringStatus, &Health)>()
        .iter()
        .map(|(entity, (_, transform, status, health))| AgentView {
            agent_id: entity.to_bits().get(),
            position: transform.position,
            forward: transform.forward,
            yaw: yaw_of(transform.forward),
            rotation: look_rotation(transform.forward),
            mode: status.mode,
            blocked: status.blocked,
            health: health.0,
        })
        .collect();

    agents.sort_by_key(|a| a.agent_id);
    agents
}
