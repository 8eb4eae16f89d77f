//! Avoidance system: gathers agents into plain data, runs one steering pass,
//! writes the results back.
//!
//! Gather and write-back go through buffers owned by the engine to avoid
//! borrow issues with hecs and per-tick allocation.

use hecs::{Entity, World};

use horde_core::components::{AvoidanceProfile, Enemy, MoveSpeed, SteeringStatus, Transform};
use horde_core::enums::SkipReason;
use horde_core::events::SwarmEvent;
use horde_core::state::StepSummary;

use horde_steering::{SteeringAgent, SteeringEngine, StepOutcome};

use crate::world_setup::find_player;

pub fn run(
    world: &mut World,
    engine: &mut SteeringEngine,
    agents: &mut Vec<SteeringAgent>,
    entities: &mut Vec<Entity>,
    dt: f32,
    last_skip: &mut Option<SkipReason>,
    events: &mut Vec<SwarmEvent>,
) -> StepSummary {
    let target = find_player(world);

    agents.clear();
    entities.clear();
    for (entity, (_enemy, transform, profile, speed)) in
        world.query_mut::<(&Enemy, &Transform, &AvoidanceProfile, &MoveSpeed)>()
    {
        entities.push(entity);
        agents.push(SteeringAgent::new(
            transform.position,
            transform.forward,
            *profile,
            speed.0,
        ));
    }

    match engine.step(target, agents, dt) {
        StepOutcome::Skipped(reason) => {
            // Without a player nobody is holding an orbit.
            if reason == SkipReason::NoTarget {
                for (_entity, status) in world.query_mut::<&mut SteeringStatus>() {
                    *status = SteeringStatus::default();
                }
            }
            // Reported once per run of skipped ticks.
            if *last_skip != Some(reason) {
                events.push(SwarmEvent::AvoidanceSkipped { reason });
                *last_skip = Some(reason);
            }
            StepSummary::default()
        }
        StepOutcome::Stepped(summary) => {
            *last_skip = None;
            for (entity, agent) in entities.iter().zip(agents.iter()) {
                if let Ok((transform, status)) =
                    world.query_one_mut::<(&mut Transform, &mut SteeringStatus)>(*entity)
                {
                    transform.position = agent.position;
                    transform.forward = agent.forward;
                    status.mode = agent.mode;
                    status.blocked = agent.blocked;
                }
            }
            summary
        }
    }
}
