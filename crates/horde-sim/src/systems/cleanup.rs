//! Cleanup system: removes agents whose health ran out.

use hecs::{Entity, World};

use horde_core::components::{Enemy, Health};
use horde_core::events::SwarmEvent;

/// Despawn dead agents and report each one.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SwarmEvent>) {
    despawn_buffer.clear();

    for (entity, (_enemy, health)) in world.query_mut::<(&Enemy, &Health)>() {
        if health.0 <= 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            events.push(SwarmEvent::AgentDied {
                agent_id: entity.to_bits().get(),
            });
        }
    }
}
