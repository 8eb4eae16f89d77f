//! Attack intent: agents holding their orbit fire when their cooldown allows
//! and the player is within reach.
//!
//! Only the intent is produced here. The host turns `AttackIssued` events
//! into projectiles or hitboxes.

use glam::Vec3;
use hecs::World;

use horde_core::components::{AttackProfile, Cooldown, Enemy, SteeringStatus, Transform};
use horde_core::constants::MELEE_RANGE_THRESHOLD;
use horde_core::enums::{AttackKind, SteeringMode};
use horde_core::events::SwarmEvent;
use horde_core::types::planar;

/// Attack kind for a given reach.
pub fn attack_kind(range: f32) -> AttackKind {
    if range > MELEE_RANGE_THRESHOLD {
        AttackKind::Ranged
    } else {
        AttackKind::Melee
    }
}

pub fn run(world: &mut World, target: Option<Vec3>, events: &mut Vec<SwarmEvent>) {
    let Some(target) = target else {
        return;
    };

    for (entity, (_enemy, transform, status, attack, cooldown)) in world.query_mut::<(
        &Enemy,
        &Transform,
        &SteeringStatus,
        &AttackProfile,
        &mut Cooldown,
    )>() {
        if status.mode != SteeringMode::Holding || cooldown.remaining_secs > 0.0 {
            continue;
        }
        if planar(transform.position - target).length() > attack.range {
            continue;
        }
        cooldown.remaining_secs = attack.cooldown_secs;
        events.push(SwarmEvent::AttackIssued {
            agent_id: entity.to_bits().get(),
            kind: attack_kind(attack.range),
        });
    }
}
