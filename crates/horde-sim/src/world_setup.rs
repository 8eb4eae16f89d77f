//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player and enemy agents with their component bundles.

use std::f32::consts::TAU;

use glam::Vec3;
use hecs::{Entity, World};
use log::{debug, warn};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use horde_core::components::*;
use horde_core::constants::{MAX_RING_SPAWN, RING_SPAWN_JITTER};
use horde_core::error::{require_finite_position, ConfigError};
use horde_core::types::{planar, safe_normalize};

/// Spawn the player at `position`, replacing any existing player.
pub fn spawn_player(world: &mut World, position: Vec3) -> Result<Entity, ConfigError> {
    require_finite_position("player position", position)?;
    remove_player(world);
    Ok(world.spawn((
        Player,
        Transform {
            position,
            ..Default::default()
        },
    )))
}

/// Move the existing player. Returns whether there was one to move.
pub fn move_player(world: &mut World, position: Vec3) -> Result<bool, ConfigError> {
    require_finite_position("player position", position)?;
    let mut moved = false;
    for (_entity, (_player, transform)) in world.query_mut::<(&Player, &mut Transform)>() {
        transform.position = position;
        moved = true;
    }
    Ok(moved)
}

/// Despawn every player entity.
pub fn remove_player(world: &mut World) {
    let players: Vec<Entity> = world
        .query_mut::<&Player>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in players {
        let _ = world.despawn(entity);
    }
}

/// Current player position, if there is a player.
pub fn find_player(world: &World) -> Option<Vec3> {
    world
        .query::<(&Player, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| transform.position)
}

/// Spawn one enemy agent. It faces `target` when given.
pub fn spawn_agent(
    world: &mut World,
    position: Vec3,
    blueprint: &AgentBlueprint,
    target: Option<Vec3>,
) -> Result<Entity, ConfigError> {
    require_finite_position("agent position", position)?;
    blueprint.validate()?;
    if let Some(violation) = blueprint.profile.ordering_violation() {
        warn!(
            "agent profile keeps player separation {} beyond its orbit {}",
            violation.player_separation_radius, violation.desired_distance_from_player
        );
    }

    let forward = target
        .map(|t| safe_normalize(planar(t - position), Vec3::Z))
        .unwrap_or(Vec3::Z);

    Ok(world.spawn((
        Enemy,
        Transform { position, forward },
        blueprint.profile,
        MoveSpeed(blueprint.move_speed),
        SteeringStatus::default(),
        Health(blueprint.health),
        Cooldown::default(),
        blueprint.attack,
    )))
}

/// Spawn `count` agents evenly around `center` at roughly `radius`.
/// Angle and radius are jittered from `rng`, so placement depends on the seed.
pub fn spawn_ring(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: Vec3,
    count: usize,
    radius: f32,
    blueprint: &AgentBlueprint,
    target: Option<Vec3>,
) -> Result<Vec<Entity>, ConfigError> {
    require_finite_position("ring center", center)?;
    blueprint.validate()?;
    if count > MAX_RING_SPAWN {
        return Err(ConfigError::TooMany {
            field: "ring spawn count",
            count,
            max: MAX_RING_SPAWN,
        });
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(ConfigError::Negative {
            field: "ring radius",
            value: radius,
        });
    }

    let step = TAU / count.max(1) as f32;
    let mut spawned = Vec::with_capacity(count);
    for i in 0..count {
        let angle = step * i as f32 + step * rng.gen_range(-RING_SPAWN_JITTER..=RING_SPAWN_JITTER);
        let r = radius * (1.0 + rng.gen_range(-RING_SPAWN_JITTER..=RING_SPAWN_JITTER));
        let position = center + Vec3::new(angle.sin() * r, 0.0, angle.cos() * r);
        spawned.push(spawn_agent(world, position, blueprint, target)?);
    }
    debug!("spawned ring of {count} agents at radius {radius}");
    Ok(spawned)
}
