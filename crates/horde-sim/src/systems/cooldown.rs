//! Attack cooldown countdown.

use hecs::World;

use horde_core::components::Cooldown;

/// Count every cooldown down by `dt`, stopping at zero.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, cooldown) in world.query_mut::<&mut Cooldown>() {
        cooldown.remaining_secs = (cooldown.remaining_secs - dt).max(0.0);
    }
}
