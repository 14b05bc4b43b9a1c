//! Projectile ballistics: integration, water impact, and max-age purge.

use hecs::{Entity, World};

use broadside_core::components::Projectile;
use broadside_core::constants::{GRAVITY, PROJECTILE_MAX_AGE_SECS};
use broadside_core::events::GameEvent;
use broadside_core::types::Position;

/// Integrate all projectiles and despawn the spent ones.
///
/// A shot crossing the water plane despawns with a splash; the max-age
/// purge despawns anything older than the cap regardless, as a safety net
/// when impact detection missed it.
pub fn run(
    world: &mut World,
    now_secs: f64,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    for (entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &mut Position)>() {
        pos.x += projectile.velocity.x * dt;
        pos.y += projectile.velocity.y * dt;
        pos.z += projectile.velocity.z * dt;
        projectile.velocity.y -= GRAVITY * dt;

        if pos.y <= 0.0 {
            events.push(GameEvent::Splash { position: *pos });
            despawn_buffer.push(entity);
        } else if now_secs - projectile.spawned_secs > PROJECTILE_MAX_AGE_SECS {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
