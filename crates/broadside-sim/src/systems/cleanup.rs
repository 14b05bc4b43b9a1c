//! Cleanup system: removes destroyed hulls from the world.
//!
//! Participant hulls are removed the tick they are destroyed; AI hulls
//! linger inert for a short window first so the explosion effect has a
//! position to play at, then despawn.

use hecs::{Entity, World};

use broadside_core::components::Destroyed;
use broadside_core::constants::DESTROYED_LINGER_SECS;
use broadside_core::enums::Faction;
use broadside_core::events::GameEvent;
use broadside_core::types::ShipId;

/// Despawn destroyed hulls whose removal time has come.
pub fn run(
    world: &mut World,
    now_secs: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    for (entity, (id, faction, destroyed)) in
        world.query_mut::<(&ShipId, &Faction, &Destroyed)>()
    {
        let expired = match faction {
            Faction::Ai => now_secs - destroyed.at_secs >= DESTROYED_LINGER_SECS,
            _ => true,
        };
        if expired {
            despawn_buffer.push(entity);
            events.push(GameEvent::ShipLeft { id: *id });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
