//! Projectile/ship collision resolution and damage.
//!
//! Both sides of a potential hit are collected into buffers first and
//! sorted by stable id, so resolution order never depends on ECS
//! iteration order. Each projectile hits at most one ship: with several
//! hulls overlapping the impact point, the lowest ship id wins.

use hecs::{Entity, World};

use broadside_core::components::{CoinPurse, Destroyed, HullHealth, Projectile};
use broadside_core::constants::{
    HITBOX_SHRINK, HIT_DAMAGE, HIT_RADIUS, KILL_BOUNTY, PROJECTILE_RADIUS, SAFE_ZONES,
    SHIP_HALF_EXTENTS,
};
use broadside_core::enums::Faction;
use broadside_core::events::GameEvent;
use broadside_core::types::{in_any_zone, Position, ProjectileId, ShipId};

struct ShotRef {
    entity: Entity,
    id: ProjectileId,
    owner: ShipId,
    faction: Faction,
    position: Position,
}

struct HullRef {
    entity: Entity,
    id: ShipId,
    faction: Faction,
    position: Position,
    in_safe_zone: bool,
}

/// Resolve projectile hits for this tick.
pub fn run(world: &mut World, now_secs: f64, events: &mut Vec<GameEvent>) {
    let mut shots: Vec<ShotRef> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (projectile, pos))| ShotRef {
            entity,
            id: projectile.id,
            owner: projectile.owner,
            faction: projectile.faction,
            position: *pos,
        })
        .collect();
    shots.sort_by_key(|s| s.id);

    let mut hulls: Vec<HullRef> = world
        .query::<(&ShipId, &Faction, &Position, Option<&Destroyed>)>()
        .iter()
        .filter(|(_, (_, _, _, destroyed))| destroyed.is_none())
        .map(|(entity, (id, faction, pos, _))| HullRef {
            entity,
            id: *id,
            faction: *faction,
            position: *pos,
            in_safe_zone: in_any_zone(&SAFE_ZONES, pos),
        })
        .collect();
    hulls.sort_by_key(|h| h.id);

    for shot in &shots {
        let hit = hulls.iter().find(|hull| {
            hull.id != shot.owner
                && hull.faction != shot.faction
                && !hull.in_safe_zone
                && intersects(&shot.position, &hull.position)
        });
        let Some(hull) = hit else {
            continue;
        };

        let _ = world.despawn(shot.entity);
        apply_hit(world, now_secs, shot.owner, hull.entity, hull.id, events);
    }
}

/// Coarse shrunk-box test plus a tight proximity check on the hull
/// center, so grazing corner contacts do not register.
fn intersects(shot: &Position, hull: &Position) -> bool {
    let (hx, hy, hz) = SHIP_HALF_EXTENTS;
    // Shrunk box, expanded back out by the projectile's own radius.
    let reach = PROJECTILE_RADIUS - HITBOX_SHRINK;
    let in_box = (shot.x - hull.x).abs() <= hx + reach
        && (shot.y - hull.y).abs() <= hy + reach
        && (shot.z - hull.z).abs() <= hz + reach;
    in_box && shot.distance_to(hull) <= HIT_RADIUS
}

/// Apply damage from a confirmed hit, handling destruction and bounty.
fn apply_hit(
    world: &mut World,
    now_secs: f64,
    shooter: ShipId,
    victim: Entity,
    victim_id: ShipId,
    events: &mut Vec<GameEvent>,
) {
    let (health, faction, position) = {
        let Ok(mut hull) = world.get::<&mut HullHealth>(victim) else {
            return;
        };
        hull.apply_damage(HIT_DAMAGE);
        let health = *hull;
        drop(hull);

        let faction = world.get::<&Faction>(victim).map(|f| *f).unwrap_or_default();
        let position = world
            .get::<&Position>(victim)
            .map(|p| *p)
            .unwrap_or_default();
        (health, faction, position)
    };

    if health.current > 0 {
        events.push(GameEvent::HealthChanged {
            id: victim_id,
            health,
        });
        return;
    }

    let _ = world.insert_one(victim, Destroyed { at_secs: now_secs });
    // Lifted above the deck for the effect downstream.
    let explosion = Position::new(position.x, position.y + 2.0, position.z);
    events.push(GameEvent::ShipDestroyed {
        id: victim_id,
        explosion,
    });

    if faction == Faction::Ai {
        award_bounty(world, shooter, events);
    }
}

/// Credit the kill bounty to the shooter, if their ship still exists.
fn award_bounty(world: &mut World, shooter: ShipId, events: &mut Vec<GameEvent>) {
    let mut awarded = None;
    for (_entity, (id, purse)) in world.query_mut::<(&ShipId, &mut CoinPurse)>() {
        if *id == shooter {
            purse.0 += KILL_BOUNTY;
            awarded = Some(purse.0);
            break;
        }
    }
    if let Some(balance) = awarded {
        events.push(GameEvent::BountyAwarded {
            id: shooter,
            amount: KILL_BOUNTY,
            balance,
        });
    }
}
