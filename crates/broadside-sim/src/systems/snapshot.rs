//! Snapshot system: queries the ECS world and builds a complete
//! `WorldSnapshot`.
//!
//! This system is read-only and runs after every mutating system, so a
//! snapshot is always self-consistent. Output lists are sorted by stable
//! id; the same world always serializes to the same bytes.

use hecs::World;

use broadside_core::components::*;
use broadside_core::constants::SAFE_ZONES;
use broadside_core::enums::Faction;
use broadside_core::events::GameEvent;
use broadside_core::state::{PickupView, ProjectileView, ShipView, WorldSnapshot};
use broadside_core::types::{in_any_zone, Position, ShipId, SimTime};

/// Build a complete snapshot of the current world state.
pub fn build_snapshot(world: &World, time: &SimTime, events: Vec<GameEvent>) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        ships: build_ships(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        events,
    }
}

/// Build the view for a single ship entity, if it is one.
pub fn ship_view(world: &World, entity: hecs::Entity) -> Option<ShipView> {
    let mut query = world
        .query_one::<(
            &ShipId,
            &DisplayName,
            &Faction,
            &Position,
            &ShipKinematics,
            &HullHealth,
            &CoinPurse,
            Option<&Destroyed>,
        )>(entity)
        .ok()?;
    query.get().map(view_from_parts)
}

type ShipParts<'a> = (
    &'a ShipId,
    &'a DisplayName,
    &'a Faction,
    &'a Position,
    &'a ShipKinematics,
    &'a HullHealth,
    &'a CoinPurse,
    Option<&'a Destroyed>,
);

fn view_from_parts(
    (id, name, faction, pos, kin, health, purse, destroyed): ShipParts<'_>,
) -> ShipView {
    ShipView {
        id: *id,
        name: name.0.clone(),
        faction: *faction,
        position: *pos,
        heading: kin.heading,
        speed: kin.speed,
        health: *health,
        coins: purse.0,
        destroyed: destroyed.is_some(),
        in_safe_zone: in_any_zone(&SAFE_ZONES, pos),
    }
}

fn build_ships(world: &World) -> Vec<ShipView> {
    let mut ships: Vec<ShipView> = world
        .query::<ShipParts<'_>>()
        .iter()
        .map(|(_, parts)| view_from_parts(parts))
        .collect();
    ships.sort_by_key(|s| s.id);
    ships
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            id: projectile.id,
            position: *pos,
            velocity: projectile.velocity,
            owner: projectile.owner,
            faction: projectile.faction,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut pickups: Vec<PickupView> = world
        .query::<(&Pickup, &Position)>()
        .iter()
        .map(|(_, (pickup, pos))| PickupView {
            id: pickup.id,
            position: *pos,
        })
        .collect();
    pickups.sort_by_key(|p| p.id);
    pickups
}
