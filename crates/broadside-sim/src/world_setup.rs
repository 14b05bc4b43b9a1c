//! Entity spawn factories for setting up the arena world.
//!
//! Creates the AI fleet, the coin field, and participant ships with
//! appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use broadside_core::components::*;
use broadside_core::constants::*;
use broadside_core::enums::Faction;
use broadside_core::types::{PickupId, Position, ShipId};

/// Reserved id range for the AI fleet. Participant ids are allocated by
/// the server from a much larger namespace and never collide.
const AI_BASE_ID: u64 = 1;

/// Set up the initial arena: the AI fleet plus the scattered coin field.
pub fn setup_arena(world: &mut World, rng: &mut ChaCha8Rng) {
    spawn_ai_fleet(world);
    spawn_coin_field(world, rng);
}

/// Spawn the five AI ships at their fixed start slots, facing the origin.
pub fn spawn_ai_fleet(world: &mut World) {
    for (i, (x, z, heading)) in AI_START_SLOTS.iter().enumerate() {
        world.spawn((
            ShipId(AI_BASE_ID + i as u64),
            DisplayName(format!("Raider {}", i + 1)),
            Faction::Ai,
            Position::new(*x, 0.0, *z),
            ShipKinematics {
                heading: *heading,
                speed: 0.0,
            },
            HullHealth::default(),
            CoinPurse(0),
            RegenClock::default(),
            AiController::new(),
        ));
    }
}

/// Scatter the coin field uniformly over the spawn area.
pub fn spawn_coin_field(world: &mut World, rng: &mut ChaCha8Rng) {
    for i in 0..COIN_COUNT {
        let x = rng.gen_range(-COIN_FIELD_HALF_EXTENT..COIN_FIELD_HALF_EXTENT);
        let z = rng.gen_range(-COIN_FIELD_HALF_EXTENT..COIN_FIELD_HALF_EXTENT);
        world.spawn((Pickup { id: PickupId(i) }, Position::new(x, 0.0, z)));
    }
}

/// Spawn a ship for a joining participant at a random open-water start.
pub fn spawn_participant_ship(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: ShipId,
    name: String,
) -> hecs::Entity {
    let x = rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT);
    let z = rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT);

    world.spawn((
        id,
        DisplayName(name),
        Faction::RemotePlayer,
        Position::new(x, 0.0, z),
        ShipKinematics::default(),
        HullHealth::default(),
        CoinPurse(STARTING_COINS),
        RegenClock::default(),
        ControlIntent::default(),
    ))
}
