//! Broadside firing: projectile spawning with aim spread.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use broadside_core::components::Projectile;
use broadside_core::constants::{
    PROJECTILE_LAUNCH_VY, PROJECTILE_SPAWN_HEIGHT, PROJECTILE_SPAWN_OFFSET, PROJECTILE_SPEED,
    PROJECTILE_SPREAD,
};
use broadside_core::enums::{Faction, FireSide};
use broadside_core::types::{Position, ProjectileId, ShipId, Velocity};

/// Spawn one broadside shot from the given battery of a ship.
///
/// The shot leaves perpendicular to the heading with a uniform random
/// spread, offset from the ship center along the shot direction, and an
/// upward launch component that gravity pulls into an arc.
#[allow(clippy::too_many_arguments)]
pub fn spawn_broadside(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: ProjectileId,
    now_secs: f64,
    owner: ShipId,
    faction: Faction,
    ship_position: &Position,
    heading: f64,
    side: FireSide,
) -> hecs::Entity {
    let spread = rng.gen_range(-PROJECTILE_SPREAD..=PROJECTILE_SPREAD);
    let direction = heading + side.offset() + spread;

    let mut velocity = Velocity::from_heading(direction, PROJECTILE_SPEED);
    velocity.y = PROJECTILE_LAUNCH_VY;

    let position = Position::new(
        ship_position.x + direction.sin() * PROJECTILE_SPAWN_OFFSET,
        ship_position.y + PROJECTILE_SPAWN_HEIGHT,
        ship_position.z + direction.cos() * PROJECTILE_SPAWN_OFFSET,
    );

    world.spawn((
        Projectile {
            id,
            owner,
            faction,
            velocity,
            spawned_secs: now_secs,
        },
        position,
    ))
}
