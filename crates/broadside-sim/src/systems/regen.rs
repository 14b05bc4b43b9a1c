//! Safe-zone hull regeneration.
//!
//! A hull sitting in a safe zone heals a fraction of its maximum every
//! regeneration interval. The clock is not reset by leaving a zone, so
//! intermittent presence still accrues toward the next heal; only a
//! granted heal restarts the window.

use hecs::World;

use broadside_core::components::{Destroyed, HullHealth, RegenClock};
use broadside_core::constants::{REGEN_FRACTION, REGEN_INTERVAL_SECS, SAFE_ZONES};
use broadside_core::events::GameEvent;
use broadside_core::types::{in_any_zone, Position, ShipId};

/// Run zone regeneration for all live hulls.
pub fn run(world: &mut World, now_secs: f64, events: &mut Vec<GameEvent>) {
    for (_entity, (id, pos, hull, clock, destroyed)) in world.query_mut::<(
        &ShipId,
        &Position,
        &mut HullHealth,
        &mut RegenClock,
        Option<&Destroyed>,
    )>() {
        if destroyed.is_some() {
            continue;
        }
        if !in_any_zone(&SAFE_ZONES, pos) {
            continue;
        }
        if now_secs - clock.last_regen_secs < REGEN_INTERVAL_SECS {
            continue;
        }

        clock.last_regen_secs = now_secs;
        let amount = (hull.max as f64 * REGEN_FRACTION) as i32;
        if hull.heal(amount) > 0 {
            events.push(GameEvent::HealthChanged {
                id: *id,
                health: *hull,
            });
        }
    }
}
