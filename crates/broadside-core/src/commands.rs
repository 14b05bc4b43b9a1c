//! Commands applied to the authoritative world at tick boundaries.
//!
//! Commands arrive from connection tasks (or a local frontend) and are
//! queued; the engine drains the queue at the start of each tick so no
//! two inputs interleave a partial update to the same entity.

use serde::{Deserialize, Serialize};

use crate::components::ControlIntent;
use crate::enums::FireSide;
use crate::types::{PickupId, Position, ShipId};

/// All inputs the authoritative world accepts.
///
/// Commands referencing a ship or pickup that no longer exists are
/// silently ignored (stale-reference policy).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorldCommand {
    /// Allocate a ship for a new participant. Ignored if the id is taken.
    Join { ship_id: ShipId, name: String },
    /// Remove a participant's ship (disconnect or explicit leave).
    Leave { ship_id: ShipId },
    /// Replace the control signal for a directly controlled ship.
    SetControls {
        ship_id: ShipId,
        intent: ControlIntent,
    },
    /// Self-reported kinematics from a remote participant (latest-wins).
    MoveReport {
        ship_id: ShipId,
        position: Position,
        heading: f64,
        speed: f64,
    },
    /// Fire a broadside from the given side of the ship.
    Fire { ship_id: ShipId, side: FireSide },
    /// Self-reported damage, applied to the reporting participant's own
    /// ship (trusted).
    DamageReport { ship_id: ShipId, amount: i32 },
    /// Claim a pickup. First accepted claim wins; later claims are no-ops.
    Collect {
        ship_id: ShipId,
        pickup_id: PickupId,
    },
}
