//! Wire protocol between participants and the authoritative server.
//!
//! Messages are JSON text frames over a bidirectional channel. Transport
//! framing and connection bootstrap are outside this crate.

use serde::{Deserialize, Serialize};

use crate::components::ControlIntent;
use crate::enums::FireSide;
use crate::events::GameEvent;
use crate::state::{PickupView, ProjectileView, WorldSnapshot};
use crate::types::{PickupId, Position, ShipId};

/// Participant → server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    /// Enter the arena under a display name. The server replies with
    /// `Welcome` plus a full snapshot, and notifies everyone else.
    Join { name: String },
    /// Replace the ship's control signal (server-integrated movement).
    Controls { intent: ControlIntent },
    /// Self-reported kinematics. Accepted at most ~20 Hz per participant;
    /// excess updates are dropped, not queued (latest-wins).
    Move {
        position: Position,
        heading: f64,
        speed: f64,
    },
    /// Fire request; the server stamps owner id and timestamp.
    Fire { side: FireSide },
    /// Self-reported damage to the sender's own ship.
    DamageReport { amount: i32 },
    /// Claim a pickup (first-claim-wins).
    Collect { pickup_id: PickupId },
}

/// Server → participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    /// Identity assignment, sent once after a successful join.
    Welcome { ship_id: ShipId },
    /// Periodic full snapshot (~10 Hz).
    Snapshot(WorldSnapshot),
    /// Periodic projectile list while any projectile is live, plus one
    /// trailing empty list.
    ProjectileList(Vec<ProjectileView>),
    /// Remaining pickups, sent on change.
    PickupList(Vec<PickupView>),
    /// Discrete event, broadcast immediately and at-least-once.
    Event(GameEvent),
}
