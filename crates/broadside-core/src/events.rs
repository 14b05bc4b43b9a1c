//! Discrete events emitted by the simulation.
//!
//! Events are collected per tick, surfaced in the snapshot, and broadcast
//! immediately by the server (unthrottled, unlike periodic snapshots).
//! Receivers must treat them as at-least-once: a periodic snapshot may
//! race an event for the same change, so every event is idempotent to
//! re-apply.

use serde::{Deserialize, Serialize};

use crate::components::HullHealth;
use crate::state::ShipView;
use crate::types::{PickupId, Position, ShipId};

/// Discrete world events for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A participant joined and a ship was spawned for them.
    ShipJoined { ship: ShipView },
    /// A ship was removed from the snapshot (leave, disconnect, or
    /// post-destruction cleanup).
    ShipLeft { id: ShipId },
    /// A hull reached zero health. `explosion` is the spawn position for
    /// the visual effect downstream.
    ShipDestroyed { id: ShipId, explosion: Position },
    /// A hull's health changed (damage or regeneration).
    HealthChanged { id: ShipId, health: HullHealth },
    /// A kill bounty was credited to the shooter.
    BountyAwarded {
        id: ShipId,
        amount: i64,
        balance: i64,
    },
    /// A pickup was consumed; `balance` is the claimant's new total.
    PickupCollected {
        id: PickupId,
        by: ShipId,
        balance: i64,
    },
    /// A projectile crossed the water plane (transient splash effect).
    Splash { position: Position },
}
