//! World snapshot: the complete authoritative state at one instant.
//!
//! The snapshot is the unit of synchronization. It is built read-only
//! after all systems have run, so it is always self-consistent: no entity
//! is ever captured half-updated.

use serde::{Deserialize, Serialize};

use crate::components::HullHealth;
use crate::enums::Faction;
use crate::events::GameEvent;
use crate::types::{PickupId, Position, ProjectileId, ShipId, SimTime, Velocity};

/// Complete authoritative state: all ships, live projectiles, and
/// remaining pickups, plus the discrete events of the tick that produced
/// it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub ships: Vec<ShipView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub events: Vec<GameEvent>,
}

impl WorldSnapshot {
    pub fn ship(&self, id: ShipId) -> Option<&ShipView> {
        self.ships.iter().find(|s| s.id == id)
    }
}

/// One ship as seen by every participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub id: ShipId,
    pub name: String,
    pub faction: Faction,
    pub position: Position,
    pub heading: f64,
    pub speed: f64,
    pub health: HullHealth,
    pub coins: i64,
    /// Terminal; a destroyed hull is inert until removed.
    pub destroyed: bool,
    /// Derived containment flag (inclusive boundary).
    pub in_safe_zone: bool,
}

/// One live projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Position,
    pub velocity: Velocity,
    pub owner: ShipId,
    pub faction: Faction,
}

/// One remaining pickup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub id: PickupId,
    pub position: Position,
}
