//! Client-side mirror of the authoritative world.
//!
//! Holds the last authoritative snapshot and folds discrete events into
//! it. Authoritative snapshots always win on conflict; every event is a
//! no-op to re-apply, so an event racing a periodic snapshot for the same
//! change cannot corrupt the mirror.

use crate::events::GameEvent;
use crate::protocol::ServerMessage;
use crate::state::WorldSnapshot;
use crate::types::ShipId;

/// Replicated world state as seen by one participant.
#[derive(Debug, Clone, Default)]
pub struct WorldReplica {
    /// Our own ship id, once the server has assigned one.
    pub ship_id: Option<ShipId>,
    /// Last authoritative state, patched by discrete events in between
    /// periodic snapshots.
    pub world: WorldSnapshot,
}

impl WorldReplica {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one server message.
    pub fn apply(&mut self, message: &ServerMessage) {
        match message {
            ServerMessage::Welcome { ship_id } => {
                self.ship_id = Some(*ship_id);
            }
            ServerMessage::Snapshot(snapshot) => {
                // Authoritative wins wholesale; events were already
                // delivered discretely, so drop the embedded copies.
                self.world = snapshot.clone();
                self.world.events.clear();
            }
            ServerMessage::ProjectileList(projectiles) => {
                self.world.projectiles = projectiles.clone();
            }
            ServerMessage::PickupList(pickups) => {
                self.world.pickups = pickups.clone();
            }
            ServerMessage::Event(event) => self.apply_event(event),
        }
    }

    fn apply_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ShipJoined { ship } => {
                match self.world.ships.iter_mut().find(|s| s.id == ship.id) {
                    Some(existing) => *existing = ship.clone(),
                    None => self.world.ships.push(ship.clone()),
                }
            }
            GameEvent::ShipLeft { id } => {
                self.world.ships.retain(|s| s.id != *id);
            }
            GameEvent::ShipDestroyed { id, .. } => {
                if let Some(ship) = self.ship_mut(*id) {
                    ship.destroyed = true;
                    ship.health.current = 0;
                }
            }
            GameEvent::HealthChanged { id, health } => {
                if let Some(ship) = self.ship_mut(*id) {
                    ship.health = *health;
                }
            }
            GameEvent::BountyAwarded { id, balance, .. } => {
                if let Some(ship) = self.ship_mut(*id) {
                    ship.coins = *balance;
                }
            }
            GameEvent::PickupCollected { id, by, balance } => {
                self.world.pickups.retain(|p| p.id != *id);
                if let Some(ship) = self.ship_mut(*by) {
                    ship.coins = *balance;
                }
            }
            // Transient visual; nothing to fold into the mirror.
            GameEvent::Splash { .. } => {}
        }
    }

    fn ship_mut(&mut self, id: ShipId) -> Option<&mut crate::state::ShipView> {
        self.world.ships.iter_mut().find(|s| s.id == id)
    }
}
