//! The world task: the single owner of the authoritative arena.
//!
//! All session events funnel into this task through one channel; it
//! drains them at tick boundaries, advances the engine with measured Δt,
//! and fans results out on the broadcast channel. Discrete events go out
//! immediately; full snapshots are throttled to their own cadence.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::broadcast;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use broadside_core::commands::WorldCommand;
use broadside_core::events::GameEvent;
use broadside_core::protocol::{ClientMessage, ServerMessage};
use broadside_core::state::WorldSnapshot;
use broadside_core::types::ShipId;
use broadside_sim::{ArenaConfig, ArenaEngine};

use crate::config::{MOVE_REPORT_MIN_INTERVAL, SNAPSHOT_INTERVAL, TICK_INTERVAL};
use crate::state::SessionEvent;

/// Per-ship rate limiter for position reports. Reports arriving inside
/// the minimum interval are dropped rather than queued; the next
/// accepted report carries the latest state anyway.
struct MoveGate {
    min_interval: Duration,
    last_accepted: HashMap<ShipId, Instant>,
}

impl MoveGate {
    fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: HashMap::new(),
        }
    }

    fn accept(&mut self, ship_id: ShipId, now: Instant) -> bool {
        match self.last_accepted.get(&ship_id) {
            Some(last) if now.duration_since(*last) < self.min_interval => false,
            _ => {
                self.last_accepted.insert(ship_id, now);
                true
            }
        }
    }

    fn forget(&mut self, ship_id: ShipId) {
        self.last_accepted.remove(&ship_id);
    }
}

/// Run the authoritative world until the session channel closes.
pub async fn world_task(
    seed: u64,
    mut sessions_rx: mpsc::Receiver<SessionEvent>,
    updates_tx: broadcast::Sender<ServerMessage>,
) {
    let mut engine = ArenaEngine::new(ArenaConfig { seed });
    let mut gate = MoveGate::new(MOVE_REPORT_MIN_INTERVAL);
    let mut pending_joins: Vec<oneshot::Sender<WorldSnapshot>> = Vec::new();

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();
    let mut since_snapshot = Duration::ZERO;
    let mut had_projectiles = false;

    info!(seed, "world task started");

    loop {
        interval.tick().await;

        loop {
            match sessions_rx.try_recv() {
                Ok(event) => handle_session_event(event, &mut engine, &mut gate, &mut pending_joins),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("session channel closed, world task stopping");
                    return;
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick);
        last_tick = now;

        let snapshot = engine.tick(dt.as_secs_f64());

        // Events go out unthrottled, the moment they happen.
        let mut pickups_changed = false;
        for event in &snapshot.events {
            if matches!(event, GameEvent::PickupCollected { .. }) {
                pickups_changed = true;
            }
            let _ = updates_tx.send(ServerMessage::Event(event.clone()));
        }
        if pickups_changed {
            let _ = updates_tx.send(ServerMessage::PickupList(snapshot.pickups.clone()));
        }

        for reply in pending_joins.drain(..) {
            let _ = reply.send(snapshot.clone());
        }

        since_snapshot += dt;
        if since_snapshot >= SNAPSHOT_INTERVAL {
            since_snapshot = Duration::ZERO;

            // Projectile lists only while any are live, plus one
            // trailing empty list to clear client state.
            let has_projectiles = !snapshot.projectiles.is_empty();
            if has_projectiles || had_projectiles {
                let _ =
                    updates_tx.send(ServerMessage::ProjectileList(snapshot.projectiles.clone()));
            }
            had_projectiles = has_projectiles;

            let _ = updates_tx.send(ServerMessage::Snapshot(snapshot));
        }
    }
}

fn handle_session_event(
    event: SessionEvent,
    engine: &mut ArenaEngine,
    gate: &mut MoveGate,
    pending_joins: &mut Vec<oneshot::Sender<WorldSnapshot>>,
) {
    match event {
        SessionEvent::Join {
            ship_id,
            name,
            reply,
        } => {
            info!(ship_id = ship_id.0, name = %name, "participant joining");
            engine.queue_command(WorldCommand::Join { ship_id, name });
            pending_joins.push(reply);
        }
        SessionEvent::Leave { ship_id } => {
            info!(ship_id = ship_id.0, "participant leaving");
            gate.forget(ship_id);
            engine.queue_command(WorldCommand::Leave { ship_id });
        }
        SessionEvent::Message { ship_id, message } => {
            if let Some(command) = translate(ship_id, message, gate) {
                engine.queue_command(command);
            }
        }
    }
}

/// Map a client message onto a world command, applying per-ship rate
/// limits. Returns None for messages to drop.
fn translate(ship_id: ShipId, message: ClientMessage, gate: &mut MoveGate) -> Option<WorldCommand> {
    match message {
        ClientMessage::Join { .. } => {
            // The handshake already joined this connection.
            warn!(ship_id = ship_id.0, "duplicate join message ignored");
            None
        }
        ClientMessage::Controls { intent } => {
            Some(WorldCommand::SetControls { ship_id, intent })
        }
        ClientMessage::Move {
            position,
            heading,
            speed,
        } => {
            if !gate.accept(ship_id, Instant::now()) {
                debug!(ship_id = ship_id.0, "move report dropped by rate limit");
                return None;
            }
            Some(WorldCommand::MoveReport {
                ship_id,
                position,
                heading,
                speed,
            })
        }
        ClientMessage::Fire { side } => Some(WorldCommand::Fire { ship_id, side }),
        ClientMessage::DamageReport { amount } => {
            Some(WorldCommand::DamageReport { ship_id, amount })
        }
        ClientMessage::Collect { pickup_id } => Some(WorldCommand::Collect { ship_id, pickup_id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_core::types::Position;
    use tokio::time::timeout;

    #[test]
    fn test_move_gate_drops_fast_reports() {
        let mut gate = MoveGate::new(Duration::from_millis(50));
        let start = Instant::now();
        let id = ShipId(7);

        assert!(gate.accept(id, start));
        assert!(!gate.accept(id, start + Duration::from_millis(20)));
        assert!(!gate.accept(id, start + Duration::from_millis(49)));
        assert!(gate.accept(id, start + Duration::from_millis(50)));
        // Ships are gated independently.
        assert!(gate.accept(ShipId(8), start + Duration::from_millis(51)));
    }

    #[test]
    fn test_move_gate_forget_resets() {
        let mut gate = MoveGate::new(Duration::from_millis(50));
        let start = Instant::now();
        let id = ShipId(7);

        assert!(gate.accept(id, start));
        gate.forget(id);
        assert!(gate.accept(id, start + Duration::from_millis(1)));
    }

    #[test]
    fn test_translate_respects_gate() {
        let mut gate = MoveGate::new(Duration::from_millis(50));
        let id = ShipId(7);
        let movement = ClientMessage::Move {
            position: Position::default(),
            heading: 0.0,
            speed: 0.0,
        };

        assert!(translate(id, movement.clone(), &mut gate).is_some());
        assert!(translate(id, movement, &mut gate).is_none());
        assert!(translate(id, ClientMessage::Join { name: "x".into() }, &mut gate).is_none());
    }

    #[tokio::test]
    async fn test_world_task_join_and_leave() {
        let (sessions_tx, sessions_rx) = mpsc::channel(64);
        let (updates_tx, mut updates_rx) = broadcast::channel(256);
        tokio::spawn(world_task(7, sessions_rx, updates_tx));

        let ship_id = ShipId(5000);
        let (reply_tx, reply_rx) = oneshot::channel();
        sessions_tx
            .send(SessionEvent::Join {
                ship_id,
                name: "Drake".to_string(),
                reply: reply_tx,
            })
            .await
            .unwrap();

        // The reply snapshot already contains the joined ship.
        let snapshot = timeout(Duration::from_secs(2), reply_rx)
            .await
            .expect("join reply timed out")
            .expect("world task dropped the reply");
        assert!(snapshot.ship(ship_id).is_some());

        // The join was also broadcast as an event.
        let joined = wait_for(&mut updates_rx, |msg| {
            matches!(
                msg,
                ServerMessage::Event(GameEvent::ShipJoined { ship }) if ship.id == ship_id
            )
        })
        .await;
        assert!(joined);

        sessions_tx
            .send(SessionEvent::Leave { ship_id })
            .await
            .unwrap();
        let left = wait_for(&mut updates_rx, |msg| {
            matches!(
                msg,
                ServerMessage::Event(GameEvent::ShipLeft { id }) if *id == ship_id
            )
        })
        .await;
        assert!(left);
    }

    /// Receive broadcasts until `pred` matches or two seconds pass.
    async fn wait_for(
        rx: &mut broadcast::Receiver<ServerMessage>,
        pred: impl Fn(&ServerMessage) -> bool,
    ) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            match timeout(Duration::from_millis(500), rx.recv()).await {
                Ok(Ok(msg)) if pred(&msg) => return true,
                Ok(Ok(_)) => continue,
                Ok(Err(broadcast::error::RecvError::Lagged(_))) => continue,
                _ => return false,
            }
        }
        false
    }
}
