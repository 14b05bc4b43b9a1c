//! Shared state and the session/world channel contract.

use tokio::sync::{broadcast, mpsc, oneshot};

use broadside_core::protocol::{ClientMessage, ServerMessage};
use broadside_core::state::WorldSnapshot;
use broadside_core::types::ShipId;

/// Events a connection task sends to the world task.
#[derive(Debug)]
pub enum SessionEvent {
    /// A participant finished the handshake. The reply carries the first
    /// snapshot that includes their ship, taken after the join is
    /// applied.
    Join {
        ship_id: ShipId,
        name: String,
        reply: oneshot::Sender<WorldSnapshot>,
    },
    /// The connection closed (cleanly or not).
    Leave { ship_id: ShipId },
    /// A gameplay message from the participant.
    Message {
        ship_id: ShipId,
        message: ClientMessage,
    },
}

/// State shared with every connection handler.
pub struct AppState {
    /// All session events go to the single world task.
    pub sessions_tx: mpsc::Sender<SessionEvent>,
    /// Outbound messages, broadcast to all connected clients.
    pub updates_tx: broadcast::Sender<ServerMessage>,
}
