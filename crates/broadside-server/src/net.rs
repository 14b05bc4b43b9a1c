//! WebSocket connection handling.
//!
//! Each connection gets a ship id up front, handshakes with a `Join`
//! message, then runs a select loop forwarding client messages to the
//! world task and broadcast updates back out. The world task never
//! blocks on a slow client; a connection that lags the broadcast channel
//! resyncs from the next periodic snapshot.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info, warn};

use broadside_core::protocol::{ClientMessage, ServerMessage};
use broadside_core::types::ShipId;

use crate::ids;
use crate::state::{AppState, SessionEvent};

#[derive(Debug)]
pub enum NetError {
    Ws(axum::Error),
    Serialization(serde_json::Error),
    /// The world task's channel closed; the server is shutting down.
    SessionsClosed,
    UpdatesClosed,
    /// The client disconnected or misbehaved before completing the
    /// handshake.
    HandshakeFailed,
}

impl From<axum::Error> for NetError {
    fn from(e: axum::Error) -> Self {
        NetError::Ws(e)
    }
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sink, mut stream) = socket.split();

    let ctx = match bootstrap_connection(&mut sink, &mut stream, &state).await {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!(error = ?e, "connection bootstrap failed");
            return;
        }
    };

    let ship_id = ctx.ship_id;
    if let Err(e) = run_client_loop(&mut sink, &mut stream, ctx).await {
        debug!(ship_id = ship_id.0, error = ?e, "client loop ended with error");
    }

    // Always tell the world task, whatever ended the loop.
    if state
        .sessions_tx
        .send(SessionEvent::Leave { ship_id })
        .await
        .is_err()
    {
        debug!(ship_id = ship_id.0, "world task gone during disconnect");
    }
    info!(ship_id = ship_id.0, "client disconnected");
}

struct ConnCtx {
    ship_id: ShipId,
    sessions_tx: mpsc::Sender<SessionEvent>,
    updates_rx: broadcast::Receiver<ServerMessage>,
}

async fn send_message(
    sink: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), NetError> {
    let txt = serde_json::to_string(msg).map_err(NetError::Serialization)?;
    sink.send(Message::Text(txt.into())).await.map_err(NetError::Ws)
}

/// Handshake: assign an id, wait for the client's `Join`, register with
/// the world task, and deliver the first snapshot containing the ship.
async fn bootstrap_connection(
    sink: &mut SplitSink<WebSocket, Message>,
    stream: &mut SplitStream<WebSocket>,
    state: &AppState,
) -> Result<ConnCtx, NetError> {
    // Subscribe before joining so no event between join and loop start
    // is missed.
    let updates_rx = state.updates_tx.subscribe();

    let ship_id = ids::allocate_ship_id();
    send_message(sink, &ServerMessage::Welcome { ship_id }).await?;

    let name = wait_for_join(stream).await?;

    let (reply_tx, reply_rx) = oneshot::channel();
    state
        .sessions_tx
        .send(SessionEvent::Join {
            ship_id,
            name,
            reply: reply_tx,
        })
        .await
        .map_err(|_| NetError::SessionsClosed)?;

    let snapshot = reply_rx.await.map_err(|_| NetError::SessionsClosed)?;
    send_message(sink, &ServerMessage::Snapshot(snapshot)).await?;

    info!(ship_id = ship_id.0, "client joined");
    Ok(ConnCtx {
        ship_id,
        sessions_tx: state.sessions_tx.clone(),
        updates_rx,
    })
}

/// Read frames until the client's `Join` arrives. Anything else before
/// it fails the handshake.
async fn wait_for_join(stream: &mut SplitStream<WebSocket>) -> Result<String, NetError> {
    loop {
        let frame = stream
            .next()
            .await
            .ok_or(NetError::HandshakeFailed)?
            .map_err(NetError::Ws)?;
        match frame {
            Message::Text(text) => {
                return match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(ClientMessage::Join { name }) => Ok(name),
                    Ok(_) | Err(_) => Err(NetError::HandshakeFailed),
                };
            }
            Message::Ping(_) | Message::Pong(_) => continue,
            _ => return Err(NetError::HandshakeFailed),
        }
    }
}

enum LoopControl {
    Continue,
    Disconnect,
}

async fn run_client_loop(
    sink: &mut SplitSink<WebSocket, Message>,
    stream: &mut SplitStream<WebSocket>,
    mut ctx: ConnCtx,
) -> Result<(), NetError> {
    loop {
        let control = tokio::select! {
            incoming = stream.next() => {
                handle_incoming(incoming, ctx.ship_id, &ctx.sessions_tx).await?
            }
            update = ctx.updates_rx.recv() => {
                match update {
                    Ok(msg) => {
                        if send_message(sink, &msg).await.is_err() {
                            LoopControl::Disconnect
                        } else {
                            LoopControl::Continue
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        // The next periodic snapshot resyncs the client.
                        warn!(ship_id = ctx.ship_id.0, missed = n, "client lagged broadcast");
                        LoopControl::Continue
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        return Err(NetError::UpdatesClosed);
                    }
                }
            }
        };
        if let LoopControl::Disconnect = control {
            let _ = sink.close().await;
            return Ok(());
        }
    }
}

async fn handle_incoming(
    incoming: Option<Result<Message, axum::Error>>,
    ship_id: ShipId,
    sessions_tx: &mpsc::Sender<SessionEvent>,
) -> Result<LoopControl, NetError> {
    match incoming {
        Some(Ok(Message::Text(text))) => {
            match serde_json::from_str::<ClientMessage>(&text) {
                Ok(message) => {
                    sessions_tx
                        .send(SessionEvent::Message { ship_id, message })
                        .await
                        .map_err(|_| NetError::SessionsClosed)?;
                }
                Err(e) => {
                    // Malformed input is dropped, not fatal.
                    debug!(ship_id = ship_id.0, error = %e, "unparseable client message");
                }
            }
            Ok(LoopControl::Continue)
        }
        Some(Ok(Message::Close(_))) | None => Ok(LoopControl::Disconnect),
        Some(Ok(_)) => Ok(LoopControl::Continue),
        Some(Err(e)) => {
            debug!(ship_id = ship_id.0, error = %e, "websocket receive error");
            Ok(LoopControl::Disconnect)
        }
    }
}
