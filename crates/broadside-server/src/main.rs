//! Authoritative arena server.
//!
//! One world task owns the simulation; axum serves the WebSocket
//! endpoint that connection tasks run on.

mod config;
mod game;
mod ids;
mod net;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::{broadcast, mpsc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{ServerConfig, SESSION_CHANNEL_CAPACITY, UPDATE_BROADCAST_CAPACITY};
use crate::game::world_task;
use crate::net::ws_handler;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let (sessions_tx, sessions_rx) = mpsc::channel(SESSION_CHANNEL_CAPACITY);
    let (updates_tx, _updates_rx) = broadcast::channel(UPDATE_BROADCAST_CAPACITY);

    let state = Arc::new(AppState {
        sessions_tx,
        updates_tx: updates_tx.clone(),
    });

    tokio::spawn(world_task(config.seed, sessions_rx, updates_tx));

    let app = Router::new().route("/ws", get(ws_handler)).with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
    }
}
