//! Runtime/server configuration (not gameplay tuning).

use std::time::Duration;

/// Capacity of the session event channel feeding the world task.
pub const SESSION_CHANNEL_CAPACITY: usize = 1024;

/// Capacity of the outbound broadcast channel. A client that lags this
/// far behind resyncs from the next periodic snapshot.
pub const UPDATE_BROADCAST_CAPACITY: usize = 256;

/// World task tick interval (nominal 30 Hz; the engine takes measured Δt).
pub const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Interval between periodic state broadcasts.
pub const SNAPSHOT_INTERVAL: Duration = Duration::from_millis(100);

/// Minimum interval between accepted position reports per ship. Reports
/// arriving faster than this are dropped, not queued.
pub const MOVE_REPORT_MIN_INTERVAL: Duration = Duration::from_millis(50);

/// Server configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (`PORT`, default 3001).
    pub port: u16,
    /// Arena RNG seed (`ARENA_SEED`, default wall-clock derived).
    pub seed: u64,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3001);
        let seed = std::env::var("ARENA_SEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(42)
            });
        Self { port, seed }
    }
}
