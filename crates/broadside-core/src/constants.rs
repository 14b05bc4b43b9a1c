//! Gameplay constants and tuning parameters.
//!
//! Runtime/server configuration (tick cadence, channel sizes, broadcast
//! throttles) lives in the server crate, not here.

use crate::types::SafeZone;

/// Nominal simulation tick rate (Hz). The engine itself accepts measured Δt.
pub const TICK_RATE: u32 = 30;

/// Maximum Δt accepted by the integrator (seconds). Larger deltas after a
/// stall are clamped to avoid tunneling and speed spikes.
pub const MAX_DT: f64 = 0.25;

// --- Ship handling ---

/// Turn rate under an active turn input (rad/s).
pub const TURN_RATE: f64 = 2.0;

/// Linear acceleration under accelerate/decelerate input (units/s²).
pub const ACCELERATION: f64 = 2.0;

/// Passive speed decay with no thrust input (units/s²).
pub const DECELERATION: f64 = 1.0;

/// Speed cap for directly controlled ships (units/s).
pub const MAX_SPEED: f64 = 5.0;

// --- Hull ---

/// Hull hit points at spawn.
pub const MAX_HEALTH: i32 = 250;

/// Ship bounding half-extents (x, y, z) for the coarse collision box.
pub const SHIP_HALF_EXTENTS: (f64, f64, f64) = (3.0, 6.0, 4.5);

/// Per-axis shrink applied to the collision box to reject grazing shots.
pub const HITBOX_SHRINK: f64 = 0.5;

/// Proximity radius for the tight hit check (units).
pub const HIT_RADIUS: f64 = 5.0;

/// Damage applied per confirmed projectile hit.
pub const HIT_DAMAGE: i32 = 25;

/// Seconds a destroyed AI hull lingers (inert) before removal, leaving
/// time for the explosion effect downstream.
pub const DESTROYED_LINGER_SECS: f64 = 3.0;

// --- Projectiles ---

/// Planar muzzle speed (units/s).
pub const PROJECTILE_SPEED: f64 = 80.0;

/// Vertical muzzle velocity (units/s); gravity pulls it into an arc.
pub const PROJECTILE_LAUNCH_VY: f64 = 5.0;

/// Downward acceleration on projectiles (units/s²).
pub const GRAVITY: f64 = 4.9;

/// Uniform random aim spread, ± radians.
pub const PROJECTILE_SPREAD: f64 = 0.1;

/// Spawn offset from the ship center along the shot direction (units).
pub const PROJECTILE_SPAWN_OFFSET: f64 = 3.0;

/// Spawn height above the firing ship's position (units).
pub const PROJECTILE_SPAWN_HEIGHT: f64 = 1.0;

/// Projectile collision radius (units).
pub const PROJECTILE_RADIUS: f64 = 0.2;

/// Maximum projectile age (seconds); purged every tick as a safety net
/// even if water/collision detection missed it.
pub const PROJECTILE_MAX_AGE_SECS: f64 = 5.0;

// --- AI ---

/// Cruise speed when approaching or retreating (units/s).
pub const AI_CRUISE_SPEED: f64 = 15.0;

/// Cruise speed while circling the target (units/s).
pub const AI_CIRCLE_SPEED: f64 = 12.0;

/// Preferred engagement distance (units).
pub const AI_OPTIMAL_RANGE: f64 = 35.0;

/// Half-width of the hold band around the optimal range (units).
pub const AI_RANGE_DEADBAND: f64 = 5.0;

/// Heading smoothing factor (multiplied by Δt; never snaps).
pub const AI_TURN_FACTOR: f64 = 2.0;

/// Maximum firing distance (units).
pub const AI_FIRING_RANGE: f64 = 60.0;

/// Minimum seconds between AI shots.
pub const AI_FIRE_COOLDOWN_SECS: f64 = 5.0;

/// Lead time for predictive aim (seconds of target travel).
pub const AI_LEAD_TIME_SECS: f64 = 2.0;

/// Seconds the current target is retained before re-picking the closest
/// candidate (hysteresis against target thrashing).
pub const AI_TARGET_CHANGE_INTERVAL_SECS: f64 = 10.0;

/// Fixed AI start slots: (x, z, heading). Five hulls boxing the origin.
pub const AI_START_SLOTS: [(f64, f64, f64); 5] = [
    (20.0, 20.0, std::f64::consts::PI),
    (-20.0, 20.0, std::f64::consts::PI),
    (20.0, -20.0, 0.0),
    (-20.0, -20.0, 0.0),
    (0.0, 40.0, std::f64::consts::PI),
];

// --- Zones & regeneration ---

/// Static safe zones for the session.
pub const SAFE_ZONES: [SafeZone; 4] = [
    SafeZone {
        x: -120.0,
        z: -120.0,
        radius: 40.0,
    },
    SafeZone {
        x: 120.0,
        z: 120.0,
        radius: 50.0,
    },
    SafeZone {
        x: -120.0,
        z: 120.0,
        radius: 40.0,
    },
    SafeZone {
        x: 120.0,
        z: -120.0,
        radius: 50.0,
    },
];

/// Seconds of (possibly intermittent) zone presence per heal.
pub const REGEN_INTERVAL_SECS: f64 = 5.0;

/// Fraction of max health restored per regeneration window.
pub const REGEN_FRACTION: f64 = 0.1;

// --- Economy ---

/// Coins credited to a new participant.
pub const STARTING_COINS: i64 = 100;

/// Coins credited per collected pickup.
pub const COIN_VALUE: i64 = 50;

/// Coins awarded for destroying an AI ship.
pub const KILL_BOUNTY: i64 = 150;

/// Pickups scattered at arena setup.
pub const COIN_COUNT: u32 = 20;

/// Pickups spawn uniformly over ±COIN_FIELD_HALF_EXTENT on x/z.
pub const COIN_FIELD_HALF_EXTENT: f64 = 100.0;

/// New participants spawn uniformly over ±SPAWN_HALF_EXTENT on x/z.
pub const SPAWN_HALF_EXTENT: f64 = 50.0;
