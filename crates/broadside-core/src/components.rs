//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; systems in the
//! sim crate own all behavior.

use serde::{Deserialize, Serialize};

use crate::enums::Faction;
use crate::types::{PickupId, ProjectileId, ShipId, Velocity};

/// Ship planar kinematic state. Position is a separate component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipKinematics {
    /// Heading in radians (0 = +z, per `x += sin(h)` movement).
    pub heading: f64,
    /// Signed scalar speed (negative = astern).
    pub speed: f64,
}

/// Abstract control signal for a directly controlled ship.
///
/// Simultaneous opposite inputs cancel. Absent thrust input decays speed
/// toward zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlIntent {
    pub turn_left: bool,
    pub turn_right: bool,
    pub accelerate: bool,
    pub decelerate: bool,
}

/// Hull health. `current` never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullHealth {
    pub max: i32,
    pub current: i32,
}

impl Default for HullHealth {
    fn default() -> Self {
        HullHealth::full(crate::constants::MAX_HEALTH)
    }
}

impl HullHealth {
    pub fn full(max: i32) -> Self {
        Self { max, current: max }
    }

    /// Apply damage, flooring at zero. Returns the new current health.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        self.current = (self.current - amount).max(0);
        self.current
    }

    /// Heal up to `amount`, capped at max. Returns the amount restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - before
    }
}

/// Participant-visible name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(pub String);

/// Resource balance (coins).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinPurse(pub i64);

/// Terminal marker: the hull is inert and excluded from physics, AI, and
/// collision testing. Removal timing depends on faction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Destroyed {
    /// Simulation time at which the hull was destroyed.
    pub at_secs: f64,
}

/// Last time this hull was granted zone regeneration. Presence need not be
/// continuous; the window is measured in elapsed simulation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegenClock {
    pub last_regen_secs: f64,
}

/// AI decision state attached to computer-controlled ships.
///
/// Mutated only by the AI system; replicated for telemetry only, never as
/// gameplay-critical data (it is recomputable).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiController {
    /// Current target ship, if any.
    pub target: Option<ShipId>,
    /// Simulation time of the last target change.
    pub last_target_change_secs: f64,
    /// Simulation time of the last shot.
    pub last_fire_secs: f64,
    /// Minimum seconds between shots.
    pub cooldown_secs: f64,
    /// Maximum firing distance (units).
    pub firing_range: f64,
}

impl AiController {
    /// Fresh controller: no target, cooldown already elapsed so the ship
    /// can fire as soon as something is in range.
    pub fn new() -> Self {
        Self {
            target: None,
            last_target_change_secs: 0.0,
            last_fire_secs: -crate::constants::AI_FIRE_COOLDOWN_SECS,
            cooldown_secs: crate::constants::AI_FIRE_COOLDOWN_SECS,
            firing_range: crate::constants::AI_FIRING_RANGE,
        }
    }
}

impl Default for AiController {
    fn default() -> Self {
        Self::new()
    }
}

/// Projectile state. Ownership is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub owner: ShipId,
    pub faction: Faction,
    pub velocity: Velocity,
    /// Simulation time at spawn, for the max-age purge.
    pub spawned_secs: f64,
}

/// A collectible coin. Exists until collected exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: PickupId,
}
