//! Fundamental geometric and simulation types.
//!
//! The arena is a 2D plane rendered in 3D: ships live on the x/z plane
//! (y = 0), projectiles arc through y. Planar math ignores y throughout.

use serde::{Deserialize, Serialize};

/// Stable ship identifier. Assigned once, never reused as an array index.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ShipId(pub u64);

/// Projectile identifier, monotonic for the lifetime of the arena.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProjectileId(pub u64);

/// Pickup (coin) identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PickupId(pub u32);

/// 3D position in arena space. y is height above the water plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking. Advanced by measured (clamped) deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Static circular no-damage / regeneration region on the water plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    pub x: f64,
    pub z: f64,
    pub radius: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared planar (x/z) distance to another position.
    pub fn planar_distance_sq_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        dx * dx + dz * dz
    }

    /// Planar (x/z) distance to another position.
    pub fn planar_distance_to(&self, other: &Position) -> f64 {
        self.planar_distance_sq_to(other).sqrt()
    }

    /// Straight-line 3D distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Planar heading from this position toward another.
    ///
    /// Headings follow the movement convention `x += sin(h), z += cos(h)`,
    /// so 0 points along +z.
    pub fn angle_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        dx.atan2(dz)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Planar velocity for a ship travelling at `speed` along `heading`.
    pub fn from_heading(heading: f64, speed: f64) -> Self {
        Self {
            x: heading.sin() * speed,
            y: 0.0,
            z: heading.cos() * speed,
        }
    }

    /// Speed magnitude ignoring the vertical component.
    pub fn planar_speed(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

impl SafeZone {
    /// Containment test against the zone circle. Boundary is inclusive.
    pub fn contains(&self, position: &Position) -> bool {
        let dx = self.x - position.x;
        let dz = self.z - position.z;
        dx * dx + dz * dz <= self.radius * self.radius
    }
}

/// True iff `position` lies inside any of the given zones.
pub fn in_any_zone(zones: &[SafeZone], position: &Position) -> bool {
    zones.iter().any(|zone| zone.contains(position))
}

/// Normalize an angle difference onto (-π, π] for shortest-path turns.
pub fn shortest_arc(from: f64, to: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let diff = (to - from).rem_euclid(tau);
    if diff > std::f64::consts::PI {
        diff - tau
    } else {
        diff
    }
}
