//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Ownership category for ships and the projectiles they fire.
///
/// Same-faction fire never resolves as a hit, so the faction tag is the
/// unit of friendly-fire exclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The locally controlled ship (engine embedded in a client).
    Player,
    /// A ship controlled by a connected remote participant.
    #[default]
    RemotePlayer,
    /// A computer-controlled ship.
    Ai,
}

/// Which broadside battery a shot leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireSide {
    /// Left of the heading (shot direction heading - π/2).
    Port,
    /// Right of the heading (shot direction heading + π/2).
    Starboard,
}

impl FireSide {
    /// Angular offset of the shot direction relative to the ship heading.
    pub fn offset(&self) -> f64 {
        match self {
            FireSide::Port => -std::f64::consts::FRAC_PI_2,
            FireSide::Starboard => std::f64::consts::FRAC_PI_2,
        }
    }
}
