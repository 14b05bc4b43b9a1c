//! Maneuver selection and heading smoothing.
//!
//! AI ships hold a preferred engagement distance: close in when too far,
//! open the range when too close, and circle inside the hold band. The
//! circling offset oscillates with simulation time so the orbit direction
//! reverses periodically instead of tracing a fixed ring.

use broadside_core::constants::{
    AI_CIRCLE_SPEED, AI_CRUISE_SPEED, AI_OPTIMAL_RANGE, AI_RANGE_DEADBAND, AI_TURN_FACTOR,
};
use broadside_core::types::{shortest_arc, Position};

/// Range-keeping state for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    /// Too far: head straight at the target.
    Approach,
    /// Too close: head straight away.
    Retreat,
    /// In the hold band: orbit the target.
    Circle,
}

/// Desired heading and speed for the selected maneuver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub maneuver: Maneuver,
    pub desired_heading: f64,
    pub cruise_speed: f64,
}

/// Select the maneuver for a ship at `position` engaging `target`.
pub fn select_maneuver(position: &Position, target: &Position, now_secs: f64) -> Steering {
    let distance = position.planar_distance_to(target);
    let angle_to_target = position.angle_to(target);

    if distance > AI_OPTIMAL_RANGE + AI_RANGE_DEADBAND {
        Steering {
            maneuver: Maneuver::Approach,
            desired_heading: angle_to_target,
            cruise_speed: AI_CRUISE_SPEED,
        }
    } else if distance < AI_OPTIMAL_RANGE - AI_RANGE_DEADBAND {
        Steering {
            maneuver: Maneuver::Retreat,
            desired_heading: angle_to_target + std::f64::consts::PI,
            cruise_speed: AI_CRUISE_SPEED,
        }
    } else {
        let circling_offset = now_secs.sin() * std::f64::consts::FRAC_PI_2;
        Steering {
            maneuver: Maneuver::Circle,
            desired_heading: angle_to_target + circling_offset,
            cruise_speed: AI_CIRCLE_SPEED,
        }
    }
}

/// Smooth the current heading toward `desired` along the shortest angular
/// path. Never snaps: the step is proportional to Δt.
pub fn steer(current: f64, desired: f64, dt: f64) -> f64 {
    current + shortest_arc(current, desired) * AI_TURN_FACTOR * dt
}
