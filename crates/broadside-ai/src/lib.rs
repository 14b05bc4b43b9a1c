//! AI decision engine for computer-controlled ships.
//!
//! Pure functions over plain data: target selection with hysteresis,
//! maneuver selection, heading smoothing, and fire control. No ECS
//! dependency; the sim crate builds contexts and applies the results.

pub mod fire_control;
pub mod maneuver;
pub mod targeting;

#[cfg(test)]
mod tests;
