//! Authoritative arena simulation.
//!
//! Owns the hecs ECS world, applies queued commands at tick boundaries,
//! runs all systems, and produces `WorldSnapshot`s. Completely headless
//! (no network dependency), enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use broadside_core as core;
pub use engine::{ArenaConfig, ArenaEngine};
