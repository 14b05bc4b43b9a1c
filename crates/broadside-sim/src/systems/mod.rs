//! ECS systems that operate on the arena world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only). They do not own state; everything lives in components or
//! in the engine's buffers.

pub mod ai;
pub mod cleanup;
pub mod collision;
pub mod firing;
pub mod movement;
pub mod projectiles;
pub mod regen;
pub mod snapshot;
