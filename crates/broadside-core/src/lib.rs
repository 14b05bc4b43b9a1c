//! Core types and definitions for the broadside arena.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, and the wire protocol.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod protocol;
pub mod replica;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
