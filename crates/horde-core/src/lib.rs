//! Core types and definitions for the horde swarm simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, tuning config, commands, state snapshots, events, and constants.
//! It has no dependency on the ECS or any threading runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
