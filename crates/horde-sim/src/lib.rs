//! Simulation engine for the horde swarm.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces SwarmSnapshots for the host.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SwarmSimulation};
pub use horde_core as core;
