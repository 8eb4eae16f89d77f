//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or the engine's buffers.

pub mod attack;
pub mod avoidance;
pub mod cleanup;
pub mod cooldown;
pub mod snapshot;
