//! Swarm avoidance and steering for horde.
//!
//! Keeps many agents from overlapping each other or the player while they
//! converge on an orbit around the player. Each tick the engine rebuilds a
//! read-only [`SpatialSnapshot`], then steers every agent independently:
//! orbit decision, blocked-path probing, separation, and a turn-rate limited
//! integration step. No ECS dependency; operates on plain data.

pub mod engine;
pub mod integrator;
pub mod orbit;
pub mod probe;
pub mod separation;
pub mod snapshot;

pub use engine::{steer_agent, SteeringAgent, SteeringEngine, SteeringOutput, StepOutcome};
pub use horde_core as core;
pub use snapshot::SpatialSnapshot;
