//! Enumerations shared by the steering core and the simulation.

use serde::{Deserialize, Serialize};

/// What an agent's steering did this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteeringMode {
    /// Not steered yet (fresh spawn, or the pass was skipped).
    #[default]
    Idle,
    /// Inside the tolerance band around the desired orbit distance.
    Holding,
    /// Too far from the target, closing in.
    Approaching,
    /// Too close to the target, backing off.
    Retreating,
    /// Overlap escape; orbit logic bypassed.
    Emergency,
}

/// Which way agents circle the target while approaching or retreating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitHandedness {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl OrbitHandedness {
    /// Sign applied to the tangential direction.
    pub fn sign(self) -> f32 {
        match self {
            OrbitHandedness::CounterClockwise => 1.0,
            OrbitHandedness::Clockwise => -1.0,
        }
    }
}

/// Kind of attack an agent issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    Ranged,
    Melee,
}

/// Simulation run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}

/// Why an avoidance pass did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// No player exists this tick.
    NoTarget,
    /// No steerable agents exist.
    NoAgents,
}
