//! Steering engine: one avoidance pass per tick.
//!
//! `SteeringEngine` owns the scratch [`SpatialSnapshot`] and the global
//! tuning. `step` rebuilds the snapshot on the calling thread, then runs
//! [`steer_agent`] for every agent. Each agent reads only the snapshot and
//! writes only itself, so large swarms are steered on the rayon pool.

use glam::Vec3;
use log::{debug, trace};
use rayon::prelude::*;

use horde_core::components::AvoidanceProfile;
use horde_core::config::SteeringConfig;
use horde_core::constants::EPSILON;
use horde_core::enums::{SkipReason, SteeringMode};
use horde_core::error::ConfigError;
use horde_core::state::StepSummary;

use crate::integrator;
use crate::orbit::{self, OrbitState};
use crate::probe;
use crate::separation;
use crate::snapshot::SpatialSnapshot;

/// One agent as the steering pass sees it. `mode` and `blocked` are outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringAgent {
    pub position: Vec3,
    pub forward: Vec3,
    pub profile: AvoidanceProfile,
    pub move_speed: f32,
    pub mode: SteeringMode,
    pub blocked: bool,
}

impl SteeringAgent {
    pub fn new(position: Vec3, forward: Vec3, profile: AvoidanceProfile, move_speed: f32) -> Self {
        Self {
            position,
            forward,
            profile,
            move_speed,
            mode: SteeringMode::Idle,
            blocked: false,
        }
    }
}

/// New transform and diagnostics for one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringOutput {
    pub position: Vec3,
    pub forward: Vec3,
    pub mode: SteeringMode,
    pub blocked: bool,
}

/// Result of one avoidance pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing moved.
    Skipped(SkipReason),
    Stepped(StepSummary),
}

/// Steer the agent stored at `index` of `snapshot` for one tick.
///
/// Priority order: overlap escape along the separation direction, then orbit
/// holding (drift only to resolve separation), then approach/retreat with
/// path probing and separation blending. Returns the agent unchanged when the
/// snapshot carries no target.
pub fn steer_agent(
    index: usize,
    agent: &SteeringAgent,
    snapshot: &SpatialSnapshot,
    config: &SteeringConfig,
    dt: f32,
) -> SteeringOutput {
    let unchanged = SteeringOutput {
        position: agent.position,
        forward: agent.forward,
        mode: SteeringMode::Idle,
        blocked: false,
    };
    let Some(target) = snapshot.target() else {
        return unchanged;
    };

    let speed = agent.move_speed.max(0.0);
    let max_turn = config.turn_rate * dt;
    let separation = separation::compute(index, agent.position, &agent.profile, snapshot, config);

    if separation.is_emergency(config) {
        trace!(
            "agent {index} overlap escape, force {:.2}/{:.2}",
            separation.magnitude,
            separation.max_force
        );
        let (position, forward) = integrator::integrate(
            agent.position,
            agent.forward,
            separation.direction(),
            speed * config.emergency_speed_multiplier,
            dt,
            max_turn,
        );
        return SteeringOutput {
            position,
            forward,
            mode: SteeringMode::Emergency,
            blocked: false,
        };
    }

    let orbit = orbit::evaluate(
        agent.position,
        agent.forward,
        target,
        agent.profile.desired_distance_from_player,
        config,
    );

    match orbit.state {
        OrbitState::Holding => {
            if separation.magnitude * separation.magnitude < EPSILON {
                return SteeringOutput {
                    mode: SteeringMode::Holding,
                    ..unchanged
                };
            }
            let (position, forward) = integrator::integrate(
                agent.position,
                agent.forward,
                separation.direction(),
                speed * config.hold_speed_scale * separation.ratio(),
                dt,
                max_turn,
            );
            SteeringOutput {
                position,
                forward,
                mode: SteeringMode::Holding,
                blocked: false,
            }
        }
        OrbitState::Approaching | OrbitState::Retreating => {
            let probe = probe::probe(
                index,
                agent.position,
                orbit.direction,
                &agent.profile,
                snapshot,
                config,
            );
            let heading = integrator::blend_direction(probe.direction, &separation, config);
            let scale = integrator::speed_scale(probe.blocked, &separation, config);
            let (position, forward) = integrator::integrate(
                agent.position,
                agent.forward,
                heading,
                speed * scale,
                dt,
                max_turn,
            );
            let mode = if orbit.state == OrbitState::Approaching {
                SteeringMode::Approaching
            } else {
                SteeringMode::Retreating
            };
            SteeringOutput {
                position,
                forward,
                mode,
                blocked: probe.blocked,
            }
        }
    }
}

/// Owns the per-tick snapshot and the global steering constants.
pub struct SteeringEngine {
    config: SteeringConfig,
    snapshot: SpatialSnapshot,
}

impl SteeringEngine {
    pub fn new(config: SteeringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            snapshot: SpatialSnapshot::default(),
        })
    }

    pub fn config(&self) -> &SteeringConfig {
        &self.config
    }

    /// Swap in new tuning. The old config stays in place if the new one is invalid.
    pub fn set_config(&mut self, config: SteeringConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// The snapshot built by the last pass.
    pub fn snapshot(&self) -> &SpatialSnapshot {
        &self.snapshot
    }

    /// Run one avoidance pass over `agents`, updating them in place.
    ///
    /// Without a target the pass is skipped and no agent moves.
    pub fn step(
        &mut self,
        target: Option<Vec3>,
        agents: &mut [SteeringAgent],
        dt: f32,
    ) -> StepOutcome {
        let Some(target) = target else {
            debug!("avoidance skipped: no target");
            return StepOutcome::Skipped(SkipReason::NoTarget);
        };
        if agents.is_empty() {
            debug!("avoidance skipped: no agents");
            return StepOutcome::Skipped(SkipReason::NoAgents);
        }
        let dt = dt.max(0.0);

        self.snapshot.rebuild(
            agents
                .iter()
                .map(|agent| (agent.position, agent.profile.entity_radius)),
            Some(target),
        );

        let snapshot = &self.snapshot;
        let config = &self.config;
        let apply = |(index, agent): (usize, &mut SteeringAgent)| {
            let out = steer_agent(index, agent, snapshot, config, dt);
            agent.position = out.position;
            agent.forward = out.forward;
            agent.mode = out.mode;
            agent.blocked = out.blocked;
        };

        if agents.len() >= config.parallel_threshold {
            agents.par_iter_mut().enumerate().for_each(apply);
        } else {
            agents.iter_mut().enumerate().for_each(apply);
        }

        let summary = summarize(agents);
        debug!(
            "avoidance: {} agents, {} holding, {} approaching, {} retreating, {} emergency, {} blocked",
            summary.agents,
            summary.holding,
            summary.approaching,
            summary.retreating,
            summary.emergency,
            summary.blocked
        );
        StepOutcome::Stepped(summary)
    }
}

fn summarize(agents: &[SteeringAgent]) -> StepSummary {
    let mut summary = StepSummary {
        agents: agents.len() as u32,
        ..Default::default()
    };
    for agent in agents {
        match agent.mode {
            SteeringMode::Holding => summary.holding += 1,
            SteeringMode::Approaching => summary.approaching += 1,
            SteeringMode::Retreating => summary.retreating += 1,
            SteeringMode::Emergency => summary.emergency += 1,
            SteeringMode::Idle => {}
        }
        if agent.blocked {
            summary.blocked += 1;
        }
    }
    summary
}
