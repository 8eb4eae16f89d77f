//! Simulation engine.
//!
//! `SwarmSimulation` owns the hecs ECS world, processes host commands,
//! runs all systems, and produces `SwarmSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use horde_core::commands::SimCommand;
use horde_core::components::{Enemy, Health};
use horde_core::config::SteeringConfig;
use horde_core::constants::TICK_RATE;
use horde_core::enums::{SimPhase, SkipReason};
use horde_core::error::ConfigError;
use horde_core::events::SwarmEvent;
use horde_core::state::{StepSummary, SwarmSnapshot};
use horde_core::types::SimTime;

use horde_steering::{SteeringAgent, SteeringEngine};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Ticks per simulated second.
    pub tick_rate: u32,
    pub steering: SteeringConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            steering: SteeringConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::NonPositive {
                field: "tick_rate",
                value: 0.0,
            });
        }
        self.steering.validate()
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SwarmSimulation {
    world: World,
    time: SimTime,
    phase: SimPhase,
    dt: f32,
    rng: ChaCha8Rng,
    steering: SteeringEngine,
    command_queue: VecDeque<SimCommand>,
    // Reused across ticks by the avoidance system.
    agent_buffer: Vec<SteeringAgent>,
    entity_buffer: Vec<Entity>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SwarmEvent>,
    last_step: StepSummary,
    last_skip: Option<SkipReason>,
}

impl SwarmSimulation {
    /// Create a new simulation with the given config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "swarm simulation: seed {}, {} Hz",
            config.seed, config.tick_rate
        );
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            dt: config.dt(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            steering: SteeringEngine::new(config.steering)?,
            command_queue: VecDeque::new(),
            agent_buffer: Vec::new(),
            entity_buffer: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            last_step: StepSummary::default(),
            last_skip: None,
        })
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SwarmSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.run_systems();
            self.time.advance(self.dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.last_step,
            events,
        )
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds simulated per tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn steering_config(&self) -> &SteeringConfig {
        self.steering.config()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command. Invalid commands are logged and dropped.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SpawnPlayer { position } => {
                if let Err(err) = world_setup::spawn_player(&mut self.world, position) {
                    warn!("SpawnPlayer rejected: {err}");
                }
            }
            SimCommand::MovePlayer { position } => {
                match world_setup::move_player(&mut self.world, position) {
                    Ok(true) => {}
                    Ok(false) => warn!("MovePlayer ignored: no player"),
                    Err(err) => warn!("MovePlayer rejected: {err}"),
                }
            }
            SimCommand::RemovePlayer => {
                world_setup::remove_player(&mut self.world);
            }
            SimCommand::SpawnAgent {
                position,
                blueprint,
            } => {
                let target = world_setup::find_player(&self.world);
                if let Err(err) =
                    world_setup::spawn_agent(&mut self.world, position, &blueprint, target)
                {
                    warn!("SpawnAgent rejected: {err}");
                }
            }
            SimCommand::SpawnRing {
                count,
                radius,
                blueprint,
            } => {
                let center = world_setup::find_player(&self.world);
                if let Err(err) = world_setup::spawn_ring(
                    &mut self.world,
                    &mut self.rng,
                    center.unwrap_or(Vec3::ZERO),
                    count,
                    radius,
                    &blueprint,
                    center,
                ) {
                    warn!("SpawnRing rejected: {err}");
                }
            }
            SimCommand::DamageAgent { agent_id, amount } => {
                let Some(entity) = Entity::from_bits(agent_id) else {
                    warn!("DamageAgent ignored: invalid id {agent_id}");
                    return;
                };
                match self
                    .world
                    .query_one_mut::<(&Enemy, &mut Health)>(entity)
                {
                    Ok((_enemy, health)) => health.0 = health.0.saturating_sub(amount),
                    Err(_) => warn!("DamageAgent ignored: no agent {agent_id}"),
                }
            }
            SimCommand::SetSteeringConfig { config } => {
                if let Err(err) = self.steering.set_config(config) {
                    warn!("SetSteeringConfig rejected: {err}");
                }
            }
            SimCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Attack cooldowns
        systems::cooldown::run(&mut self.world, self.dt);
        // 2. Avoidance steering
        self.last_step = systems::avoidance::run(
            &mut self.world,
            &mut self.steering,
            &mut self.agent_buffer,
            &mut self.entity_buffer,
            self.dt,
            &mut self.last_skip,
            &mut self.events,
        );
        // 3. Attack intent
        let target = world_setup::find_player(&self.world);
        systems::attack::run(&mut self.world, target, &mut self.events);
        // 4. Cleanup (dead agents)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
    }
}
