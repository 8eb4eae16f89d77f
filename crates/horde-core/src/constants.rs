//! Simulation constants and default tuning parameters.
//!
//! Every steering multiplier here is only a default: the live values come from
//! [`crate::config::SteeringConfig`] and can be changed at runtime.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Squared length below which a vector has no usable direction.
pub const EPSILON: f32 = 1e-4;

// --- Avoidance profile defaults ---

/// Radius within which other agents influence separation.
pub const DEFAULT_DETECTION_RADIUS: f32 = 3.0;

/// Repulsion multiplier (0-1 typical).
pub const DEFAULT_AVOIDANCE_STRENGTH: f32 = 0.8;

/// Orbit radius kept around the player.
pub const DEFAULT_DESIRED_DISTANCE: f32 = 8.0;

/// Radius inside which player repulsion kicks in.
pub const DEFAULT_PLAYER_SEPARATION_RADIUS: f32 = 2.5;

/// Physical collision radius of an agent.
pub const DEFAULT_ENTITY_RADIUS: f32 = 0.5;

/// Agent move speed (units per second).
pub const DEFAULT_MOVE_SPEED: f32 = 3.5;

/// Starting hit points of an agent.
pub const DEFAULT_AGENT_HEALTH: i32 = 100;

// --- Snapshot ---

/// Initial snapshot capacity.
pub const SNAPSHOT_INITIAL_CAPACITY: usize = 256;

/// Extra slots reserved whenever the snapshot has to grow.
pub const SNAPSHOT_HEADROOM: usize = 32;

// --- Orbit ---

/// Half-width of the hold band around the desired distance.
pub const RADIUS_TOLERANCE: f32 = 0.5;

/// Weight of the radial (approach/retreat) component.
pub const RADIAL_WEIGHT: f32 = 0.7;

/// Weight of the tangential (circling) component.
pub const TANGENTIAL_WEIGHT: f32 = 0.3;

// --- Path probe ---

/// Number of headings sampled around the agent when blocked.
pub const SECTOR_COUNT: usize = 12;

/// Fewest sectors a config may ask for.
pub const MIN_SECTOR_COUNT: usize = 4;

/// Forward distance checked for obstructions.
pub const LOOKAHEAD_DISTANCE: f32 = 2.0;

/// Lateral block threshold as a multiple of the entity radius.
pub const LATERAL_THRESHOLD_SCALE: f32 = 2.0;

/// Probe cone radius as a multiple of the entity radius.
pub const PROBE_CONE_SCALE: f32 = 2.0;

// --- Separation ---

/// Force multiplier applied to overlapping pairs, relative to the smooth tier.
pub const PEER_OVERLAP_MULTIPLIER: f32 = 10.0;

/// Player contributions are scaled by this over peer contributions.
pub const TARGET_PRIORITY: f32 = 3.0;

/// Physical radius of the player.
pub const TARGET_RADIUS: f32 = 0.4;

/// Separation ceiling as a multiple of avoidance strength.
pub const MAX_FORCE_SCALE: f32 = 4.0;

/// Fraction of the ceiling above which the emergency override fires.
pub const EMERGENCY_RATIO: f32 = 0.9;

/// Fraction of the ceiling above which the agent slows down.
pub const CROWDED_RATIO: f32 = 0.5;

// --- Integration ---

/// Maximum turn rate (radians per second).
pub const TURN_RATE: f32 = 6.0;

/// Largest share separation can take of the final heading.
pub const SEPARATION_BLEND: f32 = 0.8;

/// Speed multiplier while the path ahead is blocked.
pub const BLOCKED_SPEED_SCALE: f32 = 0.2;

/// Speed multiplier while separation pressure is high.
pub const CROWDED_SPEED_SCALE: f32 = 0.5;

/// Speed multiplier for the emergency overlap escape.
pub const EMERGENCY_SPEED_MULTIPLIER: f32 = 1.5;

/// Speed multiplier for separation drift while holding orbit.
pub const HOLD_SPEED_SCALE: f32 = 0.5;

/// Agent count below which steering runs on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 64;

// --- Attacks ---

/// Attack range above which an attack is ranged rather than melee.
pub const MELEE_RANGE_THRESHOLD: f32 = 1.0;

/// Default attack reach. Covers the whole default hold band.
pub const DEFAULT_ATTACK_RANGE: f32 = 9.0;

/// Default seconds between attacks.
pub const DEFAULT_ATTACK_COOLDOWN_SECS: f32 = 2.0;

// --- Spawning ---

/// Maximum radial jitter applied to ring spawns (fraction of ring radius).
pub const RING_SPAWN_JITTER: f32 = 0.1;

/// Most agents a single ring spawn may create.
pub const MAX_RING_SPAWN: usize = 4096;
