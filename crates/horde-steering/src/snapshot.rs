//! Per-tick cache of agent positions and radii.
//!
//! Rebuilt once per tick before any agent is steered, then shared read-only
//! by every agent's computation. Storage is reused across ticks and only
//! grows.

use glam::Vec3;

use horde_core::constants::{SNAPSHOT_HEADROOM, SNAPSHOT_INITIAL_CAPACITY};

#[derive(Debug, Clone)]
pub struct SpatialSnapshot {
    positions: Vec<Vec3>,
    radii: Vec<f32>,
    target: Option<Vec3>,
}

impl Default for SpatialSnapshot {
    fn default() -> Self {
        Self::with_capacity(SNAPSHOT_INITIAL_CAPACITY)
    }
}

impl SpatialSnapshot {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            radii: Vec::with_capacity(capacity),
            target: None,
        }
    }

    /// Replace the contents with `(position, entity_radius)` pairs, in agent
    /// iteration order, plus the target position for this tick.
    pub fn rebuild<I>(&mut self, agents: I, target: Option<Vec3>)
    where
        I: IntoIterator<Item = (Vec3, f32)>,
        I::IntoIter: ExactSizeIterator,
    {
        let agents = agents.into_iter();
        let count = agents.len();

        self.positions.clear();
        self.radii.clear();
        if self.positions.capacity() < count {
            self.positions.reserve(count + SNAPSHOT_HEADROOM);
        }
        if self.radii.capacity() < count {
            self.radii.reserve(count + SNAPSHOT_HEADROOM);
        }

        for (position, radius) in agents {
            self.positions.push(position);
            self.radii.push(radius);
        }
        self.target = target;
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Slots available without reallocating.
    pub fn capacity(&self) -> usize {
        self.positions.capacity().min(self.radii.capacity())
    }

    pub fn position(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    pub fn radius(&self, index: usize) -> f32 {
        self.radii[index]
    }

    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// `(index, position, radius)` for every cached agent.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Vec3, f32)> + '_ {
        self.positions
            .iter()
            .zip(&self.radii)
            .enumerate()
            .map(|(i, (p, r))| (i, *p, *r))
    }
}
