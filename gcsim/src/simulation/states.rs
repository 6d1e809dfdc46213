//! Core state types for the gravity/collision simulation.
//!
//! Defines the per-body data the stepper reads and writes:
//! - `Body`      one point mass with its collision radius and trail
//! - `BodyId`    stable identity, independent of position in the store
//! - `Trail`     bounded, oldest-first history of sampled positions
//! - `BodySpec`  input to the "add" command (omitted fields are randomized)
//! - `BodyView`  read-only projection handed to rendering

use std::collections::VecDeque;
use std::fmt;

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Maximum number of samples a trail holds before evicting the oldest
pub const TRAIL_CAPACITY: usize = 500;

/// Trail sampling cadence, in ticks
pub const TRAIL_SAMPLE_INTERVAL: u64 = 10;

/// Opaque, never reused handle to a body in a `BodyStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display tag carried through the simulation untouched (0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub u32);

impl Color {
    pub fn rgb(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

/// Bounded FIFO of past positions. Never read by the physics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    samples: VecDeque<NVec3>,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(TRAIL_CAPACITY),
        }
    }

    /// Append a sample, dropping the oldest one once full
    pub fn push(&mut self, x: NVec3) {
        if self.samples.len() == TRAIL_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(x);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Samples oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &NVec3> + '_ {
        self.samples.iter()
    }

    pub fn to_vec(&self) -> Vec<NVec3> {
        self.samples.iter().copied().collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass, > 0
    pub radius: f64, // collision radius, > 0
    pub color: Color,
    pub trail: Trail,
}

impl Body {
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// Initial state for a new body. `None` fields are randomized by the scenario
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodySpec {
    pub x: Option<NVec3>,
    pub v: Option<NVec3>,
    pub m: Option<f64>,
    pub radius: Option<f64>,
    pub color: Option<Color>,
}

impl BodySpec {
    /// Fully specified body
    pub fn new(x: NVec3, v: NVec3, m: f64, radius: f64) -> Self {
        Self {
            x: Some(x),
            v: Some(v),
            m: Some(m),
            radius: Some(radius),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// What rendering gets to see of a body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub id: BodyId,
    pub x: NVec3,
    pub radius: f64,
    pub color: Color,
    pub trail: Vec<NVec3>,
}

impl From<&Body> for BodyView {
    fn from(b: &Body) -> Self {
        Self {
            id: b.id,
            x: b.x,
            radius: b.radius,
            color: b.color,
            trail: b.trail.to_vec(),
        }
    }
}
