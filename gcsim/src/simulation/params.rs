//! Physical parameters for the simulation
//!
//! `Parameters` holds the tunables the UI mutates between ticks:
//! - gravitational constant `G`,
//! - collision toggle and restitution coefficient,
//! - pause flag
//!
//! The stepper receives them by reference on every call and never writes them

use super::error::{Result, SimError};

pub const G_MIN: f64 = 0.0;
pub const G_MAX: f64 = 100.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant, 0..=100
    pub collision_enabled: bool, // impulse response on overlap
    pub restitution: f64, // 1 = elastic, 0 = fully inelastic
    pub paused: bool, // stepper is a no-op while set
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 1.0,
            collision_enabled: true,
            restitution: 1.0,
            paused: false,
        }
    }
}

impl Parameters {
    /// Build a parameter set, validating every range
    #[allow(non_snake_case)]
    pub fn new(G: f64, collision_enabled: bool, restitution: f64, paused: bool) -> Result<Self> {
        let mut p = Self::default();
        p.set_gravitational_constant(G)?;
        p.set_restitution(restitution)?;
        p.collision_enabled = collision_enabled;
        p.paused = paused;
        Ok(p)
    }

    #[allow(non_snake_case)]
    pub fn set_gravitational_constant(&mut self, G: f64) -> Result<()> {
        self.G = check_range("G", G, G_MIN, G_MAX)?;
        Ok(())
    }

    pub fn set_restitution(&mut self, e: f64) -> Result<()> {
        self.restitution = check_range("restitution", e, 0.0, 1.0)?;
        Ok(())
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = enabled;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value, min, max })
    }
}
