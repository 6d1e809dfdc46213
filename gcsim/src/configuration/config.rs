//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – host loop options (time step, tick count, parallelism)
//! - [`ParametersConfig`] – physical constants and toggles
//! - [`BodyConfig`]       – initial state for each body, any field may be omitted
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   dt: 0.001               # time step per tick
//!   ticks: 2000             # ticks the headless host runs
//!   parallel: false         # rayon pairwise pass
//!
//! parameters:
//!   G: 1.0                  # gravitational constant, 0..=100
//!   collision_enabled: true
//!   restitution: 1.0        # 0..=1
//!   paused: false
//!
//! seed: 42                  # optional, pins the random source
//! random_bodies: 3          # extra bodies with randomized state
//!
//! bodies:
//!   - x: [ -0.45, 0.0, 0.0 ]
//!     v: [  1.0, 0.0, 0.0 ]
//!     m: 1.0
//!     radius: 0.5
//!     color: "#ff4040"
//!   - x: [  0.45, 0.0, 0.0 ]  # v, m, radius and color are randomized
//! ```
//!
//! Omitted sections fall back to the defaults of `Engine` and `Parameters`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodySpec, Color, NVec3};

/// Host loop configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub dt: f64, // time step handed to every tick
    pub ticks: u64, // how many ticks to run
    pub parallel: bool, // `true` - pairwise pass runs on the rayon pool
}

impl Default for EngineConfig {
    fn default() -> Self {
        let e = Engine::default();
        Self {
            dt: e.dt,
            ticks: e.ticks,
            parallel: e.parallel,
        }
    }
}

/// Physical constants and toggles
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub collision_enabled: bool, // impulse response on overlap
    pub restitution: f64, // 1 = elastic, 0 = fully inelastic
    pub paused: bool, // start paused
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: p.G,
            collision_enabled: p.collision_enabled,
            restitution: p.restitution,
            paused: p.paused,
        }
    }
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct BodyConfig {
    pub x: Option<[f64; 3]>, // Initial position
    pub v: Option<[f64; 3]>, // Initial velocity, units per second
    pub m: Option<f64>,      // Mass, must be > 0
    pub radius: Option<f64>, // Collision radius, must be > 0
    #[serde(deserialize_with = "hex_color")]
    pub color: Option<Color>, // "#rrggbb"
}

impl BodyConfig {
    pub fn to_spec(&self) -> BodySpec {
        BodySpec {
            x: self.x.map(NVec3::from),
            v: self.v.map(NVec3::from),
            m: self.m,
            radius: self.radius,
            color: self.color,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Host loop settings
    pub parameters: ParametersConfig, // Physical constants and toggles
    pub seed: Option<u64>, // Fixed seed for the random source, entropy if absent
    pub random_bodies: usize, // Number of fully randomized bodies added after `bodies`
    pub bodies: Vec<BodyConfig>, // Explicit initial bodies, in order
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> serde_yaml::Result<Self> {
        serde_yaml::from_str(s)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg = serde_yaml::from_reader(reader).with_context(|| format!("parsing scenario {}", path.display()))?;
        Ok(cfg)
    }
}

fn hex_color<'de, D>(deserializer: D) -> std::result::Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| -> std::result::Result<Color, D::Error> {
        let hex = s.strip_prefix('#').unwrap_or(&s);
        if hex.len() != 6 || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(serde::de::Error::custom(format!("color `{s}` is not #rrggbb")));
        }
        u32::from_str_radix(hex, 16)
            .map(Color)
            .map_err(|_| serde::de::Error::custom(format!("color `{s}` is not #rrggbb")))
    })
    .transpose()
}
