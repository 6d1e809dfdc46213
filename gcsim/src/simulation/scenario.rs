//! Build and drive a simulation scenario
//!
//! `Scenario` is the runtime bundle the host talks to. It owns:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - the body store (`BodyStore`)
//! - the stepper with its tick counter (`Stepper`)
//! - the random source used for unspecified body fields
//!
//! Commands (add/remove/clear, parameter setters) only run between ticks:
//! they all take `&mut self`, as does `tick`, so they cannot interleave with
//! a step in progress. Several scenarios can coexist without sharing state

use std::ops::Range;
use std::sync::Arc;

use log::{info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::error::{Result, SimError};
use crate::simulation::integrator::Stepper;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, BodySpec, BodyView, Color, NVec3};
use crate::simulation::store::BodyStore;

/// Range for each randomized position component
pub const RANDOM_POSITION: Range<f64> = -10.0..10.0;
/// Range for each randomized velocity component
pub const RANDOM_VELOCITY: Range<f64> = -1.0..1.0;
pub const RANDOM_MASS: Range<f64> = 1.0..5.0;
pub const RANDOM_RADIUS: Range<f64> = 0.3..0.8;

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    store: BodyStore,
    stepper: Stepper,
    rng: StdRng,
}

impl Scenario {
    /// Empty scenario. `seed` pins the random source
    pub fn new(engine: Engine, parameters: Parameters, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let stepper = Stepper::new().parallel(engine.parallel);
        Self {
            engine,
            parameters,
            store: BodyStore::new(),
            stepper,
            rng,
        }
    }

    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        // Engine (runtime) from EngineConfig
        let engine = Engine {
            dt: cfg.engine.dt,
            ticks: cfg.engine.ticks,
            parallel: cfg.engine.parallel,
        };
        if !(engine.dt >= 0.0 && engine.dt.is_finite()) {
            return Err(SimError::InvalidTimeStep(engine.dt));
        }

        // Parameters (runtime) from ParametersConfig, range-checked
        let p = &cfg.parameters;
        let parameters = Parameters::new(p.G, p.collision_enabled, p.restitution, p.paused)?;

        let mut scenario = Self::new(engine, parameters, cfg.seed);

        // Bodies: explicit ones first, then the randomized extras
        for bc in &cfg.bodies {
            scenario.add_body(bc.to_spec())?;
        }
        for _ in 0..cfg.random_bodies {
            scenario.add_body(BodySpec::default())?;
        }

        info!(
            "scenario ready: {} bodies, G = {}, collisions {}, e = {}",
            scenario.body_count(),
            scenario.parameters.G,
            if scenario.parameters.collision_enabled { "on" } else { "off" },
            scenario.parameters.restitution,
        );
        Ok(scenario)
    }

    /// Add a body. Unspecified fields are drawn from the `RANDOM_*` ranges
    /// - fails with `InvalidBody` for a non-positive mass or radius
    pub fn add_body(&mut self, spec: BodySpec) -> Result<BodyId> {
        let x = spec.x.unwrap_or_else(|| random_vec(&mut self.rng, RANDOM_POSITION));
        let v = spec.v.unwrap_or_else(|| random_vec(&mut self.rng, RANDOM_VELOCITY));
        let m = spec.m.unwrap_or_else(|| self.rng.random_range(RANDOM_MASS));
        let radius = spec.radius.unwrap_or_else(|| self.rng.random_range(RANDOM_RADIUS));
        let color = spec.color.unwrap_or_else(|| Color(self.rng.random_range(0..=0xff_ffff)));

        self.store.add(x, v, m, radius, color)
    }

    /// Returns the removed body, `None` if it was already gone
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.store.remove(id)
    }

    pub fn remove_all_bodies(&mut self) {
        self.store.clear();
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.parameters.set_paused(paused);
    }

    #[allow(non_snake_case)]
    pub fn set_gravitational_constant(&mut self, G: f64) -> Result<()> {
        self.parameters.set_gravitational_constant(G)
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.parameters.set_collision_enabled(enabled);
    }

    pub fn set_restitution(&mut self, e: f64) -> Result<()> {
        self.parameters.set_restitution(e)
    }

    /// Advance by one step of `dt` unless paused
    /// - returns whether a step ran
    pub fn tick(&mut self, dt: f64) -> Result<bool> {
        if !(dt >= 0.0 && dt.is_finite()) {
            return Err(SimError::InvalidTimeStep(dt));
        }
        if self.parameters.paused {
            trace!("paused, tick skipped");
            return Ok(false);
        }

        let current = self.store.snapshot();
        let next = self.stepper.step(&current, dt, &self.parameters);
        self.store.replace(next);
        Ok(true)
    }

    /// Run the configured number of ticks at the configured time step
    /// - returns how many steps actually ran
    pub fn run(&mut self) -> Result<u64> {
        let mut ran = 0;
        for _ in 0..self.engine.ticks {
            if self.tick(self.engine.dt)? {
                ran += 1;
            }
        }
        Ok(ran)
    }

    /// Render-facing view of every body, in store order
    pub fn snapshot(&self) -> Vec<BodyView> {
        self.store.snapshot().iter().map(BodyView::from).collect()
    }

    /// Full body state, shared with the store until the next commit
    pub fn bodies(&self) -> Arc<Vec<Body>> {
        self.store.snapshot()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.store.get(id)
    }

    pub fn body_count(&self) -> usize {
        self.store.len()
    }

    /// Non-paused steps taken so far
    pub fn ticks(&self) -> u64 {
        self.stepper.ticks()
    }

    pub fn total_momentum(&self) -> NVec3 {
        self.store.snapshot().iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.store.snapshot().iter().map(Body::kinetic_energy).sum()
    }
}

fn random_vec(rng: &mut StdRng, range: Range<f64>) -> NVec3 {
    NVec3::new(
        rng.random_range(range.clone()),
        rng.random_range(range.clone()),
        rng.random_range(range),
    )
}
