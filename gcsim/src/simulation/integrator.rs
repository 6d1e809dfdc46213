//! Fixed-step integrator for the gravity/collision system
//!
//! `Stepper::step` advances a snapshot of bodies by `dt` with
//! semi-implicit Euler:
//! - every body sums its gravity and impulse contributions from the
//!   immutable input (see `forces::evaluate_body`),
//! - v_n+1 = v_n + impulses + a_n * dt  (gravity dropped while in contact)
//! - x_n+1 = x_n + v_n+1 * dt
//!
//! Results go to a separate output buffer, so multiple contacts on one body
//! accumulate and the outcome does not depend on iteration order. That also
//! makes the rayon path produce exactly the sequential result

use log::trace;
use rayon::prelude::*;

use super::forces::{evaluate_body, Contributions};
use super::params::Parameters;
use super::states::{Body, TRAIL_SAMPLE_INTERVAL};

#[derive(Debug, Clone, Default)]
pub struct Stepper {
    tick: u64, // non-paused steps taken, drives trail sampling
    parallel: bool,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spread the pairwise pass over the rayon pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Compute the next state of `bodies`
    /// - paused: returns the input unchanged and does not count a tick
    /// - every `TRAIL_SAMPLE_INTERVAL`th tick the new positions are
    ///   appended to the trails
    pub fn step(&mut self, bodies: &[Body], dt: f64, params: &Parameters) -> Vec<Body> {
        if params.paused {
            return bodies.to_vec();
        }

        self.tick += 1;
        let sample_trail = self.tick % TRAIL_SAMPLE_INTERVAL == 0;

        let next: Vec<Body> = if self.parallel {
            (0..bodies.len())
                .into_par_iter()
                .map(|i| advance_body(i, bodies, dt, params, sample_trail))
                .collect()
        } else {
            (0..bodies.len())
                .map(|i| advance_body(i, bodies, dt, params, sample_trail))
                .collect()
        };

        trace!(
            "tick {} (dt = {dt}, {} bodies{})",
            self.tick,
            next.len(),
            if sample_trail { ", trail sampled" } else { "" }
        );
        next
    }
}

fn advance_body(i: usize, bodies: &[Body], dt: f64, params: &Parameters, sample_trail: bool) -> Body {
    let c: Contributions = evaluate_body(i, bodies, params);

    let mut b = bodies[i].clone();

    // Kick, then drift with the updated velocity
    b.v = c.apply(b.v, dt);
    b.x += b.v * dt;

    if sample_trail {
        b.trail.push(b.x);
    }
    b
}
