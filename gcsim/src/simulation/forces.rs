//! Pairwise contributions for the stepper
//!
//! Every body is evaluated against every other body from its own side of
//! the pair (ordered pairs, O(n^2)). Two contributors exist:
//! - `NewtonianGravity3`: attraction toward the partner, suppressed when
//!   collisions are off and the two overlap deeply
//! - `ElasticCollision`:  impulse along the pair normal while overlapping
//!   and closing
//!
//! Both only read the input bodies, so a body's result depends on the
//! snapshot alone and never on the order partners are visited in

use log::debug;

use super::error::{Result, SimError};
use super::params::Parameters;
use super::states::{Body, NVec3};

/// Below this separation the pair normal is undefined
pub const MIN_SEPARATION: f64 = 1e-9;

/// With collisions off, gravity is skipped inside this fraction of the
/// contact distance
pub const PROXIMITY_CUTOFF: f64 = 0.6;

/// Geometry of the pair (i, j) as seen from body i
#[derive(Debug, Clone, Copy)]
pub struct PairGeometry {
    pub d: NVec3, // x_j - x_i
    pub dist: f64, // |d|
    pub n: NVec3, // d / dist, points from i toward j
    pub collision_dist: f64, // r_i + r_j
}

impl PairGeometry {
    pub fn between(bi: &Body, bj: &Body) -> Result<Self> {
        let d = bj.x - bi.x;
        let dist = d.norm();

        // also catches NaN positions
        if !(dist >= MIN_SEPARATION) {
            return Err(SimError::DegenerateSeparation {
                a: bi.id,
                b: bj.id,
                distance: dist,
            });
        }

        Ok(Self {
            d,
            dist,
            n: d / dist,
            collision_dist: bi.radius + bj.radius,
        })
    }

    pub fn overlapping(&self) -> bool {
        self.dist < self.collision_dist
    }
}

/// 3D Newtonian gravity, direct pair sum without softening
#[allow(non_snake_case)]
pub struct NewtonianGravity3 {
    pub G: f64,
    pub collision_enabled: bool,
}

impl NewtonianGravity3 {
    /// Acceleration on body i due to body j
    /// - zero if collisions are off and `dist < 0.6 * collision_dist`
    pub fn acceleration(&self, bj: &Body, pair: &PairGeometry) -> NVec3 {
        if !self.collision_enabled && pair.dist < PROXIMITY_CUTOFF * pair.collision_dist {
            return NVec3::zeros();
        }
        // a_i = G * m_j / |d|^2 along +n
        (self.G * bj.m / (pair.dist * pair.dist)) * pair.n
    }
}

/// Impulse response between two overlapping spheres
pub struct ElasticCollision {
    pub restitution: f64,
}

impl ElasticCollision {
    /// Velocity change of body i from its contact with body j
    /// - `None` if the pair is already separating (no impulse, no contact)
    ///
    /// The same formula evaluated from j's side gives `-(J/m_j) n`, so the
    /// two halves of the exchange always agree
    pub fn velocity_change(&self, bi: &Body, bj: &Body, pair: &PairGeometry) -> Option<NVec3> {
        let v_rel = bi.v - bj.v;
        let closing = v_rel.dot(&pair.n);
        if closing < 0.0 {
            return None;
        }

        let j = -(1.0 + self.restitution) * closing / (1.0 / bi.m + 1.0 / bj.m);
        Some((j / bi.m) * pair.n)
    }
}

/// Everything body i picked up from its partners this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contributions {
    pub impulse_dv: NVec3, // summed collision velocity changes
    pub accel: NVec3, // summed gravitational acceleration
    pub in_contact: bool, // took an impulse from a closing overlap
    pub skipped_pairs: usize, // degenerate pairings left out
}

impl Contributions {
    pub fn none() -> Self {
        Self {
            impulse_dv: NVec3::zeros(),
            accel: NVec3::zeros(),
            in_contact: false,
            skipped_pairs: 0,
        }
    }

    /// Velocity after this tick. Gravity is dropped for a body that took an impulse
    pub fn apply(&self, v: NVec3, dt: f64) -> NVec3 {
        if self.in_contact {
            v + self.impulse_dv
        } else {
            v + self.impulse_dv + self.accel * dt
        }
    }
}

/// Sum the contributions of every partner `j != i` on body `i`
pub fn evaluate_body(i: usize, bodies: &[Body], params: &Parameters) -> Contributions {
    let gravity = NewtonianGravity3 {
        G: params.G,
        collision_enabled: params.collision_enabled,
    };
    let collision = ElasticCollision {
        restitution: params.restitution,
    };

    let bi = &bodies[i];
    let mut out = Contributions::none();

    for (j, bj) in bodies.iter().enumerate() {
        if i == j {
            continue;
        }

        let pair = match PairGeometry::between(bi, bj) {
            Ok(pair) => pair,
            Err(e) => {
                debug!("skipping pairing this tick: {e}");
                out.skipped_pairs += 1;
                continue;
            }
        };

        let impulse = if params.collision_enabled && pair.overlapping() {
            collision.velocity_change(bi, bj, &pair)
        } else {
            None
        };

        // a separating overlap is treated like any other pair
        match impulse {
            Some(dv) => {
                out.in_contact = true;
                out.impulse_dv += dv;
            }
            None => out.accel += gravity.acceleration(bj, &pair),
        }
    }

    out
}
