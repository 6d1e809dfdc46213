//! Authoritative list of simulated bodies
//!
//! Bodies are kept in insertion order and addressed by `BodyId`. The list
//! lives behind an `Arc` so a snapshot handed to a reader stays valid (and
//! unchanged) after the stepper commits the next state with `replace`

use std::sync::Arc;

use log::debug;

use super::error::{Result, SimError};
use super::states::{Body, BodyId, Color, NVec3, Trail};

#[derive(Debug, Default)]
pub struct BodyStore {
    bodies: Arc<Vec<Body>>,
    next_id: u64,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a body with an empty trail
    /// - fails with `InvalidBody` if mass or radius is not strictly positive
    pub fn add(&mut self, x: NVec3, v: NVec3, m: f64, radius: f64, color: Color) -> Result<BodyId> {
        // written so NaN is rejected too
        if !(m > 0.0 && m.is_finite() && radius > 0.0 && radius.is_finite()) {
            return Err(SimError::InvalidBody { mass: m, radius });
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;

        Arc::make_mut(&mut self.bodies).push(Body {
            id,
            x,
            v,
            m,
            radius,
            color,
            trail: Trail::new(),
        });
        debug!("added body {id} (m = {m}, radius = {radius})");
        Ok(id)
    }

    /// Delete a body, returning it. Unknown ids are a no-op
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        debug!("removed body {id}");
        Some(Arc::make_mut(&mut self.bodies).remove(idx))
    }

    /// Empty the store (trails go with their bodies). Ids are not reused
    pub fn clear(&mut self) {
        debug!("cleared {} bodies", self.bodies.len());
        self.bodies = Arc::new(Vec::new());
    }

    /// Read-only view, shared with whoever else holds it
    pub fn snapshot(&self) -> Arc<Vec<Body>> {
        Arc::clone(&self.bodies)
    }

    /// Swap in the stepper's output in one assignment
    pub fn replace(&mut self, next: Vec<Body>) {
        debug_assert!(
            next.iter().map(|b| b.id).eq(self.bodies.iter().map(|b| b.id)),
            "replace must preserve body identity and order"
        );
        self.bodies = Arc::new(next);
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
