//! Error kinds raised by the simulation core

use thiserror::Error;

use super::states::BodyId;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Rejected at the store boundary, nothing is inserted
    #[error("invalid body: mass {mass} and radius {radius} must both be finite and > 0")]
    InvalidBody { mass: f64, radius: f64 },

    /// Two bodies sit on top of each other and the pair normal is undefined.
    /// Recoverable: the stepper skips the pairing for the current tick
    #[error("degenerate separation between {a} and {b} (distance {distance:e})")]
    DegenerateSeparation { a: BodyId, b: BodyId, distance: f64 },

    #[error("parameter `{name}` = {value} is outside [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("time step must be finite and >= 0, got {0}")]
    InvalidTimeStep(f64),
}
