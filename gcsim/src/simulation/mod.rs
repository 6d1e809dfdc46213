pub mod states;
pub mod error;
pub mod params;
pub mod engine;
pub mod store;
pub mod forces;
pub mod integrator;
pub mod scenario;
