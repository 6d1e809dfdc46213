pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, BodySpec, BodyView, Color, Trail, NVec3, TRAIL_CAPACITY, TRAIL_SAMPLE_INTERVAL};
pub use simulation::error::{SimError, Result};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::store::BodyStore;
pub use simulation::forces::{PairGeometry, NewtonianGravity3, ElasticCollision, Contributions, evaluate_body};
pub use simulation::integrator::Stepper;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step, bench_scaling};
