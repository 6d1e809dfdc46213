//! High-level runtime engine settings
//!
//! Host-loop options used when running a `Scenario` headless: the fixed
//! time step fed to each tick, how many ticks to run, and whether the
//! pairwise pass is spread over the rayon pool

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub dt: f64, // time step handed to every tick
    pub ticks: u64, // number of ticks the host loop runs
    pub parallel: bool, // false = sequential, true = rayon
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            ticks: 600,
            parallel: false,
        }
    }
}
