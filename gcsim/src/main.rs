use gcsim::{ScenarioConfig, Scenario};
use gcsim::{bench_step, bench_scaling};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless point-mass gravity and collision simulator")]
struct Args {
    /// Scenario file; bare names are looked up in the crate's `scenarios/` directory
    #[arg(short, default_value = "two_body_collision.yaml")]
    file_name: String,

    /// Override the scenario's tick count
    #[arg(long)]
    ticks: Option<u64>,

    /// Override the scenario's time step
    #[arg(long)]
    dt: Option<f64>,

    /// Time the stepper instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// With --bench, print a CSV scaling curve
    #[arg(long, requires = "bench")]
    curve: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_scaling();
        } else {
            bench_step();
        }
        return Ok(());
    }

    let mut cfg = ScenarioConfig::from_path(&scenario_path(&args.file_name))?;
    if let Some(ticks) = args.ticks {
        cfg.engine.ticks = ticks;
    }
    if let Some(dt) = args.dt {
        cfg.engine.dt = dt;
    }

    let mut scenario = Scenario::build_scenario(&cfg).context("building scenario")?;

    let p0 = scenario.total_momentum();
    let e0 = scenario.kinetic_energy();

    let ran = scenario.run()?;
    info!("ran {ran} ticks of dt = {}", scenario.engine.dt);

    for b in scenario.bodies().iter() {
        info!(
            "body {}: x = [{:.4}, {:.4}, {:.4}], v = [{:.4}, {:.4}, {:.4}], trail = {}",
            b.id, b.x.x, b.x.y, b.x.z, b.v.x, b.v.y, b.v.z, b.trail.len()
        );
    }

    let p1 = scenario.total_momentum();
    let e1 = scenario.kinetic_energy();
    info!("momentum drift = {:.3e}, kinetic energy {e0:.4} -> {e1:.4}", (p1 - p0).norm());

    Ok(())
}
