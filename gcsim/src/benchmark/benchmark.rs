use std::time::Instant;

use log::info;

use crate::simulation::integrator::Stepper;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Color, NVec3};
use crate::simulation::store::BodyStore;

/// Helper to build `n` bodies on a deterministic spiral, no rand needed
fn make_bodies(n: usize) -> Vec<Body> {
    let mut store = BodyStore::new();

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 50.0,
            (i_f * 0.13).cos() * 50.0,
            (i_f * 0.07).sin() * 50.0,
        );
        store
            .add(x, NVec3::zeros(), 1.0, 0.05, Color::default())
            .expect("benchmark body rejected");
    }

    store.snapshot().to_vec()
}

fn make_params() -> Parameters {
    Parameters {
        G: 0.1,
        collision_enabled: true,
        restitution: 1.0,
        paused: false,
    }
}

/// Average wall time of one step, in seconds
fn time_steps(bodies: &[Body], parallel: bool, steps: usize) -> f64 {
    let params = make_params();
    let mut stepper = Stepper::new().parallel(parallel);
    let mut state = bodies.to_vec();

    // Warm up
    state = stepper.step(&state, 0.001, &params);

    let t0 = Instant::now();
    for _ in 0..steps {
        state = stepper.step(&state, 0.001, &params);
    }
    t0.elapsed().as_secs_f64() / steps as f64
}

/// Sequential vs. rayon step time for a few body counts
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800];
    let steps = 5;

    for n in ns {
        let bodies = make_bodies(n);

        let seq = time_steps(&bodies, false, steps);
        let par = time_steps(&bodies, true, steps);

        info!("N = {n:4}, sequential step = {seq:8.6} s, parallel step = {par:8.6} s");
    }
}

/// Step time for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_scaling() {
    println!("N,sequential_ms,parallel_ms");

    for n in (50..=800).step_by(50) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 200 { 20 } else { 3 };
        let bodies = make_bodies(n);

        let ms_seq = time_steps(&bodies, false, steps) * 1000.0;
        let ms_par = time_steps(&bodies, true, steps) * 1000.0;

        println!("{},{:.6},{:.6}", n, ms_seq, ms_par);
    }
}
