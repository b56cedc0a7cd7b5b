//! Timing sweeps for the kinematics core.
//!
//! Closed-form sampling is cheap; these sweeps exist to show how cost
//! scales with sample count and to catch accidental regressions when the
//! engine changes. Output is a println table.

use std::hint::black_box;
use std::time::Instant;

use crate::configuration::config::default_solar_bodies;
use crate::error::SimResult;
use crate::simulation::binary::BinarySystem;
use crate::simulation::scenario::build_solar_system;

/// Time position and radial-velocity sampling for growing sample counts
pub fn bench_sampling() -> SimResult<()> {
    let ns = [1_000, 10_000, 100_000, 1_000_000];

    let system = BinarySystem::new(1.5, 1.0, 5.0, 365.0)?;

    for n in ns {
        // Deterministic time grid, a quarter-day apart
        let times: Vec<f64> = (0..n).map(|i| i as f64 * 0.25).collect();

        // Warm up
        black_box(system.sample_positions(&times));
        black_box(system.sample_radial_velocities(&times, 90.0));

        let t0 = Instant::now();
        black_box(system.sample_positions(&times));
        let dt_pos = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        black_box(system.sample_radial_velocities(&times, 90.0));
        let dt_rv = t1.elapsed().as_secs_f64();

        println!(
            "n = {n:8}, positions = {dt_pos:9.6} s, radial velocities = {dt_rv:9.6} s"
        );
    }

    Ok(())
}

/// Time long update loops over the default solar system
pub fn bench_update() {
    let step_counts = [10_000, 100_000, 1_000_000];

    for steps in step_counts {
        let bodies = default_solar_bodies();
        let mut system = build_solar_system(&bodies);

        // Warm up
        system.update(1.0);

        let t0 = Instant::now();
        for _ in 0..steps {
            system.update(1.0);
        }
        let elapsed = t0.elapsed().as_secs_f64();
        let per_step_ns = elapsed / steps as f64 * 1e9;

        black_box(&system);

        println!(
            "steps = {steps:8}, total = {elapsed:9.6} s, per update = {per_step_ns:8.1} ns"
        );
    }
}
