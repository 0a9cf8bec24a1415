//! Benchmark loop: a fixed number of ticks under wall-clock measurement.
//!
//! The timing window covers only the generation transitions. Pattern
//! loading and reporting happen outside it, so the measurement reflects
//! engine cost alone. The measurement is advisory instrumentation, not
//! a correctness constraint.

use std::time::{Duration, Instant};

use petri_core::Colony;
use tracing::debug;

/// Result of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    /// Number of generations executed.
    pub ticks: u64,
    /// Population before the first tick.
    pub start_population: usize,
    /// Population after the last tick.
    pub end_population: usize,
    /// Wall-clock time spent inside the tick loop.
    pub elapsed: Duration,
}

/// Advance `colony` by `ticks` generations and time the loop.
pub fn run(colony: &mut Colony, ticks: u64) -> BenchReport {
    let start_population = colony.population();
    let started = Instant::now();
    for tick in 1..=ticks {
        colony.advance();
        debug!(tick, population = colony.population(), "tick complete");
    }
    let elapsed = started.elapsed();
    BenchReport {
        ticks,
        start_population,
        end_population: colony.population(),
        elapsed,
    }
}
