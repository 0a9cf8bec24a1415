//! Benchmark CLI for the sparse Game of Life engine.
//!
//! Loads a Life 1.06 pattern, advances it a fixed number of
//! generations, and reports populations and wall-clock time.
//!
//! # Run Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Parse and validate command-line arguments
//! 3. Check that the pattern file exists
//! 4. Read the pattern and seed the colony
//! 5. Run the timed tick loop
//! 6. Report populations (stdout) and timing (log)
//!
//! Any failure terminates the process with a diagnostic and a non-zero
//! exit status; there is no retry logic.

mod error;
mod runner;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use petri_core::{Colony, read_life_106};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::BenchError;

/// Command-line arguments for the benchmark.
#[derive(Debug, Parser)]
#[command(
    name = "petri-bench",
    about = "Benchmark the sparse Game of Life engine over a fixed number of ticks",
    version
)]
struct Args {
    /// Path to a Life 1.06 pattern file.
    #[arg(value_name = "PATTERN")]
    pattern: PathBuf,

    /// Number of generations to simulate (must be positive).
    #[arg(value_name = "TICKS", value_parser = clap::value_parser!(u64).range(1..))]
    ticks: u64,
}

/// Application entry point for the benchmark.
///
/// # Errors
///
/// Returns an error if the pattern file is missing or malformed; clap
/// itself rejects a wrong argument count or a non-positive tick count.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    if !args.pattern.is_file() {
        return Err(BenchError::MissingPattern { path: args.pattern }.into());
    }

    let cells = read_life_106(&args.pattern)
        .map_err(BenchError::from)
        .with_context(|| format!("failed to load pattern '{}'", args.pattern.display()))?;
    info!(path = %args.pattern.display(), listed = cells.len(), "pattern loaded");

    let mut colony = Colony::with_capacity(cells.len());
    let seeded = colony.seed(&cells);
    if seeded != cells.len() {
        warn!(
            listed = cells.len(),
            seeded, "pattern listed duplicate cells"
        );
    }

    let start = colony.population();
    println!("cell count at start = {start}");

    info!(ticks = args.ticks, "benchmark starting");
    let report = runner::run(&mut colony, args.ticks);

    let end = report.end_population;
    println!("cell count at end = {end}");
    info!(
        ticks = report.ticks,
        elapsed = ?report.elapsed,
        "benchmark finished"
    );

    Ok(())
}
