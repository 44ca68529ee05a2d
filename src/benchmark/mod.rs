// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.0.1
//
// This file declares the benchmark module of hashmeter. It provides the
// execution engine for timed hash throughput runs plus convenience wrappers
// that take algorithm names straight from user input.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: worker, progress, runner, suite

pub mod progress;
pub mod runner;
pub mod suite;
pub mod worker;

// Re-export key benchmark types
pub use progress::ProgressReporter;
pub use runner::BenchmarkRunner;
pub use suite::BenchmarkSuite;

use std::time::Duration;

use crate::Result;
use crate::core::types::{BenchmarkConfig, BenchmarkResult, HashAlgorithm};

/// Benchmark one algorithm by name.
///
/// Headless wrapper: no progress bar is shown. Callers that want one build a
/// [`BenchmarkRunner`] with an explicit configuration instead.
pub fn run_benchmark(
    algorithm: &str,
    duration_secs: u64,
    worker_count: usize,
) -> Result<BenchmarkResult> {
    let algorithm = HashAlgorithm::parse(algorithm)?;
    let config = BenchmarkConfig::new(algorithm, Duration::from_secs(duration_secs), worker_count)?;
    BenchmarkRunner::new(config)?.run()
}

/// Benchmark a list of algorithms by name, sequentially and in input order.
///
/// Names are parsed upfront, so an unknown name fails before the first run
/// starts rather than mid-sweep.
pub fn run_all_benchmarks(
    algorithms: &[&str],
    duration_secs: u64,
    worker_count: usize,
) -> Result<Vec<BenchmarkResult>> {
    let algorithms = algorithms
        .iter()
        .map(|name| HashAlgorithm::parse(name))
        .collect::<Result<Vec<_>>>()?;
    BenchmarkSuite::new(algorithms, Duration::from_secs(duration_secs), worker_count)?.run()
}

// Changelog:
// - v1.0.1 (2025-07-28): Added the suite and name-based wrappers.
//   - run_benchmark and run_all_benchmarks parse names and validate before
//     any worker spawns.
// - v1.0.0 (2025-07-20): Initial benchmark module creation.
//   - Purpose: Provides the timed throughput engine, split into worker,
//     progress, and runner submodules with re-exports for easy access.
