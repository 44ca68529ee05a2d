// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/suite.rs
// Version: 1.0.1
//
// This file implements the multi-algorithm sweep, located in the benchmark
// subdirectory. It validates every planned run upfront, then drives the
// runner strictly sequentially so runs never contend for CPU time.

use std::time::Duration;

use log::info;

use crate::Result;
use crate::benchmark::runner::BenchmarkRunner;
use crate::core::types::{BenchmarkConfig, BenchmarkResult, HashAlgorithm};

const LOG_TARGET: &str = "hashmeter::suite";

/// Runs a list of algorithms through the benchmark runner, one at a time
pub struct BenchmarkSuite {
    algorithms: Vec<HashAlgorithm>,
    duration: Duration,
    worker_count: usize,
    show_progress: bool,
}

impl BenchmarkSuite {
    /// Build a suite over `algorithms` in the given order.
    ///
    /// Every per-algorithm configuration is validated here, before any run
    /// starts. A sweep that would fail on its third entry fails now instead,
    /// so no partial work is wasted.
    pub fn new(
        algorithms: Vec<HashAlgorithm>,
        duration: Duration,
        worker_count: usize,
    ) -> Result<Self> {
        for &algorithm in &algorithms {
            BenchmarkConfig::new(algorithm, duration, worker_count)?;
        }
        Ok(Self {
            algorithms,
            duration,
            worker_count,
            show_progress: false,
        })
    }

    /// Enable or disable per-run progress bars for the whole sweep
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Benchmark every algorithm sequentially, in order.
    ///
    /// Fail-fast: the first failing run aborts the sweep with its error, and
    /// a partial result set is never returned as if it were complete.
    pub fn run(&self) -> Result<Vec<BenchmarkResult>> {
        info!(target: LOG_TARGET,
            "🚀 Sweeping {} algorithm(s): {}s each, {} worker(s)",
            self.algorithms.len(),
            self.duration.as_secs(),
            self.worker_count
        );

        let mut results = Vec::with_capacity(self.algorithms.len());
        for &algorithm in &self.algorithms {
            let mut config = BenchmarkConfig::new(algorithm, self.duration, self.worker_count)?;
            config.show_progress = self.show_progress;
            let runner = BenchmarkRunner::new(config)?;
            results.push(runner.run()?);
        }
        Ok(results)
    }
}

// Changelog:
// - v1.0.1 (2025-07-30): Upfront validation.
//   - new() validates every planned configuration before the first run.
// - v1.0.0 (2025-07-28): Initial version.
//   - Sequential sweep over the runner with fail-fast error propagation.
