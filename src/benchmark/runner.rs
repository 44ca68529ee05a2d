// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.0.4
//
// This file implements the benchmark execution engine. It coordinates worker
// threads against a shared deadline, drives the optional progress reporter,
// and assembles the result record from the joined counts.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Instant;

use log::{debug, info, warn};

use crate::Result;
use crate::benchmark::progress::ProgressReporter;
use crate::benchmark::worker::worker_loop;
use crate::core::types::{BenchmarkConfig, BenchmarkResult};
use crate::error::BenchError;
use crate::utils::format::FormatUtils;

const LOG_TARGET: &str = "hashmeter::runner";

/// Executes one timed benchmark run for a single algorithm
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    /// Build a runner for a validated configuration
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this runner executes
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Execute the run and return its result record.
    ///
    /// All workers share one absolute deadline computed before the first
    /// spawn, so stragglers cannot stretch the window. Elapsed time is
    /// measured independently of the configured duration; with batched
    /// deadline checks the workers overshoot slightly, and the reported
    /// hashrate divides by what actually happened.
    pub fn run(&self) -> Result<BenchmarkResult> {
        info!(target: LOG_TARGET,
            "🧪 Starting {} benchmark: {} worker(s) over {:.1}s",
            self.config.algorithm,
            self.config.worker_count,
            self.config.duration.as_secs_f64()
        );

        // Fresh counter per run; repeated runs can never contaminate each other
        let total_hashes = Arc::new(AtomicU64::new(0));
        let started = Instant::now();
        let deadline = started + self.config.duration;

        let reporter = if self.config.show_progress {
            Some(ProgressReporter::start(
                self.config.duration,
                started,
                Arc::clone(&total_hashes),
                self.config.report_interval,
            ))
        } else {
            None
        };

        let mut handles = Vec::with_capacity(self.config.worker_count);
        for worker_id in 0..self.config.worker_count {
            let algorithm = self.config.algorithm;
            let counter = Arc::clone(&total_hashes);
            let spawned = thread::Builder::new()
                .name(format!("hash-worker-{}", worker_id))
                .spawn(move || worker_loop(worker_id, algorithm, deadline, counter));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    warn!(target: LOG_TARGET,
                        "Failed to spawn worker {}: {}", worker_id, source
                    );
                    // Workers already running stop at the deadline on their
                    // own; wait them out so nothing outlives this call
                    for handle in handles {
                        let _ = handle.join();
                    }
                    if let Some(reporter) = reporter {
                        reporter.stop();
                    }
                    return Err(BenchError::WorkerSpawn { worker: worker_id, source });
                }
            }
        }

        // Join barrier: the run has no result until every worker has exited
        let mut failed_workers = 0usize;
        for (worker_id, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                warn!(target: LOG_TARGET, "Worker {} terminated abnormally", worker_id);
                failed_workers += 1;
            } else {
                debug!(target: LOG_TARGET, "Worker {} joined", worker_id);
            }
        }

        let elapsed = started.elapsed();

        if let Some(reporter) = reporter {
            reporter.stop();
        }

        if failed_workers > 0 {
            // A dead worker's local count never reached the shared counter,
            // so the total undercounts and the run is discarded
            return Err(BenchError::WorkerPanic { workers: failed_workers });
        }

        let total = total_hashes.load(Ordering::Relaxed);
        let hashrate = BenchmarkResult::calculate_hashrate(total, elapsed);

        info!(target: LOG_TARGET,
            "✅ {}: {} hashes in {:.2}s ({})",
            self.config.algorithm,
            FormatUtils::format_number(total),
            elapsed.as_secs_f64(),
            FormatUtils::format_hashrate(hashrate)
        );

        Ok(BenchmarkResult {
            algorithm: self.config.algorithm,
            elapsed,
            total_hashes: total,
            hashrate,
            worker_count: self.config.worker_count,
        })
    }
}

// Changelog:
// - v1.0.4 (2025-07-30): Worker failures now fail the run.
//   - Panicked workers are counted at the join barrier and surface as
//     WorkerPanic instead of an undercounted result.
//   - Spawn failures join the already-running workers before erroring.
// - v1.0.2 (2025-07-26): Deadline-driven workers.
//   - Replaced the stop-flag polling loop with one absolute deadline shared
//     by all workers; the runner no longer sleeps the window itself.
// - v1.0.0 (2025-07-20): Extracted from monolithic main.rs.
//   - Thread spawn/join coordination, shared AtomicU64 hash counter,
//     elapsed-based average hashrate.
