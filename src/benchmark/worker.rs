// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/worker.rs
// Version: 1.0.1
//
// This file implements the body of one benchmark worker thread, located in
// the benchmark subdirectory. Workers hash independently against a shared
// absolute deadline and publish their counts through a single shared counter.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use log::debug;

use crate::core::hashes::hash_until_deadline;
use crate::core::types::HashAlgorithm;

const LOG_TARGET: &str = "hashmeter::worker";

/// Run one worker to completion.
///
/// The digest count is accumulated in a thread-local variable and committed
/// to `total_hashes` with exactly one atomic add after the deadline passes.
/// Workers never read or write the shared counter mid-run, so there is no
/// cross-thread contention on the hot path.
pub fn worker_loop(
    worker_id: usize,
    algorithm: HashAlgorithm,
    deadline: Instant,
    total_hashes: Arc<AtomicU64>,
) {
    let local_count = hash_until_deadline(algorithm, deadline);
    total_hashes.fetch_add(local_count, Ordering::Relaxed);
    debug!(target: LOG_TARGET,
        "Worker {}: committed {} {} hashes",
        worker_id, local_count, algorithm
    );
}

// Changelog:
// - v1.0.1 (2025-07-26): Worker commits exactly once.
//   - Dropped the periodic mid-run flush; the local count reaches the shared
//     counter in a single fetch_add at the deadline.
// - v1.0.0 (2025-07-20): Extracted from the runner.
//   - Thread body split out so the runner only coordinates.
