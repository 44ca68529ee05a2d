// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/error.rs
// Version: 1.0.1
//
// This file defines the error type shared across the benchmark engine. It is
// located in the src tree and distinguishes configuration mistakes (caught
// before any work starts) from resource failures hit while a run is underway.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the benchmark engine and its collaborators.
///
/// Configuration variants are raised during validation, before any worker
/// thread exists. Resource variants mean a run was attempted and could not
/// produce a trustworthy result.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Unknown or display-only algorithm name
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Benchmark window of zero length
    #[error("benchmark duration must be greater than zero")]
    ZeroDuration,

    /// Benchmark window past the sanity cap
    #[error("benchmark duration cannot exceed {0} seconds")]
    DurationTooLong(u64),

    /// Worker count of zero
    #[error("worker count must be greater than zero")]
    ZeroWorkers,

    /// Worker count past the sanity cap
    #[error("worker count cannot exceed {0}")]
    TooManyWorkers(usize),

    /// The OS refused to start a worker thread
    #[error("failed to spawn hash worker {worker}")]
    WorkerSpawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    /// One or more workers died before committing their counts
    #[error("{workers} hash worker(s) terminated abnormally; run discarded")]
    WorkerPanic { workers: usize },

    /// Result export could not write the target file
    #[error("failed to write results to {}", path.display())]
    ExportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result export could not encode the record set
    #[error("failed to encode results as JSON")]
    ExportEncode {
        #[from]
        source: serde_json::Error,
    },
}

impl BenchError {
    /// True for errors a user can fix by changing arguments
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BenchError::UnsupportedAlgorithm(_)
                | BenchError::ZeroDuration
                | BenchError::DurationTooLong(_)
                | BenchError::ZeroWorkers
                | BenchError::TooManyWorkers(_)
        )
    }
}

// Changelog:
// - v1.0.1 (2025-08-04): Added export error variants.
//   - ExportIo carries the target path, ExportEncode wraps serde_json errors.
// - v1.0.0 (2025-07-20): Initial version.
//   - Configuration and resource variants for the benchmark engine, with
//     is_configuration() to split the two classes at the CLI boundary.
