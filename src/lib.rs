// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.2
//
// This file serves as the main library entry point for hashmeter, located
// at the root of the source tree. It exports all public modules and types
// that other crates or binaries can use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, benchmark, utils, help, error

pub mod benchmark;
pub mod core;
pub mod error;
pub mod help;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::progress::ProgressReporter;
pub use crate::benchmark::runner::BenchmarkRunner;
pub use crate::benchmark::suite::BenchmarkSuite;
pub use crate::benchmark::{run_all_benchmarks, run_benchmark};
pub use crate::core::types::{Args, BenchmarkConfig, BenchmarkResult, HashAlgorithm};
pub use crate::error::BenchError;

pub type Result<T> = std::result::Result<T, BenchError>;

// Changelog:
// - v1.0.2 (2025-08-04): Added error module support.
//   - Replaced the boxed-error Result alias with the BenchError enum so
//     callers can match configuration against resource failures.
// - v1.0.1 (2025-07-28): Added suite support.
//   - Re-exported BenchmarkSuite and the name-based wrappers for main.rs.
// - v1.0.0 (2025-07-20): Initial modular breakout from monolithic main.rs.
//   - Purpose: Establishes the library root, organizing the project into
//     core, benchmark, utils, and help modules.
//   - Features: Exports key types (e.g., BenchmarkRunner, HashAlgorithm)
//     for easy access and defines a common Result type.
