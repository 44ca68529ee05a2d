// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.1
//
// This file is the module declaration for the core functionality of
// hashmeter, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod hashes;
pub mod types;

// Re-export the most commonly used items
pub use hashes::{hash_until_deadline, BENCH_INPUT_PREFIX};
pub use types::{Args, BenchmarkConfig, BenchmarkResult, HashAlgorithm};

// Changelog:
// - v1.0.1 (2025-07-26): Re-exported the hot loop entry point.
//   - hash_until_deadline and the input prefix are available at core::.
// - v1.0.0 (2025-07-20): Initial version.
//   - Declares hashes and types submodules.
