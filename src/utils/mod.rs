// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/mod.rs
// Version: 1.0.2
//
// This file is the module declaration for utility functions in hashmeter,
// located in the utils subdirectory. It declares submodules for shared
// utility logic used across the project.
//
// Tree Location:
// - src/utils/mod.rs (utils module entry point)
// - Submodules: format, system, analogy, export

pub mod analogy;
pub mod export;
pub mod format;
pub mod system;

// Changelog:
// - v1.0.2 (2025-08-04): Added export submodule for JSON result files.
// - v1.0.1 (2025-07-28): Added system and analogy submodules.
// - v1.0.0 (2025-07-20): Extracted from monolithic main.rs.
//   - Purpose: Defines the utils module, organizing shared utility functions
//     into submodules for use throughout the benchmark.
