// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/export.rs
// Version: 1.0.0
//
// This file writes benchmark result records to disk as JSON, located in the
// utils subdirectory. Export runs after all benchmarks finish, so a failed
// write never costs measured results; the error carries the target path.

use std::fs;
use std::path::Path;

use log::info;

use crate::Result;
use crate::core::types::BenchmarkResult;
use crate::error::BenchError;

const LOG_TARGET: &str = "hashmeter::export";

/// Write a result set to `path` as pretty-printed JSON
pub fn write_results_json(path: &Path, results: &[BenchmarkResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json).map_err(|source| BenchError::ExportIo {
        path: path.to_path_buf(),
        source,
    })?;
    info!(target: LOG_TARGET,
        "💾 Wrote {} result(s) to {}",
        results.len(),
        path.display()
    );
    Ok(())
}

// Changelog:
// - v1.0.0 (2025-08-04): Initial version.
//   - Pretty-printed JSON array of result records written via fs::write,
//     with the target path attached to I/O failures.
