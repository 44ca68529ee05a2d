// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/export_test.rs
// Version: 1.0.0
//
// This file contains tests for the JSON result export, located in the tests
// directory. It checks the written field names and values against what the
// engine records, and that write failures carry the target path.
//
// Tree Location:
// - tests/export_test.rs (export tests)
// - Depends on: hashmeter, tempfile, serde_json

use std::path::Path;
use std::time::Duration;

use hashmeter::BenchError;
use hashmeter::core::types::{BenchmarkResult, HashAlgorithm};
use hashmeter::utils::export::write_results_json;

#[test]
fn export_writes_parseable_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("results.json");

    let results = vec![
        BenchmarkResult {
            algorithm: HashAlgorithm::Sha256,
            elapsed: Duration::from_secs_f64(1.5),
            total_hashes: 1_500_000,
            hashrate: 1_000_000.0,
            worker_count: 4,
        },
        BenchmarkResult {
            algorithm: HashAlgorithm::Sha3_256,
            elapsed: Duration::from_secs(2),
            total_hashes: 42,
            hashrate: 21.0,
            worker_count: 1,
        },
    ];
    write_results_json(&path, &results).expect("export should succeed");

    let raw = std::fs::read_to_string(&path).expect("file exists");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let records = parsed.as_array().expect("top level is an array");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["algorithm"], "sha256");
    assert_eq!(records[0]["total_hashes"], 1_500_000);
    assert_eq!(records[0]["worker_count"], 4);
    let secs = records[0]["duration_secs"].as_f64().expect("numeric duration");
    assert!((secs - 1.5).abs() < 1e-9);

    assert_eq!(records[1]["algorithm"], "sha3_256");
    assert_eq!(records[1]["hashrate"], 21.0);
}

#[test]
fn exported_records_round_trip_through_the_result_type() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("results.json");

    let results = vec![BenchmarkResult {
        algorithm: HashAlgorithm::Blake2b,
        elapsed: Duration::from_secs_f64(0.75),
        total_hashes: 9_000,
        hashrate: 12_000.0,
        worker_count: 8,
    }];
    write_results_json(&path, &results).expect("export should succeed");

    let raw = std::fs::read_to_string(&path).expect("file exists");
    let parsed: Vec<BenchmarkResult> = serde_json::from_str(&raw).expect("records deserialize");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].algorithm, HashAlgorithm::Blake2b);
    assert_eq!(parsed[0].total_hashes, 9_000);
    assert_eq!(parsed[0].worker_count, 8);
    assert!((parsed[0].elapsed.as_secs_f64() - 0.75).abs() < 1e-9);
}

#[test]
fn export_to_a_missing_directory_reports_the_path() {
    let path = Path::new("/nonexistent-hashmeter-dir/out.json");
    let err = write_results_json(path, &[]).unwrap_err();
    match err {
        BenchError::ExportIo { path: reported, .. } => {
            assert_eq!(reported, path.to_path_buf());
        }
        other => panic!("expected ExportIo, got {other:?}"),
    }
}

// Changelog:
// - v1.0.0 (2025-08-04): Initial export tests.
//   - Purpose: Verifies field names (algorithm, duration_secs, total_hashes,
//     hashrate, worker_count), typed round-trips, and path-carrying errors.
