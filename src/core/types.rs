// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.3
//
// This file defines core data structures for hashmeter, located in the core
// subdirectory. It includes the supported algorithm enum, command-line
// arguments, benchmark configuration, and the result record produced by a
// timed run.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde, num_cpus

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::BenchError;
use crate::utils::format::FormatUtils;

/// Longest benchmark window accepted (1 hour)
pub const MAX_DURATION_SECS: u64 = 3600;

/// Largest worker count accepted
pub const MAX_WORKERS: usize = 1024;

/// Hash algorithms the benchmark engine can execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Blake2b,
    Sha3_256,
}

impl HashAlgorithm {
    /// Every supported algorithm, in canonical sweep order
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Sha3_256,
    ];

    /// Canonical lowercase name, as accepted by [`parse`](Self::parse)
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Sha3_256 => "sha3_256",
        }
    }

    /// Parse a user-supplied algorithm name.
    ///
    /// Matching is case-insensitive and treats `-` and `_` as the same
    /// character, so `SHA3-256` and `sha3_256` both resolve. Display-only
    /// names (the `gpu_*` entries in `--list`) are rejected here like any
    /// other unknown name.
    pub fn parse(name: &str) -> crate::Result<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "blake2b" => Ok(HashAlgorithm::Blake2b),
            "sha3_256" => Ok(HashAlgorithm::Sha3_256),
            _ => Err(BenchError::UnsupportedAlgorithm(name.trim().to_string())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Command-line arguments for hashmeter
#[derive(Parser, Debug)]
#[command(
    name = "hashmeter",
    version,
    about = "Multi-algorithm CPU hash throughput benchmark",
    long_about = "hashmeter measures how many digests your CPU can compute per second over a\n\
                  fixed wall-clock window, using one or many worker threads.\n\n\
                  SINGLE RUN: benchmark one algorithm selected with --algo\n\
                  FULL SWEEP: benchmark every supported algorithm with --all\n\
                  EXPORT: write the machine-readable result set with --export\n\n\
                  Examples:\n\
                    Quick SHA-256 test: hashmeter --algo sha256 --duration 10\n\
                    Saturate all cores: hashmeter --algo blake2b --threads 0 --duration 30\n\
                    Full sweep with export: hashmeter --all --duration 5 --export results.json\n\n\
                  For the supported algorithm list, use: hashmeter --list"
)]
pub struct Args {
    /// Hash algorithm to benchmark
    /// Examples: md5, sha1, sha256, sha512, blake2b, sha3_256
    #[arg(
        short = 'a',
        long = "algo",
        value_name = "ALGO",
        default_value = "sha256",
        help = "Hash algorithm to benchmark (see --list)"
    )]
    pub algo: String,

    /// Benchmark every supported algorithm in sequence
    /// Runs one at a time so results never contend with each other
    #[arg(
        long,
        default_value = "false",
        help = "Benchmark all supported algorithms sequentially"
    )]
    pub all: bool,

    /// Benchmark window in seconds
    /// Recommended: 5s (quick test), 10s (standard), 60s (stable numbers)
    #[arg(
        short = 'd',
        long,
        default_value = "10",
        value_name = "SECONDS",
        help = "Benchmark duration in seconds [5s=quick, 10s=standard, 60s=stable]"
    )]
    pub duration: u64,

    /// Number of worker threads to hash with
    /// 0 = auto-detect (recommended), or specify exact count
    #[arg(
        short = 't',
        long,
        default_value = "0",
        value_name = "COUNT",
        help = "Number of worker threads (0 = auto-detect)"
    )]
    pub threads: usize,

    /// Disable the live progress bar
    /// Useful for scripts and logs; results are identical either way
    #[arg(long, default_value = "false", help = "Disable the live progress bar")]
    pub no_progress: bool,

    /// Write the result set as JSON to the given path
    #[arg(long, value_name = "PATH", help = "Write results as JSON to PATH")]
    pub export: Option<PathBuf>,

    /// List supported algorithms and exit
    #[arg(
        long,
        default_value = "false",
        help = "List supported algorithms and exit"
    )]
    pub list: bool,

    /// Print system information and exit
    #[arg(
        long,
        default_value = "false",
        help = "Print system information and exit"
    )]
    pub system_info: bool,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        // Informational modes need no benchmark parameters
        if self.list || self.system_info {
            return Ok(());
        }

        if !self.all {
            if let Err(err) = HashAlgorithm::parse(&self.algo) {
                return Err(format!("{}. Use --list to see supported algorithms", err));
            }
        }

        if self.duration == 0 {
            return Err("Benchmark duration must be greater than 0 seconds".to_string());
        }

        if self.duration > MAX_DURATION_SECS {
            return Err(format!(
                "Benchmark duration cannot exceed 1 hour ({} seconds)",
                MAX_DURATION_SECS
            ));
        }

        if self.threads > MAX_WORKERS {
            return Err(format!("Worker thread count cannot exceed {}", MAX_WORKERS));
        }

        Ok(())
    }

    /// Resolve the effective worker count (0 = auto-detect)
    pub fn worker_count(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}

/// Configuration for one timed benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Algorithm to measure
    pub algorithm: HashAlgorithm,

    /// Wall-clock window the workers hash for
    pub duration: Duration,

    /// Worker threads to spawn
    pub worker_count: usize,

    /// Render a live progress bar during the run
    pub show_progress: bool,

    /// Progress bar refresh cadence
    pub report_interval: Duration,
}

impl BenchmarkConfig {
    /// Build and validate a configuration with default presentation settings
    pub fn new(
        algorithm: HashAlgorithm,
        duration: Duration,
        worker_count: usize,
    ) -> crate::Result<Self> {
        let config = Self {
            algorithm,
            duration,
            worker_count,
            show_progress: false,
            report_interval: Duration::from_millis(150),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration without starting any work
    pub fn validate(&self) -> crate::Result<()> {
        if self.duration.is_zero() {
            return Err(BenchError::ZeroDuration);
        }
        if self.duration > Duration::from_secs(MAX_DURATION_SECS) {
            return Err(BenchError::DurationTooLong(MAX_DURATION_SECS));
        }
        if self.worker_count == 0 {
            return Err(BenchError::ZeroWorkers);
        }
        if self.worker_count > MAX_WORKERS {
            return Err(BenchError::TooManyWorkers(MAX_WORKERS));
        }
        Ok(())
    }
}

/// Outcome of a single timed benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Algorithm that was measured
    pub algorithm: HashAlgorithm,

    /// Wall-clock time the run actually took, measured independently of the
    /// configured window so deadline-check overshoot is accounted for
    #[serde(with = "duration_secs", rename = "duration_secs")]
    pub elapsed: Duration,

    /// Digests computed across all workers
    pub total_hashes: u64,

    /// Average hashes per second over the elapsed time
    pub hashrate: f64,

    /// Worker threads used
    pub worker_count: usize,
}

impl BenchmarkResult {
    /// Calculate hashrate from totals, guarding a degenerate elapsed time
    pub fn calculate_hashrate(total_hashes: u64, elapsed: Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            total_hashes as f64 / secs
        } else {
            0.0
        }
    }

    /// Format the average hashrate for display
    pub fn format_hashrate(&self) -> String {
        FormatUtils::format_hashrate(self.hashrate)
    }
}

/// Serialize `Duration` as fractional seconds in exported records
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}


// Changelog:
// - v1.0.3 (2025-08-04): Result records are now serializable.
//   - Added Serialize/Deserialize to BenchmarkResult with elapsed time
//     exported as fractional duration_secs.
//   - Added --export and --system-info arguments.
// - v1.0.2 (2025-07-28): Added the --all sweep flag and --list mode.
//   - Args::validate skips benchmark parameter checks for informational modes.
// - v1.0.0 (2025-07-20): Initial version.
//   - HashAlgorithm enum with case-insensitive parsing, Args with validation
//     caps (1 hour window, 1024 workers), BenchmarkConfig and BenchmarkResult.
