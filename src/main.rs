// HashMeter - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.0.3
//
// CLI entry point: argument handling, presentation, and wiring around the
// benchmark engine in the library crate.

use std::process;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use hashmeter::Result;
use hashmeter::benchmark::runner::BenchmarkRunner;
use hashmeter::benchmark::suite::BenchmarkSuite;
use hashmeter::core::types::{Args, BenchmarkConfig, BenchmarkResult, HashAlgorithm};
use hashmeter::help;
use hashmeter::utils::analogy::distance_analogy;
use hashmeter::utils::export::write_results_json;
use hashmeter::utils::format::FormatUtils;
use hashmeter::utils::system;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        eprintln!("💡 Use --list to see supported algorithms and examples");
        process::exit(1);
    }

    // Informational modes exit before any benchmark setup
    if args.list {
        help::display_algorithm_list();
        return;
    }
    if args.system_info {
        system::display_system_info();
        return;
    }

    if let Err(err) = run_cli(&args) {
        eprintln!("❌ Error: {}", err);
        process::exit(1);
    }
}

fn run_cli(args: &Args) -> Result<()> {
    help::display_banner();

    let worker_count = args.worker_count();
    info!("💻 CPU: {}", system::cpu_summary());
    info!(
        "🧵 Workers: {}",
        if args.threads == 0 {
            format!("{} (auto)", worker_count)
        } else {
            worker_count.to_string()
        }
    );
    info!("⏱️ Duration: {}s per algorithm", args.duration);

    let results = if args.all {
        let suite = BenchmarkSuite::new(
            HashAlgorithm::ALL.to_vec(),
            Duration::from_secs(args.duration),
            worker_count,
        )?
        .with_progress(!args.no_progress);
        let results = suite.run()?;
        print_summary_table(&results);
        results
    } else {
        let algorithm = HashAlgorithm::parse(&args.algo)?;
        let mut config =
            BenchmarkConfig::new(algorithm, Duration::from_secs(args.duration), worker_count)?;
        config.show_progress = !args.no_progress;
        let result = BenchmarkRunner::new(config)?.run()?;
        print_result(&result);
        vec![result]
    };

    let total_hashes: u64 = results.iter().map(|result| result.total_hashes).sum();
    print!("{}", distance_analogy(total_hashes));

    if let Some(path) = &args.export {
        write_results_json(path, &results)?;
    }

    Ok(())
}

fn print_result(result: &BenchmarkResult) {
    info!("📊 Benchmark Complete!");
    info!("🧪 Algorithm: {}", result.algorithm);
    info!("⏱️ Elapsed: {:.2}s", result.elapsed.as_secs_f64());
    info!(
        "📈 Total hashes: {}",
        FormatUtils::format_number(result.total_hashes)
    );
    info!("⚡ Average hashrate: {}", result.format_hashrate());
    info!("🧵 Workers used: {}", result.worker_count);
}

fn print_summary_table(results: &[BenchmarkResult]) {
    println!();
    println!("📊 SWEEP RESULTS:");
    println!("  Algorithm  | Total Hashes | Elapsed  | Hashrate");
    println!("  -----------|--------------|----------|--------------");
    for result in results {
        println!(
            "  {:<10} | {:>12} | {:>8} | {:>12}",
            result.algorithm.name(),
            FormatUtils::format_number(result.total_hashes),
            FormatUtils::format_duration(result.elapsed),
            result.format_hashrate()
        );
    }
    println!();
}

// Changelog:
// - v1.0.3 (2025-08-04): Added --export and --system-info handling.
// - v1.0.2 (2025-07-28): Added the --all sweep with its summary table.
// - v1.0.0 (2025-07-20): Initial version.
//   - Parse, validate, run, present; errors exit with status 1.
