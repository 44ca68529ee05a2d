// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/progress.rs
// Version: 1.0.2
//
// This file implements the live progress reporter, located in the benchmark
// subdirectory. A dedicated thread redraws an elapsed/total bar on stderr at
// a fixed cadence until the runner signals it to stop.
//
// Tree Location:
// - src/benchmark/progress.rs (progress reporter thread)
// - Depends on: log

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::debug;

const LOG_TARGET: &str = "hashmeter::progress";

/// Width of the rendered bar in characters
const BAR_WIDTH: usize = 30;

/// Renders a live progress bar on its own thread.
///
/// The reporter is purely cosmetic. It never touches the benchmark clock and
/// the measured results are identical with it disabled; it writes to stderr
/// so exported or piped stdout stays clean.
pub struct ProgressReporter {
    should_stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    // Workers only publish counts at the deadline, so a mid-run read would
    // undercount badly. Held for a future per-interval live rate display.
    #[allow(dead_code)]
    total_hashes: Arc<AtomicU64>,
}

impl ProgressReporter {
    /// Spawn the reporter thread.
    ///
    /// Redraws every `interval` by overwriting its own stderr line until
    /// [`stop`](Self::stop) is called, then emits one final render followed
    /// by a newline so later output starts on a clean line.
    pub fn start(
        total: Duration,
        started: Instant,
        total_hashes: Arc<AtomicU64>,
        interval: Duration,
    ) -> Self {
        let should_stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&should_stop);

        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                eprint!("\r{}", render_progress(started.elapsed(), total));
                let _ = io::stderr().flush();
                thread::sleep(interval);
            }
            eprintln!("\r{}", render_progress(started.elapsed(), total));
            debug!(target: LOG_TARGET, "Progress reporter stopped");
        });

        Self {
            should_stop,
            handle: Some(handle),
            total_hashes,
        }
    }

    /// Signal the reporter to stop and wait for its final render.
    pub fn stop(mut self) {
        self.should_stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        // Safety net for early-return paths: the thread must not outlive
        // the run unsignaled
        self.should_stop.store(true, Ordering::Relaxed);
    }
}

/// Render the progress line for `elapsed` out of `total`.
///
/// The percentage is clamped to [0, 100], so overshoot past the window and
/// a degenerate zero-length window both render as a full bar.
pub fn render_progress(elapsed: Duration, total: Duration) -> String {
    let pct = if total.is_zero() {
        100.0
    } else {
        (elapsed.as_secs_f64() / total.as_secs_f64() * 100.0).clamp(0.0, 100.0)
    };
    let filled = (((pct / 100.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!(
        "[{}{}] {:>5.1}% ({:.1}s / {:.1}s)",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        pct,
        elapsed.as_secs_f64().min(total.as_secs_f64()),
        total.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_starts_empty() {
        let line = render_progress(Duration::ZERO, Duration::from_secs(10));
        assert!(line.starts_with("[------------------------------]"));
        assert!(line.contains("0.0%"));
        assert!(line.contains("(0.0s / 10.0s)"));
    }

    #[test]
    fn render_fills_at_completion() {
        let line = render_progress(Duration::from_secs(10), Duration::from_secs(10));
        assert!(line.starts_with("[##############################]"));
        assert!(line.contains("100.0%"));
    }

    #[test]
    fn render_clamps_overshoot() {
        let line = render_progress(Duration::from_secs(12), Duration::from_secs(10));
        assert!(line.contains("100.0%"), "overshoot must clamp: {line}");
        assert!(line.contains("(10.0s / 10.0s)"));
    }

    #[test]
    fn render_survives_zero_total() {
        let line = render_progress(Duration::from_secs(1), Duration::ZERO);
        assert!(line.contains("100.0%"));
    }

    #[test]
    fn render_midpoint_is_half_full() {
        let line = render_progress(Duration::from_secs(5), Duration::from_secs(10));
        assert!(line.contains("50.0%"));
        assert!(line.starts_with("[###############---------------]"));
    }

    #[test]
    fn reporter_stops_cleanly() {
        let started = Instant::now();
        let counter = Arc::new(AtomicU64::new(0));
        let reporter = ProgressReporter::start(
            Duration::from_secs(1),
            started,
            counter,
            Duration::from_millis(10),
        );
        thread::sleep(Duration::from_millis(40));
        reporter.stop();
    }
}

// Changelog:
// - v1.0.2 (2025-07-30): Final render on stop.
//   - stop() now joins the thread after it overwrites the line one last
//     time and terminates it with a newline.
// - v1.0.1 (2025-07-26): Moved output to stderr.
//   - Keeps stdout clean for piped and exported results.
// - v1.0.0 (2025-07-22): Initial version.
//   - Reporter thread with a pure render function for the bar line.
