// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.1
//
// This file provides utility functions for formatting benchmark statistics,
// located in the utils subdirectory. It formats hashrate, duration, and
// numbers for consistent output in logs and displays.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting benchmark statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format hashrate in the largest unit that keeps the mantissa below
    /// 1000 (H/s, kH/s, MH/s, GH/s, TH/s, PH/s). The scale tops out at
    /// PH/s; anything larger still renders in PH/s.
    pub fn format_hashrate(hashrate: f64) -> String {
        if hashrate >= 1_000_000_000_000_000.0 {
            format!("{:.2} PH/s", hashrate / 1_000_000_000_000_000.0)
        } else if hashrate >= 1_000_000_000_000.0 {
            format!("{:.2} TH/s", hashrate / 1_000_000_000_000.0)
        } else if hashrate >= 1_000_000_000.0 {
            format!("{:.2} GH/s", hashrate / 1_000_000_000.0)
        } else if hashrate >= 1_000_000.0 {
            format!("{:.2} MH/s", hashrate / 1_000_000.0)
        } else if hashrate >= 1_000.0 {
            format!("{:.2} kH/s", hashrate / 1_000.0)
        } else {
            format!("{:.2} H/s", hashrate)
        }
    }

    /// Format duration for human-readable output (seconds, minutes, hours)
    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs < 60 {
            format!("{:.2}s", duration.as_secs_f64())
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        }
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashrate_picks_the_right_unit() {
        assert_eq!(FormatUtils::format_hashrate(0.0), "0.00 H/s");
        assert_eq!(FormatUtils::format_hashrate(999.0), "999.00 H/s");
        assert_eq!(FormatUtils::format_hashrate(1_000.0), "1.00 kH/s");
        assert_eq!(FormatUtils::format_hashrate(1_500_000.0), "1.50 MH/s");
        assert_eq!(FormatUtils::format_hashrate(2_000_000_000.0), "2.00 GH/s");
        assert_eq!(FormatUtils::format_hashrate(3_500_000_000_000.0), "3.50 TH/s");
    }

    #[test]
    fn hashrate_scale_tops_out_at_petahash() {
        assert_eq!(
            FormatUtils::format_hashrate(1_000_000_000_000_000.0),
            "1.00 PH/s"
        );
        // Beyond the largest unit the mantissa just grows
        assert_eq!(
            FormatUtils::format_hashrate(2_500_000_000_000_000_000.0),
            "2500.00 PH/s"
        );
    }

    #[test]
    fn duration_uses_compound_units() {
        assert_eq!(FormatUtils::format_duration(Duration::from_secs_f64(10.25)), "10.25s");
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(3660)), "1h 1m");
    }

    #[test]
    fn number_suffixes() {
        assert_eq!(FormatUtils::format_number(999), "999");
        assert_eq!(FormatUtils::format_number(1_500), "1.5K");
        assert_eq!(FormatUtils::format_number(2_500_000), "2.5M");
        assert_eq!(FormatUtils::format_number(3_000_000_000), "3.0B");
    }
}

// Changelog:
// - v1.0.1 (2025-07-26): Extended the hashrate scale.
//   - Added TH/s and PH/s units with the scale capped at PH/s.
//   - Switched the kilo prefix to SI lowercase (kH/s).
//   - format_duration now reports fractional seconds for short runs.
// - v1.0.0 (2025-07-20): Extracted from monolithic main.rs.
//   - Purpose: Provides utility functions for formatting benchmark
//     statistics, ensuring consistent and human-readable output.
//   - Features: Hashrate units, duration formatting, and K/M/B suffixes.
