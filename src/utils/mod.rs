//! Utility module for directplay
//!
//! This module provides common utilities used throughout the crate:
//! - Error handling with custom error types
//! - Configuration management
//! - Formatting helpers for diagnostics

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{Config, GeneralConfig, PlaybackConfig, ProfileConfig};
pub use error::{DirectPlayError, Result};

/// Format a bitrate for display
///
/// # Arguments
///
/// * `bits_per_second` - Bitrate to format
///
/// # Returns
///
/// Formatted string such as "8 Mbps", "1.5 Mbps" or "720 kbps"
pub fn format_bitrate(bits_per_second: u64) -> String {
    if bits_per_second >= 1_000_000 {
        let mbps = bits_per_second as f64 / 1_000_000.0;
        if bits_per_second % 1_000_000 == 0 {
            format!("{} Mbps", bits_per_second / 1_000_000)
        } else {
            format!("{:.1} Mbps", mbps)
        }
    } else if bits_per_second >= 1_000 {
        format!("{} kbps", bits_per_second / 1_000)
    } else {
        format!("{} bps", bits_per_second)
    }
}

/// Format a duration for display
///
/// # Arguments
///
/// * `duration` - Duration to format
///
/// # Returns
///
/// Formatted string in the format "HH:MM:SS" or "MM:SS" for durations under an hour
pub fn format_duration(duration: std::time::Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
