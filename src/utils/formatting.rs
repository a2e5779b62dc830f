//! Formatting utilities used for CLI and export outputs.

use chrono::DateTime;
use chrono_tz::Tz;

/// Seconds → "Xh Ym" (minutes truncated), e.g. 27000 → "7h 30m".
/// Negative values are rendered with a leading "-".
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs_s = secs.abs();
    format!("{}{}h {}m", sign, abs_s / 3600, (abs_s % 3600) / 60)
}

/// Fractional hours → "Xh Ym", same truncation as `secs2readable`.
pub fn hours2readable(hours: f64) -> String {
    secs2readable((hours * 3600.0).round() as i64)
}

/// 12-hour clock, e.g. "09:05 PM".
pub fn clock12(dt: &DateTime<Tz>) -> String {
    dt.format("%I:%M %p").to_string()
}

/// Average of a bucket formatted as "2.50h", "N/A" when empty.
pub fn avg_hours_label(avg: Option<f64>) -> String {
    match avg {
        Some(h) => format!("{:.2}h", h),
        None => "N/A".to_string(),
    }
}
