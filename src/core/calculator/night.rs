//! Overlap between a sleep span and the nightly window.

use crate::models::night_window::NightWindow;
use crate::utils::time::{at_hms, overlap_seconds};
use chrono::{DateTime, Duration, Timelike};
use chrono_tz::Tz;

/// Seconds of `[start, end]` falling inside any instance of the night window.
///
/// Window instances are built for every day from `start.date - 1` to
/// `end.date + 1`, so both windows straddling midnight and sleeps crossing
/// midnight are covered.
pub fn night_overlap_seconds(start: DateTime<Tz>, end: DateTime<Tz>, window: &NightWindow) -> i64 {
    if end <= start {
        return 0;
    }

    let tz = start.timezone();
    let first_day = start.date_naive() - Duration::days(1);
    let last_day = end.date_naive() + Duration::days(1);

    let mut total = 0;
    let mut cur = first_day;

    while cur <= last_day {
        let win_start = at_hms(&tz, cur, window.start_hour, 0, 0);
        let win_end = if window.wraps_midnight() {
            cur.succ_opt()
                .and_then(|next| at_hms(&tz, next, window.end_hour, 0, 0))
        } else {
            at_hms(&tz, cur, window.end_hour, 0, 0)
        };

        if let (Some(ws), Some(we)) = (win_start, win_end) {
            total += overlap_seconds(start, end, ws, we);
        }

        match cur.succ_opt() {
            Some(next) => cur = next,
            None => break,
        }
    }

    total
}

/// `overlap / duration`, 0 when the duration is 0, clamped to `[0, 1]`.
pub fn overlap_ratio(overlap_seconds: i64, duration_seconds: i64) -> f64 {
    if duration_seconds <= 0 {
        return 0.0;
    }
    (overlap_seconds as f64 / duration_seconds as f64).clamp(0.0, 1.0)
}

/// True when the local hour of `dt` lies inside the night window.
pub fn is_in_night_window(dt: &DateTime<Tz>, window: &NightWindow) -> bool {
    window.contains_hour(dt.hour())
}
