//! Time utilities: parsing HH:MM:SS, localizing wall-clock times in the
//! sheet timezone, day boundaries.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Longest DST gap we are willing to skip over when shifting forward.
const MAX_GAP_MINUTES: i64 = 180;

/// Accepts "HH:MM:SS" and, for hand-typed rows, "HH:MM".
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Localize a wall-clock time. Ambiguous times (DST fold) are rejected;
/// non-existent ones (DST gap) are shifted forward to the first valid minute.
pub fn localize_strict(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(_, _) => None,
        LocalResult::None => shift_forward(tz, naive),
    }
}

/// Like `localize_strict`, but an ambiguous time resolves to the earliest
/// instant. Used for synthesized boundaries and night windows.
pub fn localize(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => shift_forward(tz, naive),
    }
}

/// First valid instant after a gap. Transitions fall on whole minutes, so the
/// search runs on the minute grid and the result has zero seconds.
fn shift_forward(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    use chrono::Timelike;
    let minute = naive.date().and_hms_opt(naive.hour(), naive.minute(), 0)?;

    (1..=MAX_GAP_MINUTES).find_map(|m| {
        let candidate = minute + Duration::minutes(m);
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => Some(dt),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => None,
        }
    })
}

/// Localized instant of `date` at `h:m:s`.
pub fn at_hms(tz: &Tz, date: NaiveDate, h: u32, m: u32, s: u32) -> Option<DateTime<Tz>> {
    date.and_hms_opt(h, m, s).and_then(|n| localize(tz, n))
}

/// `[00:00 of date, 00:00 of the next day)`.
pub fn day_bounds(tz: &Tz, date: NaiveDate) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
    let start = at_hms(tz, date, 0, 0, 0)?;
    let end = at_hms(tz, date.succ_opt()?, 0, 0, 0)?;
    Some((start, end))
}

/// Seconds of `[a_start, a_end] ∩ [b_start, b_end]`, 0 when disjoint.
pub fn overlap_seconds(
    a_start: DateTime<Tz>,
    a_end: DateTime<Tz>,
    b_start: DateTime<Tz>,
    b_end: DateTime<Tz>,
) -> i64 {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    if end > start {
        (end - start).num_seconds()
    } else {
        0
    }
}

/// Fractional hour of the local wall clock, in `[0, 24)`.
pub fn hour_of_day(dt: &DateTime<Tz>) -> f64 {
    use chrono::Timelike;
    dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0
}
