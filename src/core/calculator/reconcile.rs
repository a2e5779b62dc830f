//! Day-boundary reconciliation: make a day's sleep state defined at
//! 00:00:00 and 23:59:59.
//!
//! The inference is a heuristic. A day whose first marker is `Woke Up` is
//! assumed to have started asleep, one whose first marker is `Slept` is
//! assumed to have started awake; symmetrically for the end of the day.
//! Interior pairing anomalies are left as they are.

use crate::models::event::{Event, sort_chronological};
use crate::utils::time::at_hms;
use chrono::{NaiveDate, NaiveTime};
use log::debug;

/// Slice of `all` for `date`, with boundary markers filled in.
pub fn reconcile_day(all: &[Event], date: NaiveDate) -> Vec<Event> {
    let day: Vec<Event> = all.iter().filter(|e| e.date == date).cloned().collect();
    fill_day_boundaries(day)
}

/// Fill the two ends of one day's events. Every event is expected to share
/// the same `date`.
pub fn fill_day_boundaries(mut day: Vec<Event>) -> Vec<Event> {
    sort_chronological(&mut day);

    let first = day.iter().find(|e| e.action.is_sleep_marker()).cloned();
    let last = day.iter().rev().find(|e| e.action.is_sleep_marker()).cloned();

    let (Some(first), Some(last)) = (first, last) else {
        return day;
    };

    let midnight = NaiveTime::MIN;
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);

    // ---- head ----
    if first.time != midnight
        && let Some(action) = first.action.opposite()
        && let Some(dt) = at_hms(&first.datetime.timezone(), first.date, 0, 0, 0)
    {
        debug!("{}: prepending {} at 00:00:00", first.date, action);
        day.insert(0, first.mirrored(dt, action));
    }

    // ---- tail ----
    if last.time != end_of_day
        && let Some(action) = last.action.opposite()
        && let Some(dt) = at_hms(&last.datetime.timezone(), last.date, 23, 59, 59)
    {
        debug!("{}: appending {} at 23:59:59", last.date, action);
        day.push(last.mirrored(dt, action));
    }

    day
}

/// Dates present in `all`, newest first.
pub fn dates_present(all: &[Event]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = all.iter().map(|e| e.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();
    dates
}
