//! Rolling per-day counts and sleep totals.

use crate::models::action::Action;
use crate::models::day_summary::DailySummary;
use crate::models::event::{Event, sort_chronological};
use crate::utils::date::last_n_days;
use crate::utils::time::{day_bounds, overlap_seconds};
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};

/// What to do with a `Slept` that has no later `Woke Up` anywhere in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenSleepPolicy {
    /// Close it at "now".
    #[default]
    Extend,
    /// Ignore it.
    Drop,
}

/// Global forward-scan pairing: every `Slept` takes the earliest `Woke Up`
/// strictly after it that no earlier `Slept` has consumed.
///
/// Returns `(start, Some(end))` for closed sleeps and `(start, None)` for
/// sleeps that never end in the log.
pub fn pair_sleep_global(events: &[Event]) -> Vec<(DateTime<Tz>, Option<DateTime<Tz>>)> {
    let mut sorted = events.to_vec();
    sort_chronological(&mut sorted);

    let wakes: Vec<DateTime<Tz>> = sorted
        .iter()
        .filter(|e| e.action.is_woke_up())
        .map(|e| e.datetime)
        .collect();
    let mut consumed = vec![false; wakes.len()];

    sorted
        .iter()
        .filter(|e| e.action.is_slept())
        .map(|s| {
            let idx = (0..wakes.len()).find(|&i| !consumed[i] && wakes[i] > s.datetime);

            match idx {
                Some(i) => {
                    consumed[i] = true;
                    (s.datetime, Some(wakes[i]))
                }
                None => (s.datetime, None),
            }
        })
        .collect()
}

/// Latest unmatched `Slept` with no `Woke Up` anywhere after it.
fn trailing_open_sleep(
    all: &[Event],
    pairs: &[(DateTime<Tz>, Option<DateTime<Tz>>)],
) -> Option<DateTime<Tz>> {
    let last_wake = all
        .iter()
        .filter(|e| e.action.is_woke_up())
        .map(|e| e.datetime)
        .max();

    pairs
        .iter()
        .filter(|(_, end)| end.is_none())
        .map(|(start, _)| *start)
        .filter(|start| last_wake.is_none_or(|w| w <= *start))
        .max()
}

/// Summary for `today` and the `days - 1` days before it, newest first.
pub fn rolling_summary(
    all: &[Event],
    today: NaiveDate,
    days: usize,
    now: DateTime<Tz>,
    policy: OpenSleepPolicy,
) -> Vec<DailySummary> {
    let tz = now.timezone();

    let pairs = pair_sleep_global(all);
    let trailing = trailing_open_sleep(all, &pairs);

    // only the trailing open sleep may run up to "now"; a Slept whose wake
    // was taken by an earlier Slept is dropped
    let sleeps: Vec<(DateTime<Tz>, DateTime<Tz>)> = pairs
        .into_iter()
        .filter_map(|(start, end)| match (end, policy) {
            (Some(end), _) => Some((start, end)),
            (None, OpenSleepPolicy::Extend) if Some(start) == trailing && now > start => {
                Some((start, now))
            }
            (None, _) => None,
        })
        .collect();

    debug!("summary over {} days, {} sleep spans", days, sleeps.len());

    last_n_days(today, days)
        .into_iter()
        .map(|date| summarize_day(all, &sleeps, &tz, date))
        .collect()
}

fn summarize_day(
    all: &[Event],
    sleeps: &[(DateTime<Tz>, DateTime<Tz>)],
    tz: &Tz,
    date: NaiveDate,
) -> DailySummary {
    let mut summary = DailySummary::new(date);

    for ev in all.iter().filter(|e| e.date == date) {
        match ev.action {
            Action::Fed => summary.fed_count += 1,
            Action::SolidFood => summary.solid_food_count += 1,
            Action::DiaperChange => summary.diaper_count += 1,
            _ => {}
        }
    }

    if let Some((day_start, day_end)) = day_bounds(tz, date) {
        summary.sleep_seconds = sleeps
            .iter()
            .map(|(s, e)| overlap_seconds(*s, *e, day_start, day_end))
            .sum();
    }

    summary
}
