//! Sleep pairing, night/nap classification and day/night tagging of the
//! gaps between repeated activities.

use crate::core::calculator::night::{is_in_night_window, night_overlap_seconds, overlap_ratio};
use crate::models::action::Action;
use crate::models::event::{Event, sort_chronological};
use crate::models::night_window::NightWindow;
use crate::models::sleep_interval::{DayPart, SleepInterval, SleepKind};
use chrono::DateTime;
use chrono_tz::Tz;
use log::debug;
use serde::Serialize;

/// Ratio of night overlap from which a sleep is always a night sleep.
pub const NIGHT_RATIO_THRESHOLD: f64 = 0.5;
/// Sleeps at least this long count as night sleep if they touch the window at all.
pub const LONG_SLEEP_HOURS: f64 = 3.0;

/// Pair `Slept` / `Woke Up` markers with a single pending slot.
///
/// - a second `Slept` replaces the pending one
/// - a `Woke Up` with nothing pending is ignored
/// - a `Slept` still pending at the end is dropped
pub fn pair_sleep_events(events: &[Event]) -> Vec<(DateTime<Tz>, DateTime<Tz>)> {
    let mut sorted = events.to_vec();
    sort_chronological(&mut sorted);

    let mut pairs = Vec::new();
    let mut pending: Option<DateTime<Tz>> = None;

    for ev in &sorted {
        match ev.action {
            Action::Slept => pending = Some(ev.datetime),
            Action::WokeUp => {
                if let Some(start) = pending.take() {
                    pairs.push((start, ev.datetime));
                }
            }
            _ => {}
        }
    }

    pairs
}

/// Night/nap decision, first matching rule wins.
pub fn classify(duration_seconds: i64, ratio: f64) -> SleepKind {
    let hours = duration_seconds as f64 / 3600.0;

    let mostly_night = ratio >= NIGHT_RATIO_THRESHOLD;
    let long_and_touches_night = hours >= LONG_SLEEP_HOURS && ratio > 0.0;

    if mostly_night || long_and_touches_night {
        SleepKind::NightSleep
    } else {
        SleepKind::Nap
    }
}

pub fn classify_sleep(events: &[Event], window: &NightWindow) -> Vec<SleepInterval> {
    let intervals: Vec<SleepInterval> = pair_sleep_events(events)
        .into_iter()
        .map(|(start, end)| {
            let duration_seconds = (end - start).num_seconds().max(0);
            let overlap = night_overlap_seconds(start, end, window);
            let ratio = overlap_ratio(overlap, duration_seconds);

            SleepInterval {
                start,
                end,
                duration_seconds,
                overlap_seconds: overlap,
                overlap_ratio: ratio,
                kind: classify(duration_seconds, ratio),
            }
        })
        .collect();

    debug!(
        "classified {} sleep intervals ({} night)",
        intervals.len(),
        intervals.iter().filter(|i| i.is_night()).count()
    );

    intervals
}

/// Night if inside a night sleep, else if the hour is inside the window.
/// `sleeps` must already be classified.
pub fn classify_point(dt: &DateTime<Tz>, sleeps: &[SleepInterval], window: &NightWindow) -> DayPart {
    if sleeps.iter().any(|s| s.is_night() && s.contains(dt)) {
        return DayPart::Night;
    }
    if is_in_night_window(dt, window) {
        return DayPart::Night;
    }
    DayPart::Day
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityInterval {
    pub from: DateTime<Tz>,
    pub to: DateTime<Tz>,
    pub hours: f64,
    pub part: DayPart,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityReport {
    pub action: Action,
    pub count: usize,
    pub intervals: Vec<ActivityInterval>,
    pub day_avg_hours: Option<f64>,
    pub night_avg_hours: Option<f64>,
}

/// Gaps between consecutive occurrences of `action`, each tagged by the
/// day part of its later endpoint.
pub fn activity_intervals(
    events: &[Event],
    action: &Action,
    sleeps: &[SleepInterval],
    window: &NightWindow,
) -> ActivityReport {
    let mut times: Vec<DateTime<Tz>> = events
        .iter()
        .filter(|e| &e.action == action)
        .map(|e| e.datetime)
        .collect();
    times.sort();

    let intervals: Vec<ActivityInterval> = times
        .windows(2)
        .map(|w| ActivityInterval {
            from: w[0],
            to: w[1],
            hours: (w[1] - w[0]).num_seconds() as f64 / 3600.0,
            part: classify_point(&w[1], sleeps, window),
        })
        .collect();

    ActivityReport {
        action: action.clone(),
        count: times.len(),
        day_avg_hours: mean_hours(&intervals, DayPart::Day),
        night_avg_hours: mean_hours(&intervals, DayPart::Night),
        intervals,
    }
}

fn mean_hours(intervals: &[ActivityInterval], part: DayPart) -> Option<f64> {
    let bucket: Vec<f64> = intervals
        .iter()
        .filter(|i| i.part == part)
        .map(|i| i.hours)
        .collect();

    if bucket.is_empty() {
        None
    } else {
        Some(bucket.iter().sum::<f64>() / bucket.len() as f64)
    }
}
