use crate::models::event::Event;
use chrono::{DateTime, Duration};
use chrono_tz::Tz;

/// Events at or after `now - days`, newest first.
pub fn recent_events(all: &[Event], now: DateTime<Tz>, days: i64) -> Vec<Event> {
    let since = now - Duration::days(days);
    let mut recent: Vec<Event> = all.iter().filter(|e| e.datetime >= since).cloned().collect();
    recent.sort_by(|a, b| b.datetime.cmp(&a.datetime));
    recent
}

/// Index of the event logged at exactly `at`.
pub fn position_at(events: &[Event], at: &DateTime<Tz>) -> Option<usize> {
    events.iter().position(|e| e.datetime == *at)
}
