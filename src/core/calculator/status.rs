//! "Time since last ..." and the sleeping flag, derived from the log for a
//! given instant.

use crate::models::action::Action;
use crate::models::event::Event;
use crate::utils::formatting::secs2readable;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-request state the dashboard used to keep in global session flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionContext {
    pub is_sleeping: bool,
    pub last_action: Option<Action>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LastSeen {
    pub action: Action,
    pub at: DateTime<Tz>,
    pub elapsed_seconds: i64,
}

impl LastSeen {
    /// "2h 15m ago", "in 0h 5m" for rows logged ahead of `now`.
    pub fn elapsed_label(&self) -> String {
        if self.elapsed_seconds >= 0 {
            format!("{} ago", secs2readable(self.elapsed_seconds))
        } else {
            format!("in {}", secs2readable(-self.elapsed_seconds))
        }
    }
}

pub fn session_context(all: &[Event]) -> SessionContext {
    let latest = all.iter().max_by_key(|e| e.datetime);
    let last_marker = all
        .iter()
        .filter(|e| e.action.is_sleep_marker())
        .max_by_key(|e| e.datetime);

    SessionContext {
        is_sleeping: last_marker.is_some_and(|e| e.action.is_slept()),
        last_action: latest.map(|e| e.action.clone()),
    }
}

/// Most recent occurrence of every action, in `Action` order.
pub fn last_seen(all: &[Event], now: DateTime<Tz>) -> Vec<LastSeen> {
    let mut latest: BTreeMap<Action, DateTime<Tz>> = BTreeMap::new();

    for ev in all {
        latest
            .entry(ev.action.clone())
            .and_modify(|t| {
                if ev.datetime > *t {
                    *t = ev.datetime;
                }
            })
            .or_insert(ev.datetime);
    }

    latest
        .into_iter()
        .map(|(action, at)| LastSeen {
            action,
            at,
            elapsed_seconds: (now - at).num_seconds(),
        })
        .collect()
}
