//! Row-level diff between the recent-history view a user edited and the
//! sheet it came from.

use crate::models::event::Event;
use chrono::DateTime;
use chrono_tz::Tz;
use log::debug;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangePlan {
    /// Sheet rows to delete, highest first so numbering stays valid.
    pub deletes: Vec<usize>,
    /// `(row, values)` against the numbering after the deletions.
    pub updates: Vec<(usize, Vec<String>)>,
    pub appends: Vec<Vec<String>>,
}

impl ChangePlan {
    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty() && self.updates.is_empty() && self.appends.is_empty()
    }
}

/// Rows are matched by `datetime`.
///
/// - `original` rows whose datetime no longer appears in `edited` are deleted
/// - `edited` rows matching a remaining sheet row update it when values differ
/// - the other `edited` rows are appended
pub fn plan_changes(
    headers: &[String],
    all: &[Event],
    original: &[Event],
    edited: &[Event],
) -> ChangePlan {
    if !has_changes(headers, original, edited) {
        return ChangePlan::default();
    }

    let edited_times: HashSet<DateTime<Tz>> = edited.iter().map(|e| e.datetime).collect();

    let mut deletes: Vec<usize> = original
        .iter()
        .filter(|e| !edited_times.contains(&e.datetime))
        .filter_map(|e| sheet_row_of(all, &e.datetime))
        .collect();
    deletes.sort_unstable_by(|a, b| b.cmp(a));
    deletes.dedup();

    // datetime → (row after deletions, current values); last row wins on ties
    let mut remaining: HashMap<DateTime<Tz>, (usize, Vec<String>)> = HashMap::new();
    for ev in all {
        if let Some(row) = ev.row
            && !deletes.contains(&row)
        {
            let shift = deletes.iter().filter(|&&d| d < row).count();
            remaining.insert(ev.datetime, (row - shift, ev.to_row(headers)));
        }
    }

    let mut plan = ChangePlan {
        deletes,
        ..Default::default()
    };

    for ev in edited {
        let values = ev.to_row(headers);
        match remaining.get(&ev.datetime) {
            Some((row, current)) => {
                if *current != values {
                    plan.updates.push((*row, values));
                }
            }
            None => plan.appends.push(values),
        }
    }

    debug!(
        "change plan: {} deletes, {} updates, {} appends",
        plan.deletes.len(),
        plan.updates.len(),
        plan.appends.len()
    );

    plan
}

fn has_changes(headers: &[String], original: &[Event], edited: &[Event]) -> bool {
    if original.len() != edited.len() {
        return true;
    }
    original
        .iter()
        .zip(edited)
        .any(|(o, e)| o.to_row(headers) != e.to_row(headers))
}

fn sheet_row_of(all: &[Event], dt: &DateTime<Tz>) -> Option<usize> {
    all.iter()
        .filter(|e| e.datetime == *dt)
        .filter_map(|e| e.row)
        .next_back()
}
