// src/export/model.rs

use crate::models::day_summary::DailySummary;
use crate::models::event::Event;
use serde::Serialize;

/// Flat event row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub date: String,
    pub time: String,
    pub action: String,
    pub note: String,
    /// Other sheet columns as "Name=value" pairs joined by "; ".
    pub extra: String,
}

impl From<&Event> for EventExport {
    fn from(e: &Event) -> Self {
        Self {
            date: e.date_str(),
            time: e.time_str(),
            action: e.action.label().to_string(),
            note: e.note.clone(),
            extra: e
                .extra
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Flat summary row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub date: String,
    pub fed_count: usize,
    pub solid_food_count: usize,
    pub diaper_count: usize,
    pub sleep_minutes: i64,
    pub sleep_duration: String,
}

impl From<&DailySummary> for SummaryExport {
    fn from(s: &DailySummary) -> Self {
        Self {
            date: s.date.format("%Y-%m-%d").to_string(),
            fed_count: s.fed_count,
            solid_food_count: s.solid_food_count,
            diaper_count: s.diaper_count,
            sleep_minutes: s.sleep_seconds / 60,
            sleep_duration: s.sleep_duration(),
        }
    }
}
