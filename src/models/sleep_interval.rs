use crate::utils::formatting::secs2readable;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SleepKind {
    #[serde(rename = "Night Sleep")]
    NightSleep,
    Nap,
}

impl fmt::Display for SleepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SleepKind::NightSleep => f.write_str("Night Sleep"),
            SleepKind::Nap => f.write_str("Nap"),
        }
    }
}

/// Day/night bucket of a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayPart {
    Day,
    Night,
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayPart::Day => f.write_str("Day"),
            DayPart::Night => f.write_str("Night"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SleepInterval {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub duration_seconds: i64,
    pub overlap_seconds: i64,
    pub overlap_ratio: f64,
    pub kind: SleepKind,
}

impl SleepInterval {
    pub fn duration_hours(&self) -> f64 {
        self.duration_seconds as f64 / 3600.0
    }

    /// e.g. "7h 0m"
    pub fn duration_label(&self) -> String {
        secs2readable(self.duration_seconds)
    }

    pub fn is_night(&self) -> bool {
        self.kind == SleepKind::NightSleep
    }

    /// Inclusive on both ends.
    pub fn contains(&self, dt: &DateTime<Tz>) -> bool {
        self.start <= *dt && *dt <= self.end
    }
}
