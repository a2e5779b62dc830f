use crate::core::calculator::classifier::ActivityReport;
use crate::core::calculator::timeline::DayTimeline;
use crate::models::sleep_interval::SleepInterval;
use crate::utils::formatting::secs2readable;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the rolling summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub fed_count: usize,
    pub solid_food_count: usize,
    pub diaper_count: usize,
    pub sleep_seconds: i64,
}

impl DailySummary {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Default::default()
        }
    }

    pub fn sleep_duration(&self) -> String {
        secs2readable(self.sleep_seconds)
    }
}

/// Everything computed for one reconciled day.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayAnalysis {
    pub date: NaiveDate,
    pub sleep: Vec<SleepInterval>,
    pub activities: Vec<ActivityReport>,
    pub timeline: DayTimeline,
}

impl DayAnalysis {
    pub fn total_sleep_seconds(&self) -> i64 {
        self.sleep.iter().map(|s| s.duration_seconds).sum()
    }

    pub fn night_sleep_count(&self) -> usize {
        self.sleep.iter().filter(|s| s.is_night()).count()
    }

    pub fn nap_count(&self) -> usize {
        self.sleep.len() - self.night_sleep_count()
    }
}
