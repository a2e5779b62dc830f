use super::action::Action;
use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub date: NaiveDate,              // ⇔ Date   (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,              // ⇔ Time   (TEXT "HH:MM:SS")
    pub datetime: DateTime<Tz>,       // date + time localized in the sheet timezone
    pub action: Action,               // ⇔ Action
    pub note: String,                 // ⇔ Note   (may be empty)
    pub extra: Vec<(String, String)>, // any other column, in sheet order
    pub row: Option<usize>,           // 1-based sheet row (header = 1)
    pub synthetic: bool,              // created by the day-boundary reconciler
}

impl Event {
    /// Build an event at a given instant. Date and time are taken from the
    /// local wall clock of `datetime`.
    pub fn at(datetime: DateTime<Tz>, action: Action, note: impl Into<String>) -> Self {
        Self {
            date: datetime.date_naive(),
            time: datetime.time(),
            datetime,
            action,
            note: note.into(),
            extra: Vec::new(),
            row: None,
            synthetic: false,
        }
    }

    /// Copy of `self` moved to another instant, used for boundary synthesis:
    /// note cleared, metadata columns kept.
    pub fn mirrored(&self, datetime: DateTime<Tz>, action: Action) -> Self {
        Self {
            date: datetime.date_naive(),
            time: datetime.time(),
            datetime,
            action,
            note: String::new(),
            extra: self.extra.clone(),
            row: None,
            synthetic: true,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }

    pub fn get_date_time(&self) -> String {
        self.datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Sheet values in header order (`Date`, `Time`, `Action`, `Note`, extras...).
    pub fn to_row(&self, headers: &[String]) -> Vec<String> {
        headers
            .iter()
            .map(|h| match h.as_str() {
                "Date" => self.date_str(),
                "Time" => self.time_str(),
                "Action" => self.action.label().to_string(),
                "Note" => self.note.clone(),
                other => self
                    .extra
                    .iter()
                    .find(|(k, _)| k == other)
                    .map(|(_, v)| v.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }
}

/// Stable chronological sort; events sharing a second keep their input order.
pub fn sort_chronological(events: &mut [Event]) {
    events.sort_by_key(|e| e.datetime);
}
