//! Rectangular sheet values → events.

use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::event::Event;
use crate::sheet::diff::ChangePlan;
use crate::utils::date::parse_date;
use crate::utils::time::{localize_strict, parse_time};
use chrono_tz::Tz;
use log::{debug, warn};

pub const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Time", "Action"];
pub const DEFAULT_HEADERS: [&str; 4] = ["Date", "Time", "Action", "Note"];

/// Header row + data rows, as returned by a "get all values" call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// First row is the header; header names are trimmed.
    pub fn from_values(mut values: Vec<Vec<String>>) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let headers = values
            .remove(0)
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();
        Self {
            headers,
            rows: values,
        }
    }

    pub fn with_default_headers() -> Self {
        Self {
            headers: DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn check_schema(&self) -> AppResult<()> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| self.column(c).is_none())
            .map(|c| c.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingColumns {
                missing,
                available: self.headers.clone(),
            })
        }
    }

    /// Parse every data row. A table without a header row yields no events;
    /// a header row without `Date`, `Time` or `Action` is an error.
    ///
    /// Rows that cannot be placed in time (bad date/time, ambiguous local
    /// time) or have an empty action are skipped with a warning.
    pub fn to_events(&self, tz: &Tz) -> AppResult<Vec<Event>> {
        if self.headers.is_empty() {
            return Ok(Vec::new());
        }
        self.check_schema()?;

        let mut events = Vec::with_capacity(self.rows.len());

        for (i, row) in self.rows.iter().enumerate() {
            let sheet_row = i + 2; // header + 1-based
            match self.parse_row(row, tz) {
                Some(mut ev) => {
                    ev.row = Some(sheet_row);
                    events.push(ev);
                }
                None => warn!("skipping sheet row {}: {:?}", sheet_row, row),
            }
        }

        debug!("parsed {} events from {} rows", events.len(), self.rows.len());
        Ok(events)
    }

    fn cell<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.column(name)
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn parse_row(&self, row: &[String], tz: &Tz) -> Option<Event> {
        let date = parse_date(self.cell(row, "Date"))?;
        let time = parse_time(self.cell(row, "Time"))?;
        let action = Action::from_label(self.cell(row, "Action"))?;
        let datetime = localize_strict(tz, date.and_time(time))?;

        let extra = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !DEFAULT_HEADERS.contains(&h.as_str()))
            .map(|(i, h)| (h.clone(), row.get(i).cloned().unwrap_or_default()))
            .collect();

        // a shifted DST-gap time moves date/time with it
        Some(Event {
            date: datetime.date_naive(),
            time: datetime.time(),
            datetime,
            action,
            note: self.cell(row, "Note").to_string(),
            extra,
            row: None,
            synthetic: false,
        })
    }

    /// Apply a change plan: deletions (descending row numbers) first, then
    /// in-place updates against the post-deletion numbering, then appends.
    pub fn apply(&mut self, plan: &ChangePlan) {
        for &row in &plan.deletes {
            if let Some(idx) = row.checked_sub(2)
                && idx < self.rows.len()
            {
                self.rows.remove(idx);
            }
        }

        for (row, values) in &plan.updates {
            if let Some(idx) = row.checked_sub(2)
                && let Some(target) = self.rows.get_mut(idx)
            {
                *target = values.clone();
            }
        }

        self.rows.extend(plan.appends.iter().cloned());
    }
}
