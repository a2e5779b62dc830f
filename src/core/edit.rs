//! Edits of the recent-history view, pushed back as a change plan.

use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::event::Event;
use crate::sheet::view::{position_at, recent_events};
use crate::sheet::{ChangePlan, SheetStore, plan_changes};
use crate::utils::time::localize_strict;
use chrono::{DateTime, NaiveTime};
use chrono_tz::Tz;

/// Fields to overwrite on the edited row; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub action: Option<String>,
    pub note: Option<String>,
    pub time: Option<NaiveTime>,
}

/// Only rows inside the recent view (`now - recent_days`) can be edited.
pub struct EditLogic<'a> {
    pub store: &'a SheetStore,
    pub tz: Tz,
    pub now: DateTime<Tz>,
    pub recent_days: i64,
}

impl EditLogic<'_> {
    pub fn edit(&self, at: DateTime<Tz>, changes: &EventChanges) -> AppResult<ChangePlan> {
        self.push(at, |edited, idx| {
            let ev = &mut edited[idx];

            if let Some(label) = &changes.action {
                ev.action = Action::from_label(label)
                    .ok_or_else(|| AppError::InvalidAction(label.clone()))?;
            }
            if let Some(note) = &changes.note {
                ev.note = note.trim().to_string();
            }
            if let Some(time) = changes.time {
                let naive = ev.date.and_time(time);
                let dt = localize_strict(&self.tz, naive)
                    .ok_or_else(|| AppError::InvalidDateTime(naive.to_string()))?;
                ev.time = dt.time();
                ev.datetime = dt;
            }
            Ok(())
        })
    }

    pub fn delete(&self, at: DateTime<Tz>) -> AppResult<ChangePlan> {
        self.push(at, |edited, idx| {
            edited.remove(idx);
            Ok(())
        })
    }

    fn push<F>(&self, at: DateTime<Tz>, mutate: F) -> AppResult<ChangePlan>
    where
        F: FnOnce(&mut Vec<Event>, usize) -> AppResult<()>,
    {
        let (table, all) = self.store.load_events(&self.tz)?;
        let original = recent_events(&all, self.now, self.recent_days);

        let mut edited = original.clone();
        let idx = position_at(&edited, &at).ok_or_else(|| {
            AppError::NoEventAt(format!(
                "{} (only the last {} days can be edited)",
                at.format("%Y-%m-%d %H:%M:%S"),
                self.recent_days
            ))
        })?;

        mutate(&mut edited, idx)?;

        let plan = plan_changes(&table.headers, &all, &original, &edited);
        self.store.apply(&plan)?;
        Ok(plan)
    }
}
