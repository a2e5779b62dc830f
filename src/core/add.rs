use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::event::Event;
use crate::sheet::SheetStore;
use crate::ui::messages::success;
use chrono::DateTime;
use chrono_tz::Tz;
use log::info;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append one activity at `at` and return the stored event.
    pub fn apply(
        store: &SheetStore,
        action_label: &str,
        note: Option<&str>,
        at: DateTime<Tz>,
    ) -> AppResult<Event> {
        let action = Action::from_label(action_label)
            .ok_or_else(|| AppError::InvalidAction(action_label.to_string()))?;

        let mut ev = Event::at(at, action, note.unwrap_or("").trim());
        let row = store.append(&ev)?;
        ev.row = Some(row);

        info!("appended {} at row {}", ev.action, row);
        success(format!(
            "Recorded: {} at {}",
            ev.action,
            ev.get_date_time()
        ));

        Ok(ev)
    }
}
