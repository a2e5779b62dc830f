use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::edit::{EditLogic, EventChanges};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Edit {
        at,
        action,
        note,
        time,
    } = cmd
    {
        let at = ctx.parse_at(at)?;

        let time = match time {
            Some(t) => Some(parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?),
            None => None,
        };

        let changes = EventChanges {
            action: action.clone(),
            note: note.clone(),
            time,
        };

        let logic = EditLogic {
            store: &ctx.store,
            tz: ctx.tz,
            now: ctx.now,
            recent_days: ctx.cfg.recent_days,
        };

        let plan = logic.edit(at, &changes)?;
        if plan.is_empty() {
            info("No changes to save.");
        } else {
            success(format!(
                "✏️ Changes saved ({} updated, {} added, {} removed).",
                plan.updates.len(),
                plan.appends.len(),
                plan.deletes.len()
            ));
        }
    }
    Ok(())
}
