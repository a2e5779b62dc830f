use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Del { at } = cmd {
        let at = ctx.parse_at(at)?;

        let logic = EditLogic {
            store: &ctx.store,
            tz: ctx.tz,
            now: ctx.now,
            recent_days: ctx.cfg.recent_days,
        };

        logic.delete(at)?;
        success(format!("🗑️ Deleted entry at {}", at.format("%Y-%m-%d %H:%M:%S")));
    }
    Ok(())
}
