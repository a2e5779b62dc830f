use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::errors::AppResult;

/// Record one activity.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Add { action, note, at } = cmd {
        //
        // 1. Resolve the instant (default = now)
        //
        let when = match at {
            Some(s) => ctx.parse_at(s)?,
            None => ctx.now,
        };

        //
        // 2. Append to the sheet
        //
        AddLogic::apply(&ctx.store, action, note.as_deref(), when)?;
    }

    Ok(())
}
