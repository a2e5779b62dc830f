use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::SummaryRequest;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        what,
        range,
        days,
        force,
    } = cmd
    {
        let events = ctx.load_events()?;
        let summary = SummaryRequest {
            now: ctx.now,
            days: days.unwrap_or(ctx.cfg.summary_days).max(1),
            policy: ctx.cfg.open_sleep_policy,
        };

        ExportLogic::export(&events, *format, *what, file, range, &summary, *force)?;
    }
    Ok(())
}
