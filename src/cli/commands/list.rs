use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::sheet::view::recent_events;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::List { days } = cmd {
        let days = days.unwrap_or(ctx.cfg.recent_days);
        let all = ctx.load_events()?;
        let recent = recent_events(&all, ctx.now, days);

        if recent.is_empty() {
            println!("No activities in the last {} days.", days);
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Time", 8),
            Column::new("Action", 14),
            Column::new("Note", 30),
        ]);

        for ev in &recent {
            table.add_row(vec![
                ev.date_str(),
                ev.time_str(),
                ev.action.label().to_string(),
                ev.note.clone(),
            ]);
        }

        println!("Last {} days ({} records):\n", days, recent.len());
        print!("{}", table.render());
    }
    Ok(())
}
