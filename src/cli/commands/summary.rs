use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::calculator::summary::rolling_summary;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Summary { days } = cmd {
        let days = days.unwrap_or(ctx.cfg.summary_days).max(1);
        let all = ctx.load_events()?;

        let rows = rolling_summary(
            &all,
            ctx.today(),
            days,
            ctx.now,
            ctx.cfg.open_sleep_policy,
        );

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Fed", 4),
            Column::new("Solid Food", 10),
            Column::new("Diaper", 6),
            Column::new("Sleep", 8),
        ]);

        for r in &rows {
            table.add_row(vec![
                r.date.format("%Y-%m-%d").to_string(),
                r.fed_count.to_string(),
                r.solid_food_count.to_string(),
                r.diaper_count.to_string(),
                r.sleep_duration(),
            ]);
        }

        println!("📅 Last {} days:\n", days);
        print!("{}", table.render());
    }
    Ok(())
}
