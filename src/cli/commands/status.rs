use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::calculator::status::{last_seen, session_context};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::clock12;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Status = cmd {
        let all = ctx.load_events()?;

        if all.is_empty() {
            info("No activities recorded yet.");
            return Ok(());
        }

        let session = session_context(&all);
        if session.is_sleeping {
            println!("😴 Currently sleeping (next button: Woke Up)");
        } else {
            println!("👀 Currently awake (next button: Slept)");
        }
        println!();

        for seen in last_seen(&all, ctx.now) {
            println!(
                "{:<14} {:>9}  ({})",
                seen.action.label(),
                seen.elapsed_label(),
                clock12(&seen.at)
            );
        }
    }
    Ok(())
}
