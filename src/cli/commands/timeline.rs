use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::calculator::reconcile::reconcile_day;
use crate::core::calculator::timeline::{DayTimeline, build_timeline};
use crate::errors::AppResult;
use crate::utils::formatting::{clock12, hours2readable};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Timeline { date, width } = cmd {
        let day = ctx.parse_day(date.as_ref())?;
        let all = ctx.load_events()?;
        let timeline = build_timeline(&reconcile_day(&all, day));

        println!("⏰ 24-Hour Timeline - {}\n", day);
        println!("{}", DayTimeline::render_axis(*width));
        println!("{}", timeline.render_bar(*width));
        println!("# sleep   = awake   * activity\n");

        let mut segments: Vec<_> = timeline.sleep.iter().chain(timeline.awake.iter()).collect();
        segments.sort_by_key(|s| s.start);
        for seg in segments {
            println!("{}  ({})", seg.label(), hours2readable(seg.duration_hours()));
        }
        for m in &timeline.markers {
            println!("* {} at {}", m.action, clock12(&m.at));
        }
    }
    Ok(())
}
