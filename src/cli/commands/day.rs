use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::calculator::classifier::ActivityReport;
use crate::core::calculator::reconcile::dates_present;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::day_summary::DayAnalysis;
use crate::models::event::Event;
use crate::ui::messages::header;
use crate::utils::formatting::{avg_hours_label, clock12, hours2readable, secs2readable};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Day { date, events } = cmd {
        let day = ctx.parse_day(date.as_ref())?;
        let all = ctx.load_events()?;

        let (slice, analysis) = Core::analyze_date(&all, day, &ctx.cfg.night_window());

        header(format!("{} ({} records)", day, slice.len()));

        if slice.is_empty() {
            println!("No activities recorded for {}.", day);
            let dates: Vec<String> = dates_present(&all)
                .iter()
                .take(7)
                .map(|d| d.to_string())
                .collect();
            if !dates.is_empty() {
                println!("Dates with records: {}", dates.join(", "));
            }
            return Ok(());
        }

        if *events {
            print_events(&slice);
        }

        print_sleep(&analysis);

        for report in &analysis.activities {
            print_activity(report);
        }

        println!("⏰ {}", analysis.timeline.render_bar(48));
    }
    Ok(())
}

fn print_events(slice: &[Event]) {
    let mut table = Table::new(vec![
        Column::new("Time", 8),
        Column::new("Action", 14),
        Column::new("Note", 30),
    ]);
    // newest first, synthesized boundaries flagged
    for ev in slice.iter().rev() {
        let note = if ev.synthetic {
            "(boundary)".to_string()
        } else {
            ev.note.clone()
        };
        table.add_row(vec![ev.time_str(), ev.action.label().to_string(), note]);
    }
    println!("{}", table.render());
}

fn print_sleep(analysis: &DayAnalysis) {
    println!("😴 Sleep Durations");

    if analysis.sleep.is_empty() {
        println!("No complete sleep cycles found\n");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Slept At", 9),
        Column::new("Woke Up At", 10),
        Column::new("Duration", 9),
        Column::new("Hours", 6),
        Column::new("Night %", 7),
        Column::new("Type", 11),
    ]);

    for s in &analysis.sleep {
        table.add_row(vec![
            clock12(&s.start),
            clock12(&s.end),
            s.duration_label(),
            format!("{:.2}", s.duration_hours()),
            format!("{:.0}%", s.overlap_ratio * 100.0),
            s.kind.to_string(),
        ]);
    }

    print!("{}", table.render());
    println!(
        "Total Sleep: {} | Night Sleep: {} | Naps: {}\n",
        secs2readable(analysis.total_sleep_seconds()),
        analysis.night_sleep_count(),
        analysis.nap_count()
    );
}

fn print_activity(report: &ActivityReport) {
    println!("⏱️  Time Between {} (Day vs Night)", report.action);

    match report.count {
        0 => {}
        1 => println!("Only one {} event\n", report.action),
        _ => {
            let mut table = Table::new(vec![
                Column::new("From", 9),
                Column::new("To", 9),
                Column::new("Interval", 9),
                Column::new("Time", 5),
            ]);
            for i in &report.intervals {
                table.add_row(vec![
                    clock12(&i.from),
                    clock12(&i.to),
                    hours2readable(i.hours),
                    i.part.to_string(),
                ]);
            }
            print!("{}", table.render());
            println!(
                "Total: {} | Day Avg Interval: {} | Night Avg Interval: {}\n",
                report.count,
                avg_hours_label(report.day_avg_hours),
                avg_hours_label(report.night_avg_hours)
            );
        }
    }
}
