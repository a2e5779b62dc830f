use crate::core::calculator::{classifier, reconcile, timeline};
use crate::models::action::Action;
use crate::models::day_summary::DayAnalysis;
use crate::models::event::Event;
use crate::models::night_window::NightWindow;
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub struct Core;

impl Core {
    /// Classify an already reconciled day slice.
    ///
    /// Sleep classification runs first: the day/night tag of activity gaps
    /// looks at the night sleeps found here.
    pub fn analyze_day(date: NaiveDate, day: &[Event], window: &NightWindow) -> DayAnalysis {
        let sleep = classifier::classify_sleep(day, window);

        let actions: BTreeSet<&Action> = day
            .iter()
            .map(|e| &e.action)
            .filter(|a| !a.is_sleep_marker())
            .collect();

        let activities = actions
            .into_iter()
            .map(|a| classifier::activity_intervals(day, a, &sleep, window))
            .collect();

        DayAnalysis {
            date,
            sleep,
            activities,
            timeline: timeline::build_timeline(day),
        }
    }

    /// Reconcile the slice of `all` for `date`, then analyze it.
    pub fn analyze_date(
        all: &[Event],
        date: NaiveDate,
        window: &NightWindow,
    ) -> (Vec<Event>, DayAnalysis) {
        let day = reconcile::reconcile_day(all, date);
        let analysis = Self::analyze_day(date, &day, window);
        (day, analysis)
    }
}
