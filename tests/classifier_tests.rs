mod common;
use common::{at, date, ev};

use rbabylog::core::calculator::classifier::{
    activity_intervals, classify, classify_point, classify_sleep, pair_sleep_events,
};
use rbabylog::core::calculator::night::{night_overlap_seconds, overlap_ratio};
use rbabylog::core::logic::Core;
use rbabylog::models::action::Action;
use rbabylog::models::night_window::NightWindow;
use rbabylog::models::sleep_interval::{DayPart, SleepKind};

#[test]
fn test_cross_midnight_sleep_is_night_sleep() {
    let events = vec![
        ev("2025-03-01 23:00:00", "Slept"),
        ev("2025-03-02 06:00:00", "Woke Up"),
    ];

    let sleeps = classify_sleep(&events, &NightWindow::default());

    assert_eq!(sleeps.len(), 1);
    let s = &sleeps[0];
    assert_eq!(s.duration_seconds, 7 * 3600);
    assert_eq!(s.overlap_seconds, 7 * 3600);
    assert!((s.overlap_ratio - 1.0).abs() < 1e-9);
    assert_eq!(s.kind, SleepKind::NightSleep);
    assert_eq!(s.duration_label(), "7h 0m");
}

#[test]
fn test_daytime_short_sleep_is_nap() {
    let events = vec![
        ev("2025-03-02 14:00:00", "Slept"),
        ev("2025-03-02 15:30:00", "Woke Up"),
    ];

    let sleeps = classify_sleep(&events, &NightWindow::default());

    assert_eq!(sleeps.len(), 1);
    assert_eq!(sleeps[0].overlap_seconds, 0);
    assert_eq!(sleeps[0].overlap_ratio, 0.0);
    assert!((sleeps[0].duration_hours() - 1.5).abs() < 1e-9);
    assert_eq!(sleeps[0].kind, SleepKind::Nap);
    assert_eq!(sleeps[0].duration_label(), "1h 30m");
}

#[test]
fn test_long_sleep_touching_night_is_night_sleep() {
    // 4.5h, 1.5h of it after 22:00: ratio 0.33 but long enough
    let events = vec![
        ev("2025-03-02 19:00:00", "Slept"),
        ev("2025-03-02 23:30:00", "Woke Up"),
    ];

    let sleeps = classify_sleep(&events, &NightWindow::default());

    assert_eq!(sleeps[0].overlap_seconds, 5400);
    assert!(sleeps[0].overlap_ratio < 0.5);
    assert!((sleeps[0].overlap_ratio - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(sleeps[0].kind, SleepKind::NightSleep);
}

#[test]
fn test_classification_rule_table() {
    assert_eq!(classify(3600, 0.5), SleepKind::NightSleep);
    assert_eq!(classify(3600, 0.49), SleepKind::Nap);
    assert_eq!(classify(3 * 3600, 0.01), SleepKind::NightSleep);
    assert_eq!(classify(3 * 3600 - 1, 0.49), SleepKind::Nap);
    assert_eq!(classify(10 * 3600, 0.0), SleepKind::Nap);
    assert_eq!(classify(0, 0.0), SleepKind::Nap);
}

#[test]
fn test_repeated_slept_keeps_only_latest() {
    let events = vec![
        ev("2025-03-02 12:00:00", "Slept"),
        ev("2025-03-02 13:00:00", "Slept"),
        ev("2025-03-02 14:00:00", "Woke Up"),
    ];

    let pairs = pair_sleep_events(&events);

    assert_eq!(pairs, vec![(at("2025-03-02 13:00:00"), at("2025-03-02 14:00:00"))]);
}

#[test]
fn test_wake_without_sleep_and_trailing_sleep_are_ignored() {
    let events = vec![
        ev("2025-03-02 07:00:00", "Woke Up"),
        ev("2025-03-02 12:00:00", "Slept"),
        ev("2025-03-02 13:00:00", "woke up"),
        ev("2025-03-02 20:00:00", "SLEPT"),
    ];

    let pairs = pair_sleep_events(&events);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, at("2025-03-02 12:00:00"));
}

#[test]
fn test_pairing_sorts_unordered_input() {
    let events = vec![
        ev("2025-03-02 14:00:00", "Woke Up"),
        ev("2025-03-02 12:00:00", "Slept"),
    ];

    let pairs = pair_sleep_events(&events);

    assert_eq!(pairs.len(), 1);
    assert!(pairs[0].1 >= pairs[0].0);
}

#[test]
fn test_zero_duration_sleep_has_zero_ratio() {
    let events = vec![
        ev("2025-03-02 23:00:00", "Slept"),
        ev("2025-03-02 23:00:00", "Woke Up"),
    ];

    let sleeps = classify_sleep(&events, &NightWindow::default());

    assert_eq!(sleeps.len(), 1);
    assert_eq!(sleeps[0].duration_seconds, 0);
    assert_eq!(sleeps[0].overlap_ratio, 0.0);
    assert_eq!(overlap_ratio(0, 0), 0.0);
}

#[test]
fn test_overlap_ratio_stays_in_unit_range_for_multi_night_span() {
    let window = NightWindow::default();
    let start = at("2025-03-01 20:00:00");
    let end = at("2025-03-04 10:00:00");

    let overlap = night_overlap_seconds(start, end, &window);
    let duration = (end - start).num_seconds();

    // three full 9h windows
    assert_eq!(overlap, 3 * 9 * 3600);
    let ratio = overlap_ratio(overlap, duration);
    assert!((0.0..=1.0).contains(&ratio));
}

#[test]
fn test_non_wrapping_window() {
    let window = NightWindow::new(1, 5);
    assert!(!window.wraps_midnight());

    let overlap = night_overlap_seconds(
        at("2025-03-02 00:00:00"),
        at("2025-03-02 03:00:00"),
        &window,
    );
    assert_eq!(overlap, 2 * 3600);
}

#[test]
fn test_point_classification_order() {
    let window = NightWindow::default();
    let events = vec![
        ev("2025-03-02 00:00:00", "Slept"),
        ev("2025-03-02 08:00:00", "Woke Up"),
        ev("2025-03-02 13:00:00", "Slept"),
        ev("2025-03-02 14:00:00", "Woke Up"),
    ];
    let sleeps = classify_sleep(&events, &window);

    // inside a night sleep, outside the night hours
    assert_eq!(classify_point(&at("2025-03-02 07:30:00"), &sleeps, &window), DayPart::Night);
    // inside night hours only
    assert_eq!(classify_point(&at("2025-03-02 22:15:00"), &sleeps, &window), DayPart::Night);
    // inside a nap: still day
    assert_eq!(classify_point(&at("2025-03-02 13:30:00"), &sleeps, &window), DayPart::Day);
    // sleep interval bounds are inclusive
    assert_eq!(classify_point(&at("2025-03-02 08:00:00"), &sleeps, &window), DayPart::Night);
}

#[test]
fn test_activity_intervals_split_day_and_night() {
    let window = NightWindow::default();
    let events = vec![
        ev("2025-03-02 00:00:00", "Slept"),
        ev("2025-03-02 08:00:00", "Woke Up"),
        ev("2025-03-02 07:30:00", "Fed"),
        ev("2025-03-02 10:30:00", "Fed"),
        ev("2025-03-02 13:30:00", "Fed"),
        ev("2025-03-02 23:00:00", "Fed"),
    ];
    let sleeps = classify_sleep(&events, &window);

    let report = activity_intervals(&events, &Action::Fed, &sleeps, &window);

    assert_eq!(report.count, 4);
    assert_eq!(report.intervals.len(), 3);
    assert_eq!(report.intervals[0].part, DayPart::Day);
    assert_eq!(report.intervals[2].part, DayPart::Night);
    assert_eq!(report.day_avg_hours, Some(3.0));
    assert_eq!(report.night_avg_hours, Some(9.5));
}

#[test]
fn test_single_activity_has_no_intervals() {
    let window = NightWindow::default();
    let events = vec![ev("2025-03-02 09:00:00", "Diaper Change")];

    let report = activity_intervals(&events, &Action::DiaperChange, &[], &window);

    assert_eq!(report.count, 1);
    assert!(report.intervals.is_empty());
    assert_eq!(report.day_avg_hours, None);
    assert_eq!(report.night_avg_hours, None);
}

#[test]
fn test_analyze_empty_day() {
    let (slice, analysis) = Core::analyze_date(&[], date("2025-03-02"), &NightWindow::default());

    assert!(slice.is_empty());
    assert!(analysis.sleep.is_empty());
    assert!(analysis.activities.is_empty());
    assert_eq!(analysis.total_sleep_seconds(), 0);
}

#[test]
fn test_analyze_day_reports_each_other_action() {
    let all = vec![
        ev("2025-03-02 08:00:00", "Woke Up"),
        ev("2025-03-02 09:00:00", "Fed"),
        ev("2025-03-02 12:00:00", "Fed"),
        ev("2025-03-02 10:00:00", "Diaper Change"),
        ev("2025-03-02 11:00:00", "Bath"),
    ];

    let (_, analysis) = Core::analyze_date(&all, date("2025-03-02"), &NightWindow::default());

    let actions: Vec<String> = analysis
        .activities
        .iter()
        .map(|r| r.action.label().to_string())
        .collect();
    assert_eq!(actions, vec!["Fed", "Diaper Change", "Bath"]);
    assert_eq!(analysis.night_sleep_count(), 1);
    assert_eq!(analysis.nap_count(), 0);
}
