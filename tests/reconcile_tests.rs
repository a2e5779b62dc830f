mod common;
use common::{date, ev};

use rbabylog::core::calculator::classifier::classify_sleep;
use rbabylog::core::calculator::reconcile::{dates_present, fill_day_boundaries, reconcile_day};
use rbabylog::models::action::Action;
use rbabylog::models::night_window::NightWindow;
use rbabylog::models::sleep_interval::SleepKind;

fn labels(day: &[rbabylog::models::event::Event]) -> Vec<(String, String)> {
    day.iter()
        .map(|e| (e.time_str(), e.action.label().to_string()))
        .collect()
}

#[test]
fn test_day_starting_awake_gets_midnight_sleep() {
    let all = vec![
        ev("2025-03-02 08:00:00", "Woke Up"),
        ev("2025-03-02 09:00:00", "Fed"),
    ];

    let day = reconcile_day(&all, date("2025-03-02"));

    assert_eq!(
        labels(&day),
        vec![
            ("00:00:00".to_string(), "Slept".to_string()),
            ("08:00:00".to_string(), "Woke Up".to_string()),
            ("09:00:00".to_string(), "Fed".to_string()),
            ("23:59:59".to_string(), "Slept".to_string()),
        ]
    );
    assert!(day[0].synthetic);
    assert!(!day[1].synthetic);
    assert!(day[3].synthetic);

    let sleeps = classify_sleep(&day, &NightWindow::default());
    assert_eq!(sleeps.len(), 1);
    assert_eq!(sleeps[0].duration_seconds, 8 * 3600);
    assert!((sleeps[0].overlap_ratio - 0.875).abs() < 1e-9);
    assert_eq!(sleeps[0].kind, SleepKind::NightSleep);
}

#[test]
fn test_day_ending_asleep_gets_end_of_day_wake() {
    let all = vec![
        ev("2025-03-02 07:00:00", "Fed"),
        ev("2025-03-02 21:00:00", "Slept"),
    ];

    let day = reconcile_day(&all, date("2025-03-02"));

    // first marker is Slept: the day started awake
    assert_eq!(day.first().map(|e| e.action.clone()), Some(Action::WokeUp));
    assert_eq!(day.first().map(|e| e.time_str()), Some("00:00:00".to_string()));
    assert_eq!(day.last().map(|e| e.action.clone()), Some(Action::WokeUp));
    assert_eq!(day.last().map(|e| e.time_str()), Some("23:59:59".to_string()));

    let sleeps = classify_sleep(&day, &NightWindow::default());
    assert_eq!(sleeps.len(), 1);
    assert_eq!(sleeps[0].duration_seconds, 3 * 3600 - 1);
}

#[test]
fn test_day_without_sleep_markers_is_untouched() {
    let all = vec![
        ev("2025-03-02 09:00:00", "Fed"),
        ev("2025-03-02 11:00:00", "Diaper Change"),
    ];

    let day = reconcile_day(&all, date("2025-03-02"));

    assert_eq!(day.len(), 2);
    assert!(day.iter().all(|e| !e.synthetic));
}

#[test]
fn test_empty_day() {
    let all = vec![ev("2025-03-01 09:00:00", "Fed")];

    assert!(reconcile_day(&all, date("2025-03-02")).is_empty());
}

#[test]
fn test_reconcile_is_idempotent() {
    let all = vec![
        ev("2025-03-02 08:00:00", "Woke Up"),
        ev("2025-03-02 13:00:00", "Slept"),
        ev("2025-03-02 14:30:00", "Woke Up"),
    ];

    let once = reconcile_day(&all, date("2025-03-02"));
    let twice = fill_day_boundaries(once.clone());

    assert_eq!(labels(&once), labels(&twice));
}

#[test]
fn test_marker_already_at_boundary_is_kept() {
    let all = vec![
        ev("2025-03-02 00:00:00", "Woke Up"),
        ev("2025-03-02 23:59:59", "Slept"),
    ];

    let day = reconcile_day(&all, date("2025-03-02"));

    assert_eq!(day.len(), 2);
}

#[test]
fn test_synthetic_markers_keep_extra_columns() {
    let mut wake = ev("2025-03-02 08:00:00", "Woke Up");
    wake.note = "early".to_string();
    wake.extra = vec![("Baby".to_string(), "Mia".to_string())];

    let day = reconcile_day(&[wake], date("2025-03-02"));

    assert_eq!(day[0].note, "");
    assert_eq!(day[0].extra, vec![("Baby".to_string(), "Mia".to_string())]);
}

#[test]
fn test_only_events_of_the_date_are_used() {
    let all = vec![
        ev("2025-03-01 23:00:00", "Slept"),
        ev("2025-03-02 06:00:00", "Woke Up"),
    ];

    let day = reconcile_day(&all, date("2025-03-02"));

    assert!(day.iter().all(|e| e.date == date("2025-03-02")));
    assert_eq!(day[0].action, Action::Slept);
    assert!(day[0].synthetic);
}

#[test]
fn test_dates_present_newest_first() {
    let all = vec![
        ev("2025-03-01 09:00:00", "Fed"),
        ev("2025-03-03 09:00:00", "Fed"),
        ev("2025-03-01 12:00:00", "Fed"),
    ];

    assert_eq!(
        dates_present(&all),
        vec![date("2025-03-03"), date("2025-03-01")]
    );
}
