mod common;
use common::{at, date, ev};

use rbabylog::core::calculator::summary::{OpenSleepPolicy, pair_sleep_global, rolling_summary};

#[test]
fn test_sleep_across_midnight_is_split_between_days() {
    let all = vec![
        ev("2025-03-01 21:00:00", "Slept"),
        ev("2025-03-02 06:00:00", "Woke Up"),
        ev("2025-03-02 13:00:00", "Slept"),
        ev("2025-03-02 14:30:00", "Woke Up"),
    ];

    let rows = rolling_summary(
        &all,
        date("2025-03-02"),
        2,
        at("2025-03-02 20:00:00"),
        OpenSleepPolicy::Extend,
    );

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, date("2025-03-02"));
    assert_eq!(rows[0].sleep_seconds, 6 * 3600 + 5400);
    assert_eq!(rows[0].sleep_duration(), "7h 30m");
    assert_eq!(rows[1].date, date("2025-03-01"));
    assert_eq!(rows[1].sleep_seconds, 3 * 3600);
    assert_eq!(rows[1].sleep_duration(), "3h 0m");
}

#[test]
fn test_counts_per_day() {
    let all = vec![
        ev("2025-03-02 06:30:00", "Fed"),
        ev("2025-03-02 09:30:00", "Fed"),
        ev("2025-03-02 11:00:00", "Solid Food"),
        ev("2025-03-02 07:00:00", "Diaper Change"),
        ev("2025-03-02 12:00:00", "Bath"),
        ev("2025-03-01 18:00:00", "Fed"),
    ];

    let rows = rolling_summary(
        &all,
        date("2025-03-02"),
        3,
        at("2025-03-02 20:00:00"),
        OpenSleepPolicy::Extend,
    );

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].fed_count, 2);
    assert_eq!(rows[0].solid_food_count, 1);
    assert_eq!(rows[0].diaper_count, 1);
    assert_eq!(rows[1].fed_count, 1);
    assert_eq!(rows[2].fed_count, 0);
    assert_eq!(rows[2].sleep_seconds, 0);
}

#[test]
fn test_open_sleep_policy() {
    let all = vec![
        ev("2025-03-02 01:00:00", "Slept"),
        ev("2025-03-02 08:30:00", "Woke Up"),
        ev("2025-03-02 20:00:00", "Slept"),
    ];
    let now = at("2025-03-02 22:00:00");

    let extended = rolling_summary(&all, date("2025-03-02"), 1, now, OpenSleepPolicy::Extend);
    let dropped = rolling_summary(&all, date("2025-03-02"), 1, now, OpenSleepPolicy::Drop);

    assert_eq!(extended[0].sleep_seconds, 34200);
    assert_eq!(dropped[0].sleep_seconds, 27000);
}

#[test]
fn test_open_sleep_in_the_future_is_not_extended() {
    let all = vec![ev("2025-03-02 23:00:00", "Slept")];

    let rows = rolling_summary(
        &all,
        date("2025-03-02"),
        1,
        at("2025-03-02 22:00:00"),
        OpenSleepPolicy::Extend,
    );

    assert_eq!(rows[0].sleep_seconds, 0);
}

#[test]
fn test_global_pairing_consumes_each_wake_once() {
    let all = vec![
        ev("2025-03-02 10:00:00", "Slept"),
        ev("2025-03-02 11:00:00", "Slept"),
        ev("2025-03-02 12:00:00", "Woke Up"),
        ev("2025-03-02 13:00:00", "Woke Up"),
    ];

    let pairs = pair_sleep_global(&all);

    assert_eq!(
        pairs,
        vec![
            (at("2025-03-02 10:00:00"), Some(at("2025-03-02 12:00:00"))),
            (at("2025-03-02 11:00:00"), Some(at("2025-03-02 13:00:00"))),
        ]
    );
}

#[test]
fn test_global_pairing_leaves_unmatched_sleep_open() {
    let all = vec![
        ev("2025-03-02 09:00:00", "Woke Up"),
        ev("2025-03-02 10:00:00", "Slept"),
    ];

    let pairs = pair_sleep_global(&all);

    assert_eq!(pairs, vec![(at("2025-03-02 10:00:00"), None)]);
}

#[test]
fn test_policy_parses_from_config_value() {
    let p: OpenSleepPolicy = serde_yaml::from_str("drop").expect("policy");
    assert_eq!(p, OpenSleepPolicy::Drop);
    assert_eq!(OpenSleepPolicy::default(), OpenSleepPolicy::Extend);
}

#[test]
fn test_repeated_slept_does_not_extend_to_now() {
    let all = vec![
        ev("2025-03-01 20:00:00", "Slept"),
        ev("2025-03-01 20:30:00", "Slept"),
        ev("2025-03-02 06:00:00", "Woke Up"),
        ev("2025-03-02 09:00:00", "Fed"),
    ];

    let rows = rolling_summary(
        &all,
        date("2025-03-04"),
        4,
        at("2025-03-04 12:00:00"),
        OpenSleepPolicy::Extend,
    );

    assert!(rows.iter().all(|r| r.sleep_seconds <= 86400));
    assert_eq!(rows[0].sleep_seconds, 0);
    assert_eq!(rows[1].sleep_seconds, 0);
    assert_eq!(rows[2].sleep_seconds, 6 * 3600);
    assert_eq!(rows[3].sleep_seconds, 4 * 3600);
}

#[test]
fn test_only_sleep_after_last_wake_is_extended() {
    let all = vec![
        ev("2025-03-02 10:00:00", "Slept"),
        ev("2025-03-02 11:00:00", "Slept"),
        ev("2025-03-02 12:00:00", "Woke Up"),
        ev("2025-03-02 20:00:00", "Slept"),
    ];

    let rows = rolling_summary(
        &all,
        date("2025-03-02"),
        1,
        at("2025-03-02 22:00:00"),
        OpenSleepPolicy::Extend,
    );

    // 10:00-12:00 plus 20:00-now; 11:00 lost its wake to 10:00
    assert_eq!(rows[0].sleep_seconds, 4 * 3600);
}
