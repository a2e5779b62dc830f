mod common;
use common::{at, date, ev};

use rbabylog::core::calculator::reconcile::reconcile_day;
use rbabylog::core::calculator::status::{last_seen, session_context};
use rbabylog::core::calculator::timeline::{DayTimeline, build_timeline};
use rbabylog::models::action::Action;

fn sample_day() -> Vec<rbabylog::models::event::Event> {
    let all = vec![
        ev("2025-03-01 23:00:00", "Slept"),
        ev("2025-03-02 06:00:00", "Woke Up"),
        ev("2025-03-02 06:30:00", "Fed"),
        ev("2025-03-02 07:00:00", "Diaper Change"),
        ev("2025-03-02 09:30:00", "Fed"),
    ];
    reconcile_day(&all, date("2025-03-02"))
}

#[test]
fn test_timeline_segments_and_markers() {
    let timeline = build_timeline(&sample_day());

    assert_eq!(timeline.sleep.len(), 1);
    assert_eq!(timeline.sleep[0].start_hour, 0.0);
    assert_eq!(timeline.sleep[0].end_hour, 6.0);
    assert_eq!(timeline.sleep[0].duration_hours(), 6.0);

    // awake from 06:00 until the synthesized 23:59:59 sleep
    assert_eq!(timeline.awake.len(), 1);
    assert_eq!(timeline.awake[0].start_hour, 6.0);
    assert!(timeline.awake[0].end_hour > 23.99);

    let hours: Vec<f64> = timeline.markers.iter().map(|m| m.hour).collect();
    assert_eq!(hours, vec![6.5, 7.0, 9.5]);
    assert_eq!(timeline.markers[1].action, Action::DiaperChange);
}

#[test]
fn test_segment_ending_next_day_reaches_24() {
    let events = vec![
        ev("2025-03-01 22:00:00", "Slept"),
        ev("2025-03-02 06:00:00", "Woke Up"),
    ];

    let timeline = build_timeline(&events);

    assert_eq!(timeline.sleep[0].start_hour, 22.0);
    assert_eq!(timeline.sleep[0].end_hour, 24.0);
}

#[test]
fn test_render_bar() {
    let bar = build_timeline(&sample_day()).render_bar(24);

    assert_eq!(bar.chars().count(), 24);
    assert!(bar.starts_with("######**=*"), "bar was {bar}");
    assert!(bar.ends_with("=."), "bar was {bar}");
}

#[test]
fn test_render_bar_empty_day() {
    let bar = build_timeline(&[]).render_bar(12);
    assert_eq!(bar, "............");
}

#[test]
fn test_render_axis() {
    assert_eq!(DayTimeline::render_axis(24), "00    06    12    18    24");
}

#[test]
fn test_session_context_follows_last_marker() {
    let mut all = vec![
        ev("2025-03-02 06:00:00", "Woke Up"),
        ev("2025-03-02 09:30:00", "Fed"),
    ];

    let ctx = session_context(&all);
    assert!(!ctx.is_sleeping);
    assert_eq!(ctx.last_action, Some(Action::Fed));

    all.push(ev("2025-03-02 13:00:00", "Slept"));
    assert!(session_context(&all).is_sleeping);

    assert!(!session_context(&[]).is_sleeping);
    assert_eq!(session_context(&[]).last_action, None);
}

#[test]
fn test_last_seen_per_action() {
    let all = vec![
        ev("2025-03-02 06:30:00", "Fed"),
        ev("2025-03-02 09:30:00", "Fed"),
        ev("2025-03-02 07:00:00", "Diaper Change"),
        ev("2025-03-02 13:00:00", "Water"),
    ];

    let seen = last_seen(&all, at("2025-03-02 12:00:00"));

    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].action, Action::Fed);
    assert_eq!(seen[0].at, at("2025-03-02 09:30:00"));
    assert_eq!(seen[0].elapsed_label(), "2h 30m ago");
    assert_eq!(seen[1].elapsed_label(), "5h 0m ago");
    // logged ahead of now
    assert_eq!(seen[2].elapsed_label(), "in 1h 0m");
}
