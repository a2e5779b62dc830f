use crate::models::action::Action;
use crate::models::event::{Event, sort_chronological};
use crate::utils::formatting::clock12;
use crate::utils::time::hour_of_day;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    Sleep,
    Awake,
}

#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub start_hour: f64, // fractional hour of day, 0.0..=24.0
    pub end_hour: f64,
}

impl Segment {
    fn new(kind: SegmentKind, start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        let start_hour = hour_of_day(&start);
        let mut end_hour = hour_of_day(&end);
        // a segment ending on the next midnight
        if end.date_naive() > start.date_naive() {
            end_hour = 24.0;
        }
        Self {
            kind,
            start,
            end,
            start_hour,
            end_hour,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    pub fn label(&self) -> String {
        let kind = match self.kind {
            SegmentKind::Sleep => "Sleep",
            SegmentKind::Awake => "Awake",
        };
        format!("{}: {} - {}", kind, clock12(&self.start), clock12(&self.end))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub action: Action,
    pub at: DateTime<Tz>,
    pub hour: f64,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct DayTimeline {
    pub sleep: Vec<Segment>,
    pub awake: Vec<Segment>,
    pub markers: Vec<Marker>,
}

/// Sleep and awake segments plus one marker per non-sleep event.
///
/// An awake segment runs from a `Woke Up` that closed a sleep to the next
/// `Slept`; a repeated `Slept` restarts the pending sleep.
pub fn build_timeline(day: &[Event]) -> DayTimeline {
    let mut sorted = day.to_vec();
    sort_chronological(&mut sorted);

    let mut timeline = DayTimeline::default();
    let mut sleep_start: Option<DateTime<Tz>> = None;
    let mut last_wake: Option<DateTime<Tz>> = None;

    for ev in &sorted {
        match ev.action {
            Action::Slept => {
                if let Some(woke) = last_wake.take() {
                    timeline
                        .awake
                        .push(Segment::new(SegmentKind::Awake, woke, ev.datetime));
                }
                sleep_start = Some(ev.datetime);
            }
            Action::WokeUp => {
                if let Some(start) = sleep_start.take() {
                    timeline
                        .sleep
                        .push(Segment::new(SegmentKind::Sleep, start, ev.datetime));
                    last_wake = Some(ev.datetime);
                }
            }
            _ => timeline.markers.push(Marker {
                action: ev.action.clone(),
                at: ev.datetime,
                hour: hour_of_day(&ev.datetime),
            }),
        }
    }

    timeline
}

impl DayTimeline {
    /// Text bar of `width` cells covering 00:00-24:00:
    /// `#` sleep, `=` awake, `.` unknown, `*` a marker.
    pub fn render_bar(&self, width: usize) -> String {
        let width = width.max(1);
        let mut cells = vec!['.'; width];
        let cell_of = |h: f64| ((h / 24.0) * width as f64).floor() as usize;

        for (segments, ch) in [(&self.awake, '='), (&self.sleep, '#')] {
            for seg in segments.iter() {
                let from = cell_of(seg.start_hour).min(width);
                let to = cell_of(seg.end_hour).min(width);
                for c in cells.iter_mut().take(to).skip(from) {
                    *c = ch;
                }
            }
        }

        for m in &self.markers {
            let idx = cell_of(m.hour).min(width - 1);
            cells[idx] = '*';
        }

        cells.into_iter().collect()
    }

    /// Hour axis matching `render_bar`, a tick every 6 hours.
    pub fn render_axis(width: usize) -> String {
        let width = width.max(1);
        let mut axis = vec![' '; width + 5];
        for h in [0usize, 6, 12, 18, 24] {
            let pos = (h * width) / 24;
            for (i, ch) in format!("{:02}", h).chars().enumerate() {
                if pos + i < axis.len() {
                    axis[pos + i] = ch;
                }
            }
        }
        axis.into_iter().collect::<String>().trim_end().to_string()
    }
}
