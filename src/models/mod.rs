pub mod action;
pub mod day_summary;
pub mod event;
pub mod night_window;
pub mod sleep_interval;
