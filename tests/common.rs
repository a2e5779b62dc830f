#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use rbabylog::models::action::Action;
use rbabylog::models::event::Event;
use rbabylog::sheet::SheetTable;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real config file.
pub fn rbl() -> Command {
    let mut cmd = cargo_bin_cmd!("rbabylog");
    cmd.env("HOME", env::temp_dir().join("rbabylog_test_home"))
        .env("NO_COLOR", "1");
    cmd
}

pub fn tz() -> Tz {
    chrono_tz::Asia::Kolkata
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// "YYYY-MM-DD HH:MM:SS" in the test timezone.
pub fn at(s: &str) -> DateTime<Tz> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid datetime");
    naive.and_local_timezone(tz()).single().expect("unambiguous")
}

pub fn ev(s: &str, label: &str) -> Event {
    Event::at(at(s), Action::from_label(label).expect("label"), "")
}

/// Build events the way the sheet loader does (row numbers included).
pub fn table(rows: &[[&str; 4]]) -> SheetTable {
    let mut values = vec![vec![
        "Date".to_string(),
        "Time".to_string(),
        "Action".to_string(),
        "Note".to_string(),
    ]];
    values.extend(
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect::<Vec<_>>()),
    );
    SheetTable::from_values(values)
}

/// Create a unique sheet path inside the system temp dir and remove any existing file
pub fn setup_test_sheet(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbabylog.csv", name));
    let sheet_path = path.to_string_lossy().to_string();
    fs::remove_file(&sheet_path).ok();
    sheet_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Init a sheet and record one night, a morning feed and a diaper change.
pub fn init_sheet_with_data(sheet: &str) {
    rbl()
        .args(["--sheet", sheet, "--test", "init"])
        .assert()
        .success();

    for (action, when) in [
        ("Slept", "2025-03-01 23:00:00"),
        ("Woke Up", "2025-03-02 06:00:00"),
        ("Fed", "2025-03-02 06:30:00"),
        ("Diaper Change", "2025-03-02 07:00:00"),
        ("Fed", "2025-03-02 09:30:00"),
    ] {
        rbl()
            .args(["--sheet", sheet, "add", action, "--at", when])
            .assert()
            .success();
    }
}
