#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use farmsheets::models::approval::ApprovalState;
use farmsheets::models::identity::{Identity, Role};
use farmsheets::models::timesheet_entry::TimesheetEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fsh() -> Command {
    cargo_bin_cmd!("farmsheets")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_farmsheets.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB with one admin (`boss`), two employees (`jdoe`, `msmith`)
/// and two work sites (`North Field`, `Orchard`).
pub fn init_farm(db_path: &str) {
    fsh()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (user, first, last, role) in [
        ("boss", "Ada", "Boss", "admin"),
        ("jdoe", "John", "Doe", "employee"),
        ("msmith", "Mary", "Smith", "employee"),
    ] {
        fsh()
            .args([
                "--db", db_path, "user", "add", user, "--first", first, "--last", last, "--role",
                role,
            ])
            .assert()
            .success();
    }

    for site in ["North Field", "Orchard"] {
        fsh()
            .args(["--db", db_path, "location", "add", site])
            .assert()
            .success();
    }
}

/// Submit a worked session through the CLI as `user`.
pub fn submit(db_path: &str, user: &str, date: &str, start: &str, end: &str, lunch: &str) {
    fsh()
        .args([
            "--db",
            db_path,
            "--as",
            user,
            "submit",
            date,
            "--location",
            "North Field",
            "--in",
            start,
            "--out",
            end,
            "--lunch",
            lunch,
        ])
        .assert()
        .success();
}

pub fn admin() -> Identity {
    Identity::new("boss", Role::Admin, "Ada", "Boss")
}

pub fn employee(username: &str, first: &str, last: &str) -> Identity {
    Identity::new(username, Role::Employee, first, last)
}

/// Stored-looking entry for the pure collection and report functions.
pub fn entry(
    id: i64,
    first: &str,
    last: &str,
    date: &str,
    times: Option<(&str, &str)>,
    hours: f64,
    location: &str,
    approval: ApprovalState,
) -> TimesheetEntry {
    let (start, end) = match times {
        Some((s, e)) => (
            NaiveTime::parse_from_str(s, "%H:%M").ok(),
            NaiveTime::parse_from_str(e, "%H:%M").ok(),
        ),
        None => (None, None),
    };

    TimesheetEntry {
        id: Some(id),
        username: first.to_lowercase(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_tracked: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"),
        start_time: start,
        end_time: end,
        lunch_break_minutes: 0,
        hours_worked: hours,
        location: location.to_string(),
        approval,
        created_at: "2025-03-01T08:00:00+00:00".to_string(),
    }
}
