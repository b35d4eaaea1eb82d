// src/export/model.rs

use crate::models::timesheet_entry::TimesheetEntry;
use crate::utils::time::format_hours;
use serde::Serialize;

/// Flat view of an entry for JSON output and CLI tables.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: Option<i64>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub date_tracked: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub lunch_break_minutes: u32,
    pub hours_worked: f64,
    pub location: String,
    pub approval_status: String,
    pub approved_by: Option<String>,
}

impl From<&TimesheetEntry> for EntryExport {
    fn from(e: &TimesheetEntry) -> Self {
        let start = e.start_str();
        let end = e.end_str();
        Self {
            id: e.id,
            username: e.username.clone(),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            date_tracked: e.date_str(),
            start_time: (!start.is_empty()).then_some(start),
            end_time: (!end.is_empty()).then_some(end),
            lunch_break_minutes: e.lunch_break_minutes,
            hours_worked: e.hours_worked,
            location: e.location.clone(),
            approval_status: e.status().to_string(),
            approved_by: e.approved_by().map(str::to_string),
        }
    }
}

/// Headers of the `list` table.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "ID", "Employee", "Date", "In", "Out", "Lunch", "Hours", "Location", "Status", "By",
    ]
}

/// One `list` table row.
pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    let dash = || "--:--".to_string();
    vec![
        e.id.map(|id| id.to_string()).unwrap_or_default(),
        format!("{} {}", e.first_name, e.last_name),
        e.date_tracked.clone(),
        e.start_time.clone().unwrap_or_else(dash),
        e.end_time.clone().unwrap_or_else(dash),
        format!("{}m", e.lunch_break_minutes),
        format_hours(e.hours_worked),
        e.location.clone(),
        e.approval_status.clone(),
        e.approved_by.clone().unwrap_or_default(),
    ]
}

pub(crate) fn entries_to_table(entries: &[TimesheetEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| entry_to_row(&EntryExport::from(e)))
        .collect()
}
