use super::approval::{ApprovalState, ApprovalStatus};
use chrono::{Local, NaiveDate, NaiveTime};

/// One work session (or day-off marker) of one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetEntry {
    pub id: Option<i64>,          // ⇔ timesheets.id, None until first save
    pub username: String,         // ⇔ timesheets.username
    pub first_name: String,       // ⇔ timesheets.first_name
    pub last_name: String,        // ⇔ timesheets.last_name
    pub date_tracked: NaiveDate,  // ⇔ timesheets.date_tracked (TEXT "YYYY-MM-DD")
    pub start_time: Option<NaiveTime>, // ⇔ timesheets.start_time (TEXT "HH:MM", NULL on a day off)
    pub end_time: Option<NaiveTime>,   // ⇔ timesheets.end_time
    pub lunch_break_minutes: u32, // ⇔ timesheets.lunch_break_minutes
    pub hours_worked: f64,        // ⇔ timesheets.hours_worked (REAL, 2 decimals)
    pub location: String,         // ⇔ timesheets.location (locations.location_name)
    pub approval: ApprovalState,  // ⇔ timesheets.approval_status + approved_by
    pub created_at: String,       // ⇔ timesheets.created_at (TEXT, ISO8601)
}

impl TimesheetEntry {
    pub fn status(&self) -> ApprovalStatus {
        self.approval.status()
    }

    pub fn approved_by(&self) -> Option<&str> {
        self.approval.approved_by()
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_day_off(&self) -> bool {
        self.start_time.is_none() && self.end_time.is_none()
    }

    pub fn date_str(&self) -> String {
        self.date_tracked.format("%Y-%m-%d").to_string()
    }

    /// `HH:MM`, or an empty string on a day off.
    pub fn start_str(&self) -> String {
        fmt_time(self.start_time)
    }

    pub fn end_str(&self) -> String {
        fmt_time(self.end_time)
    }
}

fn fmt_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Raw session values as typed into a form, before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionInput {
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub lunch_break_minutes: u32,
    pub day_off: bool,
}

impl SessionInput {
    pub fn worked(date: &str, start: &str, end: &str, lunch: u32) -> Self {
        Self {
            date: date.to_string(),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            lunch_break_minutes: lunch,
            day_off: false,
        }
    }

    pub fn day_off(date: &str) -> Self {
        Self {
            date: date.to_string(),
            day_off: true,
            ..Self::default()
        }
    }

    /// The values currently stored in `entry`, in form shape.
    pub fn from_entry(entry: &TimesheetEntry) -> Self {
        let start = entry.start_str();
        let end = entry.end_str();
        Self {
            date: entry.date_str(),
            start_time: (!start.is_empty()).then_some(start),
            end_time: (!end.is_empty()).then_some(end),
            lunch_break_minutes: entry.lunch_break_minutes,
            day_off: entry.is_day_off(),
        }
    }
}

pub(crate) fn now_iso() -> String {
    Local::now().to_rfc3339()
}
