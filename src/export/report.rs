// src/export/report.rs

use crate::core::calculator::totals::summarize_hours_by_employee;
use crate::errors::{AppError, AppResult};
use crate::models::timesheet_entry::TimesheetEntry;
use crate::utils::time::format_hours;
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const DETAIL_HEADERS: [&str; 9] = [
    "First Name",
    "Last Name",
    "Date",
    "Start Time",
    "End Time",
    "Hours Worked",
    "Location",
    "Approved By",
    "Status",
];

pub const SUMMARY_HEADERS: [&str; 2] = ["Employee Name", "Total Hours"];

fn detail_row(e: &TimesheetEntry) -> [String; 9] {
    [
        e.first_name.clone(),
        e.last_name.clone(),
        e.date_str(),
        e.start_str(),
        e.end_str(),
        format_hours(e.hours_worked),
        e.location.clone(),
        e.approved_by().unwrap_or("N/A").to_string(),
        e.status().to_string(),
    ]
}

fn csv_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("CSV write error: {e}"))
}

/// Payroll report for `entries`: a detail section, a blank line, then a
/// per-employee summary section.
///
/// Fields holding a comma, quote or line break are quoted. The output only
/// depends on `entries`, so equal inputs give byte-identical reports.
pub fn build_payroll_report(entries: &[TimesheetEntry]) -> AppResult<String> {
    if entries.is_empty() {
        return Err(AppError::Validation(
            "No timesheets available in the selected range.".into(),
        ));
    }

    let details = entries.iter().map(|e| detail_row(e).to_vec());
    let summary = summarize_hours_by_employee(entries)
        .into_iter()
        .map(|t| vec![t.name, format_hours(t.hours)]);

    let mut bytes = write_section(&DETAIL_HEADERS, details)?;
    bytes.push(b'\n');
    bytes.extend(write_section(&SUMMARY_HEADERS, summary)?);

    String::from_utf8(bytes).map_err(csv_err)
}

fn write_section<I>(headers: &[&str], rows: I) -> AppResult<Vec<u8>>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(headers).map_err(csv_err)?;
    for row in rows {
        wtr.write_record(&row).map_err(csv_err)?;
    }

    wtr.into_inner().map_err(csv_err)
}
