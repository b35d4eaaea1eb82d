use crate::models::timesheet_entry::TimesheetEntry;
use crate::utils::time::round2;

/// Total hours of one employee over a set of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTotal {
    pub name: String,
    pub hours: f64,
}

/// Sum `hours_worked` per `"First Last"`, keeping the order in which each
/// employee first appears in `entries`.
pub fn summarize_hours_by_employee(entries: &[TimesheetEntry]) -> Vec<EmployeeTotal> {
    let mut totals: Vec<EmployeeTotal> = Vec::new();

    for entry in entries {
        let name = entry.display_name();
        match totals.iter_mut().find(|t| t.name == name) {
            Some(total) => total.hours += entry.hours_worked,
            None => totals.push(EmployeeTotal {
                name,
                hours: entry.hours_worked,
            }),
        }
    }

    // stored values have 2 decimals, the float sum may not
    for total in &mut totals {
        total.hours = round2(total.hours);
    }

    totals
}

pub fn total_hours(entries: &[TimesheetEntry]) -> f64 {
    round2(entries.iter().map(|e| e.hours_worked).sum())
}
