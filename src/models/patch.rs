//! Partial-update types. Each lists exactly the fields a caller may change.

use super::timesheet_entry::SessionInput;

/// Changes to the session part of a timesheet entry.
/// Owner identity and approval state are not patchable here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimesheetPatch {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub lunch_break_minutes: Option<u32>,
    pub location: Option<String>,
    pub day_off: Option<bool>,
}

impl TimesheetPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the patch over the current form values.
    ///
    /// Giving a start or end time on a day-off entry turns it back into a
    /// worked session unless `day_off` is given explicitly.
    pub fn apply_to(&self, current: &SessionInput) -> SessionInput {
        let sets_time = self.start_time.is_some() || self.end_time.is_some();
        let day_off = self
            .day_off
            .unwrap_or(if sets_time { false } else { current.day_off });

        SessionInput {
            date: self.date.clone().unwrap_or_else(|| current.date.clone()),
            start_time: self
                .start_time
                .clone()
                .or_else(|| current.start_time.clone()),
            end_time: self.end_time.clone().or_else(|| current.end_time.clone()),
            lunch_break_minutes: self
                .lunch_break_minutes
                .unwrap_or(current.lunch_break_minutes),
            day_off,
        }
    }
}

/// Changes to a farm location. The name is the key and is not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPatch {
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub year_purchased: Option<i32>,
    pub size: Option<String>,
}

impl LocationPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
