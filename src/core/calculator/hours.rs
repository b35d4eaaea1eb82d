use crate::errors::{AppError, AppResult};
use crate::models::timesheet_entry::SessionInput;
use crate::utils::date::parse_date;
use crate::utils::time::{parse_time, round2};
use chrono::{NaiveDate, NaiveTime};

/// Validated session values plus the derived hours.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkedHours {
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub lunch_break_minutes: u32,
    pub hours_worked: f64,
}

/// Turn raw session input into `hours_worked`.
///
/// - a day off ignores every time field and yields 0 hours, no times, no lunch;
/// - otherwise both times are required and the end must be strictly after
///   the start on `date`;
/// - lunch is subtracted and the result clamped at 0, so a lunch longer
///   than the shift gives 0 hours rather than an error.
pub fn compute_hours_worked(input: &SessionInput) -> AppResult<WorkedHours> {
    let date_raw = input.date.trim();
    if date_raw.is_empty() {
        return Err(AppError::Validation("A date is required.".into()));
    }
    let date = parse_date(date_raw).ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;

    if input.day_off {
        return Ok(WorkedHours {
            date,
            start_time: None,
            end_time: None,
            lunch_break_minutes: 0,
            hours_worked: 0.0,
        });
    }

    let (start_raw, end_raw) = match (non_empty(&input.start_time), non_empty(&input.end_time)) {
        (Some(s), Some(e)) => (s, e),
        _ => {
            return Err(AppError::Validation(
                "Both start and end time are required unless the day is off.".into(),
            ));
        }
    };

    let start =
        parse_time(start_raw).ok_or_else(|| AppError::InvalidTime(start_raw.to_string()))?;
    let end = parse_time(end_raw).ok_or_else(|| AppError::InvalidTime(end_raw.to_string()))?;

    let start_at = date.and_time(start);
    let end_at = date.and_time(end);
    if end_at <= start_at {
        return Err(AppError::Validation(
            "End time must be after start time.".into(),
        ));
    }

    let span_minutes = (end_at - start_at).num_minutes();

    Ok(WorkedHours {
        date,
        start_time: Some(start),
        end_time: Some(end),
        lunch_break_minutes: input.lunch_break_minutes,
        hours_worked: net_hours(span_minutes, input.lunch_break_minutes),
    })
}

/// `max(0, span - lunch)` in hours, 2 decimals.
pub fn net_hours(span_minutes: i64, lunch_minutes: u32) -> f64 {
    let net = (span_minutes - i64::from(lunch_minutes)).max(0);
    round2(net as f64 / 60.0)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
