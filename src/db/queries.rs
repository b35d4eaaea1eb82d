use crate::db::store::SessionChange;
use crate::errors::{AppError, AppResult};
use crate::models::approval::{ApprovalState, ApprovalStatus};
use crate::models::timesheet_entry::TimesheetEntry;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRY: &str = "SELECT id, username, first_name, last_name, date_tracked,
        start_time, end_time, lunch_break_minutes, hours_worked, location,
        approval_status, approved_by, created_at
 FROM timesheets";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err))
}

fn parse_db_time(value: Option<String>) -> Result<Option<NaiveTime>> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveTime::parse_from_str(&s, "%H:%M")
            .map(Some)
            .map_err(|_| conversion_error(AppError::InvalidTime(s))),
    }
}

fn fmt_db_time(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format("%H:%M").to_string())
}

pub fn map_row(row: &Row) -> Result<TimesheetEntry> {
    let date_str: String = row.get("date_tracked")?;
    let date_tracked = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let start_time = parse_db_time(row.get("start_time")?)?;
    let end_time = parse_db_time(row.get("end_time")?)?;

    let status_str: String = row.get("approval_status")?;
    let status = ApprovalStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(AppError::Persistence(format!(
            "Invalid approval status: {}",
            status_str
        )))
    })?;

    let approved_by: Option<String> = row.get("approved_by")?;
    let id: i64 = row.get("id")?;
    let approval = ApprovalState::from_columns(status, approved_by).ok_or_else(|| {
        conversion_error(AppError::Persistence(format!(
            "Entry #{} is Approved without a reviewer",
            id
        )))
    })?;

    Ok(TimesheetEntry {
        id: Some(id),
        username: row.get("username")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        date_tracked,
        start_time,
        end_time,
        lunch_break_minutes: row.get("lunch_break_minutes")?,
        hours_worked: row.get("hours_worked")?,
        location: row.get("location")?,
        approval,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_entry(conn: &Connection, entry: &TimesheetEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO timesheets (username, first_name, last_name, date_tracked,
                                 start_time, end_time, lunch_break_minutes, hours_worked,
                                 location, approval_status, approved_by, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            entry.username,
            entry.first_name,
            entry.last_name,
            entry.date_str(),
            fmt_db_time(entry.start_time),
            fmt_db_time(entry.end_time),
            entry.lunch_break_minutes,
            entry.hours_worked,
            entry.location,
            entry.status().to_db_str(),
            entry.approved_by(),
            entry.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn expect_one(id: i64, changed: usize) -> AppResult<()> {
    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

/// Write approval_status + approved_by only.
pub fn update_review(conn: &Connection, id: i64, state: &ApprovalState) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE timesheets SET approval_status = ?1, approved_by = ?2 WHERE id = ?3",
        params![state.status().to_db_str(), state.approved_by(), id],
    )?;
    expect_one(id, changed)
}

/// Write the session columns only.
pub fn update_session(conn: &Connection, id: i64, s: &SessionChange) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE timesheets
         SET date_tracked = ?1, start_time = ?2, end_time = ?3,
             lunch_break_minutes = ?4, hours_worked = ?5, location = ?6
         WHERE id = ?7",
        params![
            s.date_tracked.format("%Y-%m-%d").to_string(),
            fmt_db_time(s.start_time),
            fmt_db_time(s.end_time),
            s.lunch_break_minutes,
            s.hours_worked,
            s.location,
            id,
        ],
    )?;
    expect_one(id, changed)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM timesheets WHERE id = ?1", [id])?;
    expect_one(id, changed)
}

pub fn find_entry(conn: &Connection, id: i64) -> AppResult<Option<TimesheetEntry>> {
    let sql = format!("{SELECT_ENTRY} WHERE id = ?1");
    let entry = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(entry)
}

/// All entries, newest date first (ties: newest id first).
pub fn load_entries(conn: &Connection) -> AppResult<Vec<TimesheetEntry>> {
    let sql = format!("{SELECT_ENTRY} ORDER BY date_tracked DESC, id DESC");
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
