use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// One row of the internal audit log.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an audit line into the `log` table.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Audit lines, newest first. Migration markers are left out.
pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare(
        "SELECT date, operation, target, message FROM log
         WHERE operation <> 'migration_applied'
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            date: row.get(0)?,
            operation: row.get(1)?,
            target: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            message: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
