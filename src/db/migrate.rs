use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A named schema step. Applied steps are recorded in `log` as
/// `migration_applied` rows keyed by `version`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_users",
        description: "Created users table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL UNIQUE,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL,
            role        TEXT NOT NULL DEFAULT 'employee' CHECK(role IN ('admin','employee')),
            last_login  TEXT
        );
        "#,
    },
    Migration {
        version: "20250301_0002_create_locations",
        description: "Created locations table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS locations (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            location_name         TEXT NOT NULL UNIQUE,
            location_description  TEXT,
            location_lat          REAL,
            location_long         REAL,
            year_purchased        INTEGER,
            location_size         TEXT
        );
        "#,
    },
    Migration {
        version: "20250301_0003_create_timesheets",
        description: "Created timesheets table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS timesheets (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            username             TEXT NOT NULL,
            first_name           TEXT NOT NULL,
            last_name            TEXT NOT NULL,
            date_tracked         TEXT NOT NULL,
            start_time           TEXT,
            end_time             TEXT,
            lunch_break_minutes  INTEGER NOT NULL DEFAULT 0 CHECK(lunch_break_minutes >= 0),
            hours_worked         REAL NOT NULL DEFAULT 0 CHECK(hours_worked >= 0),
            location             TEXT NOT NULL,
            approval_status      TEXT NOT NULL DEFAULT 'Pending'
                                 CHECK(approval_status IN ('Pending','Approved','Rejected')),
            approved_by          TEXT,
            created_at           TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250412_0004_timesheets_indexes",
        description: "Added timesheets indexes",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_timesheets_date ON timesheets(date_tracked);
        CREATE INDEX IF NOT EXISTS idx_timesheets_user_date ON timesheets(username, date_tracked);
        CREATE INDEX IF NOT EXISTS idx_timesheets_status ON timesheets(approval_status);
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()
}

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
