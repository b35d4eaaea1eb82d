//! SQLite connection wrapper (one connection per CLI invocation).

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing database. `init` is the only command that creates one.
    pub fn new(path: &str) -> AppResult<Self> {
        if path != ":memory:" && !Path::new(path).exists() {
            return Err(AppError::Persistence(format!(
                "database '{}' not found, run `farmsheets init` first",
                path
            )));
        }
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// In-memory database with the schema applied (used by tests).
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        crate::db::initialize::init_db(&conn)?;
        Ok(Self { conn })
    }
}
