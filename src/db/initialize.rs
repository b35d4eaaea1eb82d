use crate::db::locations::insert_location;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::models::location::SiteLocation;
use rusqlite::{Connection, OptionalExtension};

/// Initialize the database.
/// Schema comes only from the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Register the work sites listed in the config. Existing names are skipped.
/// Returns how many sites were added.
pub fn seed_locations(conn: &Connection, names: &[String]) -> AppResult<usize> {
    let mut added = 0;

    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        let exists = conn
            .query_row(
                "SELECT 1 FROM locations WHERE location_name = ?1",
                [name],
                |_| Ok(()),
            )
            .optional()?
            .is_some();

        if !exists {
            insert_location(conn, &SiteLocation::new(name))?;
            added += 1;
        }
    }

    Ok(added)
}
