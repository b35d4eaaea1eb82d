use crate::errors::{AppError, AppResult};
use crate::models::location::SiteLocation;
use crate::models::patch::LocationPatch;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_location(row: &Row) -> Result<SiteLocation> {
    Ok(SiteLocation {
        id: row.get("id")?,
        name: row.get("location_name")?,
        description: row.get("location_description")?,
        lat: row.get("location_lat")?,
        long: row.get("location_long")?,
        year_purchased: row.get("year_purchased")?,
        size: row.get("location_size")?,
    })
}

pub fn insert_location(conn: &Connection, loc: &SiteLocation) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO locations (location_name, location_description, location_lat,
                                location_long, year_purchased, location_size)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            loc.name,
            loc.description,
            loc.lat,
            loc.long,
            loc.year_purchased,
            loc.size
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_location(conn: &Connection, name: &str) -> AppResult<Option<SiteLocation>> {
    let loc = conn
        .query_row(
            "SELECT * FROM locations WHERE location_name = ?1",
            [name],
            map_location,
        )
        .optional()?;
    Ok(loc)
}

/// All sites, by name.
pub fn load_locations(conn: &Connection) -> AppResult<Vec<SiteLocation>> {
    let mut stmt = conn.prepare("SELECT * FROM locations ORDER BY location_name ASC")?;
    let rows = stmt.query_map([], map_location)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn location_names(conn: &Connection) -> AppResult<Vec<String>> {
    Ok(load_locations(conn)?.into_iter().map(|l| l.name).collect())
}

/// Only the fields present in `patch` are written.
pub fn update_location(conn: &Connection, name: &str, patch: &LocationPatch) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE locations
         SET location_description = COALESCE(?1, location_description),
             location_lat         = COALESCE(?2, location_lat),
             location_long        = COALESCE(?3, location_long),
             year_purchased       = COALESCE(?4, year_purchased),
             location_size        = COALESCE(?5, location_size)
         WHERE location_name = ?6",
        params![
            patch.description,
            patch.lat,
            patch.long,
            patch.year_purchased,
            patch.size,
            name
        ],
    )?;
    if changed == 0 {
        return Err(AppError::UnknownLocation(name.to_string()));
    }
    Ok(())
}

pub fn delete_location(conn: &Connection, name: &str) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM locations WHERE location_name = ?1", [name])?;
    if changed == 0 {
        return Err(AppError::UnknownLocation(name.to_string()));
    }
    Ok(())
}

/// Number of timesheet entries recorded at `name`.
pub fn count_entries_at(conn: &Connection, name: &str) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM timesheets WHERE location = ?1",
        [name],
        |row| row.get(0),
    )?;
    Ok(n)
}
