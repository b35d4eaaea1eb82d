use crate::db::locations::{
    count_entries_at, delete_location, find_location, insert_location, update_location,
};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::location::SiteLocation;
use crate::models::patch::LocationPatch;

/// Management of the farm's named work sites.
pub struct LocationLogic;

impl LocationLogic {
    pub fn add(pool: &DbPool, loc: &SiteLocation) -> AppResult<SiteLocation> {
        let name = loc.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("A location name is required.".into()));
        }
        check_coordinates(loc.lat, loc.long)?;

        if find_location(&pool.conn, name)?.is_some() {
            return Err(AppError::Validation(format!(
                "Location '{}' already exists.",
                name
            )));
        }

        let mut stored = loc.clone();
        stored.name = name.to_string();
        stored.id = insert_location(&pool.conn, &stored)?;
        Ok(stored)
    }

    pub fn edit(pool: &DbPool, name: &str, patch: &LocationPatch) -> AppResult<SiteLocation> {
        if patch.is_empty() {
            return Err(AppError::Validation("Nothing to change.".into()));
        }
        check_coordinates(patch.lat, patch.long)?;

        update_location(&pool.conn, name, patch)?;
        find_location(&pool.conn, name)?.ok_or_else(|| AppError::UnknownLocation(name.into()))
    }

    /// Delete a site. Entries already recorded there keep the name.
    /// Returns how many entries reference it.
    pub fn remove(pool: &DbPool, name: &str) -> AppResult<i64> {
        let referenced = count_entries_at(&pool.conn, name)?;
        delete_location(&pool.conn, name)?;
        Ok(referenced)
    }
}

fn check_coordinates(lat: Option<f64>, long: Option<f64>) -> AppResult<()> {
    if let Some(lat) = lat
        && !(-90.0..=90.0).contains(&lat)
    {
        return Err(AppError::Validation(format!(
            "Latitude {} is out of range (-90..90).",
            lat
        )));
    }
    if let Some(long) = long
        && !(-180.0..=180.0).contains(&long)
    {
        return Err(AppError::Validation(format!(
            "Longitude {} is out of range (-180..180).",
            long
        )));
    }
    Ok(())
}
