use crate::cli::commands::audit_or_warn;
use crate::cli::parser::{Commands, LocationAction, LocationArgs};
use crate::config::Config;
use crate::core::location::LocationLogic;
use crate::db::locations::load_locations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::location::SiteLocation;
use crate::models::patch::LocationPatch;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

impl LocationArgs {
    fn to_patch(&self) -> LocationPatch {
        LocationPatch {
            description: self.description.clone(),
            lat: self.lat,
            long: self.long,
            year_purchased: self.year,
            size: self.size.clone(),
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Location { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            LocationAction::Add { name, details } => {
                let loc = SiteLocation {
                    description: details.description.clone(),
                    lat: details.lat,
                    long: details.long,
                    year_purchased: details.year,
                    size: details.size.clone(),
                    ..SiteLocation::new(name)
                };
                let stored = LocationLogic::add(&pool, &loc)?;
                audit_or_warn(&pool.conn, "location_add", &stored.name, "Location added");
                success(format!("Location '{}' added.", stored.name));
            }

            LocationAction::List => {
                let sites = load_locations(&pool.conn)?;
                if sites.is_empty() {
                    info("No locations registered.");
                    return Ok(());
                }

                let mut table =
                    Table::new(&["Name", "Description", "Coordinates", "Purchased", "Size"]);
                for s in &sites {
                    table.add_row(vec![
                        s.name.clone(),
                        s.description.clone().unwrap_or_default(),
                        s.coordinates().unwrap_or_default(),
                        s.year_purchased.map(|y| y.to_string()).unwrap_or_default(),
                        s.size.clone().unwrap_or_default(),
                    ]);
                }
                print!("{}", table.render());
            }

            LocationAction::Edit { name, details } => {
                let updated = LocationLogic::edit(&pool, name, &details.to_patch())?;
                audit_or_warn(&pool.conn, "location_edit", &updated.name, "Location updated");
                success(format!("Location '{}' updated.", updated.name));
            }

            LocationAction::Del { name } => {
                let referenced = LocationLogic::remove(&pool, name)?;
                audit_or_warn(&pool.conn, "location_del", name, "Location removed");
                success(format!("Location '{}' removed.", name));
                if referenced > 0 {
                    warning(format!(
                        "{} timesheet entries still reference '{}'.",
                        referenced, name
                    ));
                }
            }
        }
    }

    Ok(())
}
