use crate::cli::commands::audit_or_warn;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::{init_db, seed_locations};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
///  - the work sites listed under `locations` in the config
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing farmsheets…");
    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", db_path));

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    let seeded = seed_locations(&conn, &cfg.locations)?;
    if seeded > 0 {
        info(format!("Registered {} location(s) from the config", seeded));
    }

    audit_or_warn(
        &conn,
        "init",
        &db_path,
        &format!("Database initialized at {}", db_path),
    );

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
