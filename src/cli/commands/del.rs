use crate::cli::commands::{ask_confirmation, audit_or_warn, require_admin, signed_in_identity};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timesheet::TimesheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let actor = signed_in_identity(&pool, cfg)?;
        require_admin(&actor, "delete timesheets")?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete entry #{}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = TimesheetLogic::delete(&mut pool, *id)?;

        audit_or_warn(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!(
                "{} deleted {}'s entry of {}",
                actor.username,
                removed.username,
                removed.date_str()
            ),
        );

        success(format!(
            "Entry #{} ({}, {}) has been deleted.",
            id,
            removed.display_name(),
            removed.date_str()
        ));
    }

    Ok(())
}
