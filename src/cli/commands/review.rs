use crate::cli::commands::{audit_or_warn, require_admin, signed_in_identity};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timesheet::TimesheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Review { id, decision } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let reviewer = signed_in_identity(&pool, cfg)?;
        require_admin(&reviewer, "review timesheets")?;

        let entry = TimesheetLogic::review(&mut pool, *id, *decision, &reviewer)?;

        // a rejection clears approved_by, so the reviewer is only kept here
        audit_or_warn(
            &pool.conn,
            "review",
            &id.to_string(),
            &format!("{} by {}", entry.status(), reviewer.username),
        );

        success(format!(
            "Entry #{} ({}, {}) is now {}.",
            id,
            entry.display_name(),
            entry.date_str(),
            entry.status()
        ));
    }

    Ok(())
}
