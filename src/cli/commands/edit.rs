use crate::cli::commands::{audit_or_warn, signed_in_identity};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timesheet::TimesheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::patch::TimesheetPatch;
use crate::ui::messages::success;
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        start,
        end,
        lunch,
        location,
        day_off,
        worked,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let actor = signed_in_identity(&pool, cfg)?;

        let day_off = match (*day_off, *worked) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        let patch = TimesheetPatch {
            date: date.clone(),
            start_time: start.clone(),
            end_time: end.clone(),
            lunch_break_minutes: *lunch,
            location: location.clone(),
            day_off,
        };

        let entry = TimesheetLogic::edit(&mut pool, *id, &patch, &actor)?;

        audit_or_warn(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!(
                "{} set {} h on {} at {}",
                actor.username,
                format_hours(entry.hours_worked),
                entry.date_str(),
                entry.location
            ),
        );

        success(format!(
            "Entry #{} updated: {} h on {} at {}.",
            id,
            format_hours(entry.hours_worked),
            entry.date_str(),
            entry.location
        ));
    }

    Ok(())
}
