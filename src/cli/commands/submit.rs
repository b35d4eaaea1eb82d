use crate::cli::commands::{audit_or_warn, require_admin, signed_in_identity};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timesheet::TimesheetLogic;
use crate::core::user::UserLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::timesheet_entry::SessionInput;
use crate::ui::messages::success;
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        date,
        location,
        start,
        end,
        lunch,
        day_off,
        on_behalf,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let actor = signed_in_identity(&pool, cfg)?;

        let owner = match on_behalf {
            Some(username) if *username != actor.username => {
                require_admin(&actor, "submit timesheets for another user")?;
                UserLogic::lookup(&pool, username)?
            }
            _ => actor.clone(),
        };

        let input = SessionInput {
            date: date.clone(),
            start_time: start.clone(),
            end_time: end.clone(),
            lunch_break_minutes: *lunch,
            day_off: *day_off,
        };

        let entry = TimesheetLogic::submit(&mut pool, &owner, &input, location)?;
        let id = entry.id.unwrap_or_default();

        audit_or_warn(
            &pool.conn,
            "submit",
            &id.to_string(),
            &format!(
                "{} recorded {} h on {} at {} (by {})",
                owner.username,
                format_hours(entry.hours_worked),
                entry.date_str(),
                entry.location,
                actor.username
            ),
        );

        if entry.is_day_off() {
            success(format!(
                "Entry #{}: day off on {} for {} recorded (Pending).",
                id,
                entry.date_str(),
                entry.display_name()
            ));
        } else {
            success(format!(
                "Entry #{}: {} h on {} for {} recorded (Pending).",
                id,
                format_hours(entry.hours_worked),
                entry.date_str(),
                entry.display_name()
            ));
        }
    }

    Ok(())
}
