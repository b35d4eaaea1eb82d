use crate::cli::commands::{acting_identity, require_admin};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::totals::{summarize_hours_by_employee, total_hours};
use crate::core::collection::filter_entries;
use crate::db::pool::DbPool;
use crate::db::store::TimesheetStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { filter } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let actor = acting_identity(&pool, cfg)?;
        require_admin(&actor, "view the hours summary")?;

        let selected = filter_entries(&pool.query()?, &filter.to_filter()?);
        if selected.is_empty() {
            info("No timesheets match the selected filters.");
            return Ok(());
        }

        header("Hours per employee");

        let mut table = Table::new(&["Employee", "Total Hours"]);
        for total in summarize_hours_by_employee(&selected) {
            table.add_row(vec![total.name, format_hours(total.hours)]);
        }
        table.add_row(vec!["TOTAL".into(), format_hours(total_hours(&selected))]);
        print!("{}", table.render());
    }

    Ok(())
}
