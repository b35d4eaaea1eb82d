use crate::cli::commands::{acting_identity, require_admin};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::collection::{EntryFilter, filter_entries, latest_submitted, paginate};
use crate::db::pool::DbPool;
use crate::db::store::TimesheetStore;
use crate::errors::AppResult;
use crate::export::{entries_to_table, get_headers};
use crate::models::approval::ApprovalStatus;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Most recently submitted entries still waiting for a review.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pending { limit } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let actor = acting_identity(&pool, cfg)?;
        require_admin(&actor, "see pending approvals")?;

        let filter = EntryFilter {
            status: Some(ApprovalStatus::Pending),
            ..EntryFilter::default()
        };
        let pending = latest_submitted(&filter_entries(&pool.query()?, &filter));

        if pending.is_empty() {
            info("No entries waiting for approval.");
            return Ok(());
        }

        header(format!("Pending approvals ({} total)", pending.len()));

        let mut table = Table::new(&get_headers());
        for row in entries_to_table(paginate(&pending, 1, *limit)) {
            table.add_row(row);
        }
        print!("{}", table.render());
    }

    Ok(())
}
