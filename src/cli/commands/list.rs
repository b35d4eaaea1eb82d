use crate::cli::commands::acting_identity;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::totals::total_hours;
use crate::core::collection::{filter_entries, page_count, paginate};
use crate::db::pool::DbPool;
use crate::db::store::TimesheetStore;
use crate::errors::AppResult;
use crate::export::{entries_to_table, get_headers};
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, page } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let viewer = acting_identity(&pool, cfg)?;

        let mut filter = filter.to_filter()?;
        if !viewer.is_admin() {
            filter.username = Some(viewer.username.clone());
        }

        let all = pool.query()?;
        let selected = filter_entries(&all, &filter);

        if selected.is_empty() {
            info("No timesheets match the selected filters.");
            return Ok(());
        }

        let pages = page_count(selected.len(), cfg.page_size);
        let rows = paginate(&selected, *page, cfg.page_size);

        if rows.is_empty() {
            info(format!("Page {} is empty ({} page(s) available).", page, pages));
            return Ok(());
        }

        header(format!("Timesheets, page {} of {}", page, pages));

        let mut table = Table::new(&get_headers());
        for row in entries_to_table(rows) {
            table.add_row(row);
        }
        print!("{}", table.render());

        println!(
            "\n{} entries, {} h in total",
            selected.len(),
            format_hours(total_hours(&selected))
        );
    }

    Ok(())
}
