use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        header("Internal log");
        let mut table = Table::new(&["Date", "Operation", "Target", "Message"]);
        for r in rows {
            table.add_row(vec![r.date, r.operation, r.target, r.message]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
