use crate::cli::commands::{acting_identity, audit_or_warn, require_admin};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        filter,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let actor = acting_identity(&pool, cfg)?;
        require_admin(&actor, "export timesheets")?;

        let target = file.as_deref().unwrap_or(&cfg.report_file);
        let path = expand_tilde(target);

        let count = ExportLogic::export(&pool, *format, &path, &filter.to_filter()?, *force)?;

        audit_or_warn(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} entries as {} by {}", count, format.as_str(), actor.username),
        );
    }
    Ok(())
}
