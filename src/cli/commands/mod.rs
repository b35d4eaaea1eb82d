pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod location;
pub mod log;
pub mod pending;
pub mod review;
pub mod submit;
pub mod summary;
pub mod user;

use crate::config::Config;
use crate::core::user::UserLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::ui::messages::warning;
use rusqlite::Connection;
use std::io::{self, Write};

fn acting_username(cfg: &Config) -> AppResult<&str> {
    cfg.current_user
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| {
            AppError::Forbidden(
                "no user selected, pass --as <username> or set current_user in the config".into(),
            )
        })
}

/// The user this invocation acts as (`--as`, else `current_user`).
/// Read-only: the database is not written.
pub(crate) fn acting_identity(pool: &DbPool, cfg: &Config) -> AppResult<Identity> {
    UserLogic::lookup(pool, acting_username(cfg)?)
}

/// Same as [`acting_identity`], also stamping the user's last login.
/// Used by the commands that change timesheets.
pub(crate) fn signed_in_identity(pool: &DbPool, cfg: &Config) -> AppResult<Identity> {
    UserLogic::resolve(pool, acting_username(cfg)?)
}

pub(crate) fn require_admin(user: &Identity, action: &str) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "only an admin can {} ('{}' is an employee)",
            action, user.username
        )))
    }
}

/// Audit lines are best effort: a failed write is reported, not returned.
pub(crate) fn audit_or_warn(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
