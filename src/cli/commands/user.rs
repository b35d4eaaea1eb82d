use crate::cli::commands::audit_or_warn;
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::user::UserLogic;
use crate::db::pool::DbPool;
use crate::db::users::load_users;
use crate::errors::AppResult;
use crate::models::identity::Identity;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            UserAction::Add {
                username,
                first,
                last,
                role,
            } => {
                let user = Identity::new(username, *role, first, last);
                UserLogic::add(&pool, &user)?;
                audit_or_warn(
                    &pool.conn,
                    "user_add",
                    username,
                    &format!("{} added as {}", user.display_name(), role.to_db_str()),
                );
                success(format!(
                    "User '{}' ({}) added as {}.",
                    username,
                    user.display_name(),
                    role.to_db_str()
                ));
            }

            UserAction::List { role } => {
                let users = load_users(&pool.conn, *role)?;
                if users.is_empty() {
                    info("No users registered.");
                    return Ok(());
                }

                let mut table = Table::new(&["Username", "Name", "Role"]);
                for u in &users {
                    table.add_row(vec![
                        u.username.clone(),
                        u.display_name(),
                        u.role.to_db_str().to_string(),
                    ]);
                }
                print!("{}", table.render());
            }

            UserAction::Del { username } => {
                UserLogic::remove(&pool, username)?;
                audit_or_warn(&pool.conn, "user_del", username, "User removed");
                success(format!("User '{}' removed.", username));
            }
        }
    }

    Ok(())
}
