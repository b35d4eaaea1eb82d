use crate::db::pool::DbPool;
use crate::db::users::{delete_user, find_user, insert_user, touch_last_login};
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::models::timesheet_entry::now_iso;

pub struct UserLogic;

impl UserLogic {
    pub fn add(pool: &DbPool, user: &Identity) -> AppResult<()> {
        let username = user.username.trim();
        if username.is_empty() || username.contains(char::is_whitespace) {
            return Err(AppError::Validation(format!(
                "Invalid username '{}': use a single word.",
                user.username
            )));
        }
        if user.first_name.trim().is_empty() || user.last_name.trim().is_empty() {
            return Err(AppError::Validation(
                "First and last name are required.".into(),
            ));
        }
        if find_user(&pool.conn, username)?.is_some() {
            return Err(AppError::Validation(format!(
                "User '{}' already exists.",
                username
            )));
        }

        let mut stored = user.clone();
        stored.username = username.to_string();
        stored.first_name = user.first_name.trim().to_string();
        stored.last_name = user.last_name.trim().to_string();
        insert_user(&pool.conn, &stored)
    }

    /// Look up the identity acting on this invocation and stamp its last login.
    /// Only commands that change timesheets call this; read-only ones use `lookup`.
    pub fn resolve(pool: &DbPool, username: &str) -> AppResult<Identity> {
        let user = find_user(&pool.conn, username)?
            .ok_or_else(|| AppError::UnknownUser(username.to_string()))?;
        touch_last_login(&pool.conn, &user.username, &now_iso())?;
        Ok(user)
    }

    /// Identity of a user, without touching their login stamp.
    pub fn lookup(pool: &DbPool, username: &str) -> AppResult<Identity> {
        find_user(&pool.conn, username)?.ok_or_else(|| AppError::UnknownUser(username.to_string()))
    }

    pub fn remove(pool: &DbPool, username: &str) -> AppResult<()> {
        delete_user(&pool.conn, username)
    }
}
