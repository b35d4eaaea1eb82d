use crate::errors::{AppError, AppResult};
use crate::models::identity::{Identity, Role};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_user(row: &Row) -> Result<Identity> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::Persistence(format!("Invalid role: {}", role_str))),
        )
    })?;

    Ok(Identity {
        username: row.get("username")?,
        role,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    })
}

pub fn insert_user(conn: &Connection, user: &Identity) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (username, first_name, last_name, role)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            user.username,
            user.first_name,
            user.last_name,
            user.role.to_db_str()
        ],
    )?;
    Ok(())
}

pub fn find_user(conn: &Connection, username: &str) -> AppResult<Option<Identity>> {
    let user = conn
        .query_row(
            "SELECT username, first_name, last_name, role FROM users WHERE username = ?1",
            [username],
            map_user,
        )
        .optional()?;
    Ok(user)
}

/// Users ordered by last name, optionally only one role.
pub fn load_users(conn: &Connection, role: Option<Role>) -> AppResult<Vec<Identity>> {
    let mut stmt = conn.prepare(
        "SELECT username, first_name, last_name, role FROM users
         WHERE ?1 IS NULL OR role = ?1
         ORDER BY last_name ASC, first_name ASC",
    )?;

    let rows = stmt.query_map([role.map(|r| r.to_db_str())], map_user)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_user(conn: &Connection, username: &str) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM users WHERE username = ?1", [username])?;
    if changed == 0 {
        return Err(AppError::UnknownUser(username.to_string()));
    }
    Ok(())
}

pub fn touch_last_login(conn: &Connection, username: &str, at: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE users SET last_login = ?1 WHERE username = ?2",
        params![at, username],
    )?;
    Ok(())
}

/// Stamp of the last state-changing command run by `username`.
pub fn last_login(conn: &Connection, username: &str) -> AppResult<Option<String>> {
    let stamp = conn
        .query_row(
            "SELECT last_login FROM users WHERE username = ?1",
            [username],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?
        .ok_or_else(|| AppError::UnknownUser(username.to_string()))?;
    Ok(stamp)
}
