//! User root entity: every other resource resolves its owner through here.

use regex::Regex;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::LazyLock;

use crate::core::require_email;
use crate::errors::{AppError, AppResult};
use crate::models::now_iso;
use crate::models::user::{NewUser, User, map_row};

const SELECT_USER: &str = "SELECT id, name, email, password_hash, created_at FROM users";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Validate the shape of an email address. Deliverability is not checked.
pub fn validate_email(email: &str) -> AppResult<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(AppError::InvalidEmail(email.to_string()))
    }
}

/// Resolve a user id by email.
pub fn id_for_email(conn: &Connection, email: &str) -> AppResult<Option<i64>> {
    let id = conn
        .query_row("SELECT id FROM users WHERE email = ?1", [email], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(id)
}

/// Resolve a user id by email, failing when the account does not exist.
/// Every write path goes through here, so a dependent row can never be
/// created for an unknown account.
pub fn require_user(conn: &Connection, email: &str) -> AppResult<i64> {
    require_email(email)?;
    id_for_email(conn, email)?.ok_or_else(|| AppError::UserNotFound(email.to_string()))
}

pub fn get_user_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    let user = conn
        .query_row(
            &format!("{} WHERE email = ?1", SELECT_USER),
            [email],
            map_row,
        )
        .optional()?;
    Ok(user)
}

/// Register a new account.
pub fn create_user(conn: &Connection, new: &NewUser) -> AppResult<User> {
    validate_email(&new.email)?;
    if id_for_email(conn, &new.email)?.is_some() {
        return Err(AppError::EmailTaken(new.email.clone()));
    }

    conn.execute(
        "INSERT INTO users (name, email, password_hash, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![new.name, new.email, new.password_hash, now_iso()],
    )?;
    let id = conn.last_insert_rowid();

    Ok(conn.query_row(&format!("{} WHERE id = ?1", SELECT_USER), [id], map_row)?)
}

/// Insert-or-update keyed on email; the migration entry point. The name is
/// refreshed on conflict, credentials and timestamps are left alone.
pub fn upsert_user(conn: &Connection, name: &str, email: &str) -> AppResult<i64> {
    require_email(email)?;
    conn.execute(
        "INSERT INTO users (name, email, password_hash, created_at) VALUES (?1, ?2, '', ?3)
         ON CONFLICT(email) DO UPDATE SET name = excluded.name",
        params![name, email, now_iso()],
    )?;

    // last_insert_rowid is not meaningful after DO UPDATE; re-resolve.
    id_for_email(conn, email)?.ok_or_else(|| AppError::UserNotFound(email.to_string()))
}
