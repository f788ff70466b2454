//! Settings singleton service.
//!
//! One row per user, keyed by user id. Saving is always an
//! insert-or-update: two saves for the same account leave one row, with
//! the later values winning even under concurrent requests (SQLite's
//! native upsert resolves the race per statement).

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::users;
use crate::core::{DeleteOutcome, require_email};
use crate::errors::AppResult;
use crate::models::settings::{NewSettings, Settings, map_row};

const SELECT_SETTINGS: &str =
    "SELECT user_id, name, email, notifications, reminder_time, units FROM settings";

/// The account's settings, or None when the account is unknown or has
/// never saved any.
pub fn get_settings(conn: &Connection, email: &str) -> AppResult<Option<Settings>> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(None);
    };

    let settings = conn
        .query_row(
            &format!("{} WHERE user_id = ?1", SELECT_SETTINGS),
            [user_id],
            map_row,
        )
        .optional()?;
    Ok(settings)
}

/// Insert-or-update keyed on the owning user id.
pub fn save_settings(conn: &Connection, email: &str, new: &NewSettings) -> AppResult<Settings> {
    let user_id = users::require_user(conn, email)?;

    conn.execute(
        "INSERT INTO settings (user_id, name, email, notifications, reminder_time, units)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(user_id) DO UPDATE SET
             name = excluded.name,
             email = excluded.email,
             notifications = excluded.notifications,
             reminder_time = excluded.reminder_time,
             units = excluded.units",
        params![
            user_id,
            new.name,
            new.email,
            new.notifications,
            new.reminder_time,
            new.units.to_db_str(),
        ],
    )?;

    Ok(conn.query_row(
        &format!("{} WHERE user_id = ?1", SELECT_SETTINGS),
        [user_id],
        map_row,
    )?)
}

pub fn delete_settings(conn: &Connection, email: &str) -> AppResult<DeleteOutcome> {
    let user_id = users::require_user(conn, email)?;
    let rows = conn.execute("DELETE FROM settings WHERE user_id = ?1", [user_id])?;
    Ok(if rows == 0 {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted
    })
}
