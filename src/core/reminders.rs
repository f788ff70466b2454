//! Reminder resource service.

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::users;
use crate::core::{DeleteOutcome, UpdateOutcome, require_email};
use crate::errors::AppResult;
use crate::models::now_iso;
use crate::models::reminder::{NewReminder, Reminder, map_row};

const SELECT_REMINDER: &str =
    "SELECT id, user_id, enabled, time, method, created_at FROM reminders";

pub fn list_reminders(conn: &Connection, email: &str) -> AppResult<Vec<Reminder>> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(Vec::new());
    };

    let mut stmt = conn.prepare_cached(&format!(
        "{} WHERE user_id = ?1 ORDER BY created_at DESC, id DESC",
        SELECT_REMINDER
    ))?;
    let rows = stmt.query_map([user_id], map_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get_reminder(conn: &Connection, id: i64) -> AppResult<Option<Reminder>> {
    let reminder = conn
        .query_row(&format!("{} WHERE id = ?1", SELECT_REMINDER), [id], map_row)
        .optional()?;
    Ok(reminder)
}

pub fn create_reminder(conn: &Connection, email: &str, new: &NewReminder) -> AppResult<Reminder> {
    let user_id = users::require_user(conn, email)?;

    let created_at = new.created_at.clone().unwrap_or_else(now_iso);
    conn.execute(
        "INSERT INTO reminders (user_id, enabled, time, method, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id,
            new.enabled,
            new.time,
            new.method.to_db_str(),
            created_at,
        ],
    )?;
    let id = conn.last_insert_rowid();

    Ok(conn.query_row(&format!("{} WHERE id = ?1", SELECT_REMINDER), [id], map_row)?)
}

pub fn update_reminder(
    conn: &Connection,
    id: i64,
    new: &NewReminder,
) -> AppResult<UpdateOutcome<Reminder>> {
    let rows = conn.execute(
        "UPDATE reminders
         SET enabled = ?1, time = ?2, method = ?3, created_at = COALESCE(?4, created_at)
         WHERE id = ?5",
        params![
            new.enabled,
            new.time,
            new.method.to_db_str(),
            new.created_at,
            id,
        ],
    )?;
    if rows == 0 {
        return Ok(UpdateOutcome::NotFound);
    }

    let reminder = conn.query_row(&format!("{} WHERE id = ?1", SELECT_REMINDER), [id], map_row)?;
    Ok(UpdateOutcome::Updated(reminder))
}

pub fn delete_reminder(conn: &Connection, id: i64) -> AppResult<DeleteOutcome> {
    let rows = conn.execute("DELETE FROM reminders WHERE id = ?1", [id])?;
    Ok(if rows == 0 {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted
    })
}
