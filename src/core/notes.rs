//! Daily note resource service.
//!
//! Notes are unique per (user, date) at the application level: saving
//! looks the date up first and updates in place, so a second save for the
//! same day never creates a second row.

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::users;
use crate::core::{DeleteOutcome, UpdateOutcome, require_email};
use crate::errors::AppResult;
use crate::models::daily_note::{DailyNote, NewDailyNote, map_row};
use crate::models::now_iso;

const SELECT_NOTE: &str =
    "SELECT id, user_id, date, content, created_at, updated_at FROM daily_notes";

pub fn list_notes(conn: &Connection, email: &str) -> AppResult<Vec<DailyNote>> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(Vec::new());
    };

    let mut stmt = conn.prepare_cached(&format!(
        "{} WHERE user_id = ?1 ORDER BY date DESC, id DESC",
        SELECT_NOTE
    ))?;
    let rows = stmt.query_map([user_id], map_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get_note(conn: &Connection, id: i64) -> AppResult<Option<DailyNote>> {
    let note = conn
        .query_row(&format!("{} WHERE id = ?1", SELECT_NOTE), [id], map_row)
        .optional()?;
    Ok(note)
}

/// The account's note for one date, if any.
pub fn get_note_for_date(
    conn: &Connection,
    user_id: i64,
    date: &str,
) -> AppResult<Option<DailyNote>> {
    let note = conn
        .query_row(
            &format!("{} WHERE user_id = ?1 AND date = ?2", SELECT_NOTE),
            params![user_id, date],
            map_row,
        )
        .optional()?;
    Ok(note)
}

/// Insert-or-update by (user, date): the existing row for the date is
/// updated in place, a missing one is inserted.
pub fn save_note(conn: &Connection, email: &str, new: &NewDailyNote) -> AppResult<DailyNote> {
    let user_id = users::require_user(conn, email)?;

    if let Some(existing) = get_note_for_date(conn, user_id, &new.date)? {
        let updated_at = new.updated_at.clone().unwrap_or_else(now_iso);
        conn.execute(
            "UPDATE daily_notes SET content = ?1, updated_at = ?2 WHERE id = ?3",
            params![new.content, updated_at, existing.id],
        )?;
        return Ok(conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_NOTE),
            [existing.id],
            map_row,
        )?);
    }

    let created_at = new.created_at.clone().unwrap_or_else(now_iso);
    let updated_at = new.updated_at.clone().unwrap_or_else(|| created_at.clone());
    conn.execute(
        "INSERT INTO daily_notes (user_id, date, content, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, new.date, new.content, created_at, updated_at],
    )?;
    let id = conn.last_insert_rowid();

    Ok(conn.query_row(&format!("{} WHERE id = ?1", SELECT_NOTE), [id], map_row)?)
}

/// Full replacement keyed by id.
pub fn update_note(
    conn: &Connection,
    id: i64,
    new: &NewDailyNote,
) -> AppResult<UpdateOutcome<DailyNote>> {
    let updated_at = new.updated_at.clone().unwrap_or_else(now_iso);
    let rows = conn.execute(
        "UPDATE daily_notes
         SET date = ?1, content = ?2, created_at = COALESCE(?3, created_at), updated_at = ?4
         WHERE id = ?5",
        params![new.date, new.content, new.created_at, updated_at, id],
    )?;
    if rows == 0 {
        return Ok(UpdateOutcome::NotFound);
    }

    let note = conn.query_row(&format!("{} WHERE id = ?1", SELECT_NOTE), [id], map_row)?;
    Ok(UpdateOutcome::Updated(note))
}

pub fn delete_note(conn: &Connection, id: i64) -> AppResult<DeleteOutcome> {
    let rows = conn.execute("DELETE FROM daily_notes WHERE id = ?1", [id])?;
    Ok(if rows == 0 {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted
    })
}
