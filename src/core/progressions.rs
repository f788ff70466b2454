//! Program progression resource service.

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::users;
use crate::core::{DeleteOutcome, UpdateOutcome, require_email};
use crate::errors::AppResult;
use crate::models::now_iso;
use crate::models::progression::{NewProgression, Progression, map_row};

const SELECT_PROGRESSION: &str =
    "SELECT id, user_id, template_id, current_level, started_at, completed_sessions, \
     total_sessions, week_in_level, active, notes FROM progressions";

pub fn list_progressions(conn: &Connection, email: &str) -> AppResult<Vec<Progression>> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(Vec::new());
    };

    let mut stmt = conn.prepare_cached(&format!(
        "{} WHERE user_id = ?1 ORDER BY started_at DESC, id DESC",
        SELECT_PROGRESSION
    ))?;
    let rows = stmt.query_map([user_id], map_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get_progression(conn: &Connection, id: i64) -> AppResult<Option<Progression>> {
    let progression = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_PROGRESSION),
            [id],
            map_row,
        )
        .optional()?;
    Ok(progression)
}

/// Start tracking a program. The template reference is stored as given;
/// a deleted template leaves the progression orphaned, which is tolerated.
pub fn create_progression(
    conn: &Connection,
    email: &str,
    new: &NewProgression,
) -> AppResult<Progression> {
    let user_id = users::require_user(conn, email)?;

    let started_at = new.started_at.clone().unwrap_or_else(now_iso);
    conn.execute(
        "INSERT INTO progressions (user_id, template_id, current_level, started_at,
                                   completed_sessions, total_sessions, week_in_level, active, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user_id,
            new.template_id,
            new.current_level,
            started_at,
            new.completed_sessions,
            new.total_sessions,
            new.week_in_level,
            new.active,
            new.notes,
        ],
    )?;
    let id = conn.last_insert_rowid();

    Ok(conn.query_row(
        &format!("{} WHERE id = ?1", SELECT_PROGRESSION),
        [id],
        map_row,
    )?)
}

pub fn update_progression(
    conn: &Connection,
    id: i64,
    new: &NewProgression,
) -> AppResult<UpdateOutcome<Progression>> {
    let rows = conn.execute(
        "UPDATE progressions
         SET template_id = ?1, current_level = ?2, started_at = COALESCE(?3, started_at),
             completed_sessions = ?4, total_sessions = ?5, week_in_level = ?6, active = ?7,
             notes = ?8
         WHERE id = ?9",
        params![
            new.template_id,
            new.current_level,
            new.started_at,
            new.completed_sessions,
            new.total_sessions,
            new.week_in_level,
            new.active,
            new.notes,
            id,
        ],
    )?;
    if rows == 0 {
        return Ok(UpdateOutcome::NotFound);
    }

    let progression = conn.query_row(
        &format!("{} WHERE id = ?1", SELECT_PROGRESSION),
        [id],
        map_row,
    )?;
    Ok(UpdateOutcome::Updated(progression))
}

pub fn delete_progression(conn: &Connection, id: i64) -> AppResult<DeleteOutcome> {
    let rows = conn.execute("DELETE FROM progressions WHERE id = ?1", [id])?;
    Ok(if rows == 0 {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted
    })
}
