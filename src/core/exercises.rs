//! Exercise catalog service.
//!
//! The catalog mixes shared system exercises (no owner) with per-user
//! custom ones. System rows are read-only to accounts; they are created by
//! the seed path only.

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::users;
use crate::core::{DeleteOutcome, UpdateOutcome, require_email};
use crate::errors::AppResult;
use crate::models::exercise::{Exercise, NewExercise, map_row};
use crate::models::json_text;

const SELECT_EXERCISE: &str =
    "SELECT id, user_id, name, category, muscle_groups, difficulty, equipment, description, \
     instructions, image_url, duration_minutes, is_custom FROM exercises";

/// The catalog visible to an account: every system exercise plus the
/// account's own custom ones, ordered by name. Unknown email → empty.
pub fn list_exercises(conn: &Connection, email: &str) -> AppResult<Vec<Exercise>> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(Vec::new());
    };

    let mut stmt = conn.prepare_cached(&format!(
        "{} WHERE user_id IS NULL OR user_id = ?1 ORDER BY name ASC, id ASC",
        SELECT_EXERCISE
    ))?;
    let rows = stmt.query_map([user_id], map_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get_exercise(conn: &Connection, id: i64) -> AppResult<Option<Exercise>> {
    let exercise = conn
        .query_row(&format!("{} WHERE id = ?1", SELECT_EXERCISE), [id], map_row)
        .optional()?;
    Ok(exercise)
}

/// Create a custom exercise owned by the resolved account.
pub fn create_exercise(conn: &Connection, email: &str, new: &NewExercise) -> AppResult<Exercise> {
    let user_id = users::require_user(conn, email)?;
    insert_exercise(conn, Some(user_id), new, true)
}

/// Create a shared system exercise (no owner); the catalog seed path.
pub fn create_system_exercise(conn: &Connection, new: &NewExercise) -> AppResult<Exercise> {
    insert_exercise(conn, None, new, false)
}

fn insert_exercise(
    conn: &Connection,
    user_id: Option<i64>,
    new: &NewExercise,
    is_custom: bool,
) -> AppResult<Exercise> {
    conn.execute(
        "INSERT INTO exercises (user_id, name, category, muscle_groups, difficulty, equipment,
                                description, instructions, image_url, duration_minutes, is_custom)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            user_id,
            new.name,
            new.category,
            json_text(&new.muscle_groups)?,
            new.difficulty.to_db_str(),
            new.equipment,
            new.description,
            json_text(&new.instructions)?,
            new.image_url,
            new.duration_minutes,
            is_custom,
        ],
    )?;
    let id = conn.last_insert_rowid();

    Ok(conn.query_row(&format!("{} WHERE id = ?1", SELECT_EXERCISE), [id], map_row)?)
}

pub fn update_exercise(
    conn: &Connection,
    id: i64,
    new: &NewExercise,
) -> AppResult<UpdateOutcome<Exercise>> {
    let rows = conn.execute(
        "UPDATE exercises
         SET name = ?1, category = ?2, muscle_groups = ?3, difficulty = ?4, equipment = ?5,
             description = ?6, instructions = ?7, image_url = ?8, duration_minutes = ?9
         WHERE id = ?10",
        params![
            new.name,
            new.category,
            json_text(&new.muscle_groups)?,
            new.difficulty.to_db_str(),
            new.equipment,
            new.description,
            json_text(&new.instructions)?,
            new.image_url,
            new.duration_minutes,
            id,
        ],
    )?;
    if rows == 0 {
        return Ok(UpdateOutcome::NotFound);
    }

    let exercise = conn.query_row(&format!("{} WHERE id = ?1", SELECT_EXERCISE), [id], map_row)?;
    Ok(UpdateOutcome::Updated(exercise))
}

/// Delete by id. No cascade: rows referencing the exercise keep their
/// (now stale) reference and fail validation on their next write.
pub fn delete_exercise(conn: &Connection, id: i64) -> AppResult<DeleteOutcome> {
    let rows = conn.execute("DELETE FROM exercises WHERE id = ?1", [id])?;
    Ok(if rows == 0 {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted
    })
}
