//! Workout resource service.

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::users;
use crate::core::validate::{collect_exercise_ids, ensure_exercises_exist};
use crate::core::{DeleteOutcome, UpdateOutcome, require_email};
use crate::errors::AppResult;
use crate::models::workout::{NewWorkout, Workout, map_row};
use crate::models::{json_text, now_iso};

const SELECT_WORKOUT: &str =
    "SELECT id, user_id, date, name, exercises, notes, completed, duration, created_at \
     FROM workouts";

/// All workouts for an account, newest date first. An unknown email yields
/// an empty list, not an error.
pub fn list_workouts(conn: &Connection, email: &str) -> AppResult<Vec<Workout>> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(Vec::new());
    };

    let mut stmt = conn.prepare_cached(&format!(
        "{} WHERE user_id = ?1 ORDER BY date DESC, id DESC",
        SELECT_WORKOUT
    ))?;
    let rows = stmt.query_map([user_id], map_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get_workout(conn: &Connection, id: i64) -> AppResult<Option<Workout>> {
    let workout = conn
        .query_row(&format!("{} WHERE id = ?1", SELECT_WORKOUT), [id], map_row)
        .optional()?;
    Ok(workout)
}

/// Create a workout for the account resolved from `email`. Exercise
/// references are validated before anything is written.
pub fn create_workout(conn: &Connection, email: &str, new: &NewWorkout) -> AppResult<Workout> {
    let user_id = users::require_user(conn, email)?;
    ensure_exercises_exist(conn, &collect_exercise_ids(&new.exercises))?;

    let created_at = new.created_at.clone().unwrap_or_else(now_iso);
    conn.execute(
        "INSERT INTO workouts (user_id, date, name, exercises, notes, completed, duration, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            user_id,
            new.date,
            new.name,
            json_text(&new.exercises)?,
            json_text(&new.notes)?,
            new.completed,
            new.duration,
            created_at,
        ],
    )?;
    let id = conn.last_insert_rowid();

    Ok(conn.query_row(&format!("{} WHERE id = ?1", SELECT_WORKOUT), [id], map_row)?)
}

/// Full replacement keyed by id only; ownership is not re-checked.
pub fn update_workout(
    conn: &Connection,
    id: i64,
    new: &NewWorkout,
) -> AppResult<UpdateOutcome<Workout>> {
    ensure_exercises_exist(conn, &collect_exercise_ids(&new.exercises))?;

    let rows = conn.execute(
        "UPDATE workouts
         SET date = ?1, name = ?2, exercises = ?3, notes = ?4, completed = ?5,
             duration = ?6, created_at = COALESCE(?7, created_at)
         WHERE id = ?8",
        params![
            new.date,
            new.name,
            json_text(&new.exercises)?,
            json_text(&new.notes)?,
            new.completed,
            new.duration,
            new.created_at,
            id,
        ],
    )?;
    if rows == 0 {
        return Ok(UpdateOutcome::NotFound);
    }

    let workout = conn.query_row(&format!("{} WHERE id = ?1", SELECT_WORKOUT), [id], map_row)?;
    Ok(UpdateOutcome::Updated(workout))
}

pub fn delete_workout(conn: &Connection, id: i64) -> AppResult<DeleteOutcome> {
    let rows = conn.execute("DELETE FROM workouts WHERE id = ?1", [id])?;
    Ok(if rows == 0 {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted
    })
}
