//! Workout log resource service: the history of executed workouts.

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::users;
use crate::core::validate::{collect_exercise_ids, ensure_exercises_exist};
use crate::core::{DeleteOutcome, UpdateOutcome, require_email};
use crate::errors::AppResult;
use crate::models::workout_log::{NewWorkoutLog, WorkoutLog, map_row};
use crate::models::{json_text, now_iso};

const SELECT_LOG: &str =
    "SELECT id, user_id, workout_id, completed_at, duration, exercise_logs, notes, \
     overall_effort FROM workout_logs";

pub fn list_logs(conn: &Connection, email: &str) -> AppResult<Vec<WorkoutLog>> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(Vec::new());
    };

    let mut stmt = conn.prepare_cached(&format!(
        "{} WHERE user_id = ?1 ORDER BY completed_at DESC, id DESC",
        SELECT_LOG
    ))?;
    let rows = stmt.query_map([user_id], map_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get_log(conn: &Connection, id: i64) -> AppResult<Option<WorkoutLog>> {
    let log = conn
        .query_row(&format!("{} WHERE id = ?1", SELECT_LOG), [id], map_row)
        .optional()?;
    Ok(log)
}

/// Record an executed workout. The workout reference itself is not
/// validated (orphans are tolerated, see the entity lifecycle notes); the
/// per-exercise log entries are.
pub fn create_log(conn: &Connection, email: &str, new: &NewWorkoutLog) -> AppResult<WorkoutLog> {
    let user_id = users::require_user(conn, email)?;
    ensure_exercises_exist(conn, &collect_exercise_ids(&new.exercise_logs))?;

    let completed_at = new.completed_at.clone().unwrap_or_else(now_iso);
    conn.execute(
        "INSERT INTO workout_logs (user_id, workout_id, completed_at, duration, exercise_logs,
                                   notes, overall_effort)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user_id,
            new.workout_id,
            completed_at,
            new.duration,
            json_text(&new.exercise_logs)?,
            new.notes,
            new.overall_effort,
        ],
    )?;
    let id = conn.last_insert_rowid();

    Ok(conn.query_row(&format!("{} WHERE id = ?1", SELECT_LOG), [id], map_row)?)
}

pub fn update_log(
    conn: &Connection,
    id: i64,
    new: &NewWorkoutLog,
) -> AppResult<UpdateOutcome<WorkoutLog>> {
    ensure_exercises_exist(conn, &collect_exercise_ids(&new.exercise_logs))?;

    let rows = conn.execute(
        "UPDATE workout_logs
         SET workout_id = ?1, completed_at = COALESCE(?2, completed_at), duration = ?3,
             exercise_logs = ?4, notes = ?5, overall_effort = ?6
         WHERE id = ?7",
        params![
            new.workout_id,
            new.completed_at,
            new.duration,
            json_text(&new.exercise_logs)?,
            new.notes,
            new.overall_effort,
            id,
        ],
    )?;
    if rows == 0 {
        return Ok(UpdateOutcome::NotFound);
    }

    let log = conn.query_row(&format!("{} WHERE id = ?1", SELECT_LOG), [id], map_row)?;
    Ok(UpdateOutcome::Updated(log))
}

pub fn delete_log(conn: &Connection, id: i64) -> AppResult<DeleteOutcome> {
    let rows = conn.execute("DELETE FROM workout_logs WHERE id = ?1", [id])?;
    Ok(if rows == 0 {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted
    })
}
