//! Progress summary queries: the aggregate numbers the app's progress
//! screen is built from.

use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;

use crate::core::{require_email, users};
use crate::errors::AppResult;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_workouts: i64,
    pub completed_workouts: i64,
    pub logged_sessions: i64,
    pub logged_minutes: i64,
    pub first_workout_date: Option<String>,
    pub last_workout_date: Option<String>,
}

/// Aggregate view of an account's training history. An unknown email
/// yields a zeroed summary.
pub fn progress_summary(conn: &Connection, email: &str) -> AppResult<ProgressSummary> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(ProgressSummary::default());
    };

    let (total_workouts, completed_workouts): (i64, i64) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM workouts WHERE user_id = ?1",
        [user_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let (logged_sessions, logged_minutes): (i64, i64) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(duration), 0) FROM workout_logs WHERE user_id = ?1",
        [user_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let first_workout_date: Option<String> = conn
        .query_row(
            "SELECT date FROM workouts WHERE user_id = ?1 ORDER BY date ASC LIMIT 1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;

    let last_workout_date: Option<String> = conn
        .query_row(
            "SELECT date FROM workouts WHERE user_id = ?1 ORDER BY date DESC LIMIT 1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;

    Ok(ProgressSummary {
        total_workouts,
        completed_workouts,
        logged_sessions,
        logged_minutes,
        first_workout_date,
        last_workout_date,
    })
}
