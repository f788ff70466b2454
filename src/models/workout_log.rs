use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::models::exercise_entry::ExerciseEntry;
use crate::models::json_col;

/// Historical record of an executed workout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: i64,
    pub user_id: i64,
    pub workout_id: i64,
    pub completed_at: String,
    pub duration: i64, // minutes
    pub exercise_logs: Vec<ExerciseEntry>,
    pub notes: String,
    pub overall_effort: i64, // 1-10 as reported by the client
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutLog {
    #[serde(default)]
    pub workout_id: i64,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub exercise_logs: Vec<ExerciseEntry>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub overall_effort: i64,
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<WorkoutLog> {
    Ok(WorkoutLog {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        workout_id: row.get("workout_id")?,
        completed_at: row.get("completed_at")?,
        duration: row.get("duration")?,
        exercise_logs: json_col(row, "exercise_logs")?,
        notes: row.get("notes")?,
        overall_effort: row.get("overall_effort")?,
    })
}
