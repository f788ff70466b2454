use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::models::exercise_entry::ExerciseEntry;
use crate::models::json_col;

/// A planned or performed workout for one date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub date: String, // YYYY-MM-DD, client-supplied
    pub name: String,
    pub exercises: Vec<ExerciseEntry>,
    pub notes: Vec<String>,
    pub completed: bool,
    pub duration: i64, // minutes
    pub created_at: String,
}

/// Creation payload; the store generates the id and stamps `created_at`
/// when the payload leaves it out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<Workout> {
    Ok(Workout {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date: row.get("date")?,
        name: row.get("name")?,
        exercises: json_col(row, "exercises")?,
        notes: json_col(row, "notes")?,
        completed: row.get("completed")?,
        duration: row.get("duration")?,
        created_at: row.get("created_at")?,
    })
}
