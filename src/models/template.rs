use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::models::exercise_entry::ExerciseEntry;
use crate::models::json_col;

/// Reusable workout blueprint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub exercises: Vec<ExerciseEntry>,
    pub category: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<Template> {
    Ok(Template {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        exercises: json_col(row, "exercises")?,
        category: row.get("category")?,
        created_at: row.get("created_at")?,
    })
}
