use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::models::{bad_column, json_col};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

/// Exercise catalog row. `user_id = None` marks a shared system exercise,
/// visible to every account and owned by none.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub category: String,
    pub muscle_groups: Vec<String>,
    pub difficulty: Difficulty,
    pub equipment: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub image_url: String,
    pub duration_minutes: i64,
    pub is_custom: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub duration_minutes: i64,
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<Exercise> {
    let difficulty_str: String = row.get("difficulty")?;
    let difficulty = Difficulty::from_db_str(&difficulty_str)
        .ok_or_else(|| bad_column("difficulty", &difficulty_str))?;

    Ok(Exercise {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        muscle_groups: json_col(row, "muscle_groups")?,
        difficulty,
        equipment: row.get("equipment")?,
        description: row.get("description")?,
        instructions: json_col(row, "instructions")?,
        image_url: row.get("image_url")?,
        duration_minutes: row.get("duration_minutes")?,
        is_custom: row.get("is_custom")?,
    })
}
