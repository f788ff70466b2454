use rusqlite::Row;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::json_col;

/// Fitness self-assessment outcome. `results` is the client's structured
/// answers, stored verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: i64,
    pub user_id: i64,
    pub completed_at: String,
    pub results: Value,
    pub overall_level: String,
    pub recommended: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default = "empty_results")]
    pub results: Value,
    #[serde(default)]
    pub overall_level: String,
    #[serde(default)]
    pub recommended: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn empty_results() -> Value {
    Value::Object(Default::default())
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<Assessment> {
    Ok(Assessment {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        completed_at: row.get("completed_at")?,
        results: json_col(row, "results")?,
        overall_level: row.get("overall_level")?,
        recommended: json_col(row, "recommended")?,
        created_at: row.get("created_at")?,
    })
}
