use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Advancement through a structured program built from a template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub id: i64,
    pub user_id: i64,
    pub template_id: i64,
    pub current_level: i64,
    pub started_at: String,
    pub completed_sessions: i64,
    pub total_sessions: i64,
    pub week_in_level: i64,
    pub active: bool,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgression {
    #[serde(default)]
    pub template_id: i64,
    #[serde(default = "default_level")]
    pub current_level: i64,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_sessions: i64,
    #[serde(default)]
    pub total_sessions: i64,
    #[serde(default = "default_week")]
    pub week_in_level: i64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub notes: String,
}

fn default_level() -> i64 {
    1
}
fn default_week() -> i64 {
    1
}
fn default_active() -> bool {
    true
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<Progression> {
    Ok(Progression {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        template_id: row.get("template_id")?,
        current_level: row.get("current_level")?,
        started_at: row.get("started_at")?,
        completed_sessions: row.get("completed_sessions")?,
        total_sessions: row.get("total_sessions")?,
        week_in_level: row.get("week_in_level")?,
        active: row.get("active")?,
        notes: row.get("notes")?,
    })
}
