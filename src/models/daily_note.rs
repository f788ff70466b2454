use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Journal entry; one per user per date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNote {
    pub id: i64,
    pub user_id: i64,
    pub date: String, // YYYY-MM-DD, client-supplied
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyNote {
    pub date: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<DailyNote> {
    Ok(DailyNote {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date: row.get("date")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
