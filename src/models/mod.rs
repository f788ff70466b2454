pub mod assessment;
pub mod daily_note;
pub mod exercise;
pub mod exercise_entry;
pub mod progression;
pub mod reminder;
pub mod settings;
pub mod template;
pub mod user;
pub mod workout;
pub mod workout_log;

use chrono::Utc;
use rusqlite::Row;
use rusqlite::types::Type;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Current UTC time in the RFC 3339 form used by timestamp columns.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

/// Decode a JSON text column into its typed form.
pub(crate) fn json_col<T: DeserializeOwned>(row: &Row, col: &'static str) -> rusqlite::Result<T> {
    let raw: String = row.get(col)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
}

/// Encode a structured field into the JSON text stored in its column.
pub(crate) fn json_text<T: Serialize>(value: &T) -> crate::errors::AppResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Map an invalid enumerated column value to a rusqlite conversion error,
/// so row mappers keep the plain `rusqlite::Result` signature.
pub(crate) fn bad_column(col: &str, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        Type::Text,
        Box::new(crate::errors::AppError::InvalidValue(format!(
            "{}: {}",
            col, value
        ))),
    )
}
