use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::models::bad_column;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    #[default]
    Push,
    Email,
    Sms,
}

impl DeliveryMethod {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Push => "push",
            DeliveryMethod::Email => "email",
            DeliveryMethod::Sms => "sms",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "push" => Some(DeliveryMethod::Push),
            "email" => Some(DeliveryMethod::Email),
            "sms" => Some(DeliveryMethod::Sms),
            _ => None,
        }
    }
}

/// Daily workout reminder. One per user in practice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: i64,
    pub user_id: i64,
    pub enabled: bool,
    pub time: String, // HH:MM
    pub method: DeliveryMethod,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub method: DeliveryMethod,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_enabled() -> bool {
    true
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<Reminder> {
    let method_str: String = row.get("method")?;
    let method =
        DeliveryMethod::from_db_str(&method_str).ok_or_else(|| bad_column("method", &method_str))?;

    Ok(Reminder {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        enabled: row.get("enabled")?,
        time: row.get("time")?,
        method,
        created_at: row.get("created_at")?,
    })
}
