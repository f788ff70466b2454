use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::bad_column;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "metric" => Some(UnitSystem::Metric),
            "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

/// Per-user preferences; a singleton keyed by the owning user id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub notifications: bool,
    pub reminder_time: String, // HH:MM
    pub units: UnitSystem,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    #[serde(default)]
    pub reminder_time: String,
    #[serde(default)]
    pub units: UnitSystem,
}

fn default_notifications() -> bool {
    true
}

impl NewSettings {
    /// Settings seeded from installation defaults, used when an account has
    /// no saved preferences yet.
    pub fn from_defaults(cfg: &Config, name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            notifications: cfg.default_notifications,
            reminder_time: cfg.default_reminder_time.clone(),
            units: UnitSystem::from_db_str(&cfg.default_units).unwrap_or_default(),
        }
    }
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<Settings> {
    let units_str: String = row.get("units")?;
    let units = UnitSystem::from_db_str(&units_str).ok_or_else(|| bad_column("units", &units_str))?;

    Ok(Settings {
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        notifications: row.get("notifications")?,
        reminder_time: row.get("reminder_time")?,
        units,
    })
}
