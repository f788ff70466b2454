use crate::errors::{AppError, AppResult};

pub mod assessments;
pub mod exercises;
pub mod import;
pub mod logs;
pub mod notes;
pub mod progressions;
pub mod reminders;
pub mod settings;
pub mod stats;
pub mod templates;
pub mod users;
pub mod validate;
pub mod workouts;

/// Result of an update keyed by id. A missing id is an ordinary outcome,
/// not an error: the caller decides whether it matters.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome<T> {
    Updated(T),
    NotFound,
}

impl<T> UpdateOutcome<T> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UpdateOutcome::NotFound)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            UpdateOutcome::Updated(value) => Some(value),
            UpdateOutcome::NotFound => None,
        }
    }
}

/// Result of a delete keyed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// Reject blank email parameters before they reach a lookup.
pub(crate) fn require_email(email: &str) -> AppResult<()> {
    if email.trim().is_empty() {
        return Err(AppError::MissingParameter("userEmail"));
    }
    Ok(())
}
