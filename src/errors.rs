//! Unified application error type.
//! All modules (db, core, config) return AppError to keep the error
//! handling consistent and easy to map at the transport boundary.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid stored value for {0}")]
    InvalidValue(String),

    // ---------------------------
    // Request validation
    // ---------------------------
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("No account found for email: {0}")]
    UserNotFound(String),

    #[error("An account already exists for email: {0}")]
    EmailTaken(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Unknown exercise ids: {0}")]
    UnknownExercises(String),

    // ---------------------------
    // Migration errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the failure was caused by the caller's input rather than the
    /// store. Transport wrappers map this to a 400-class response and
    /// everything else to a 500.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            AppError::MissingParameter(_)
                | AppError::UserNotFound(_)
                | AppError::EmailTaken(_)
                | AppError::InvalidEmail(_)
                | AppError::UnknownExercises(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
