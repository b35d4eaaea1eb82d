//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::approval::ApprovalStatus;
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
    // Persistence
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Timesheet entry #{0} not found")]
    NotFound(i64),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Entry #{id} is {status} and can no longer be edited")]
    EditLocked { id: i64, status: ApprovalStatus },

    #[error("Entry #{0} belongs to another employee")]
    NotOwner(i64),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    // ---------------------------
    // Identity
    // ---------------------------
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for errors caused by user input, which never touch stored state.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::UnknownLocation(_)
                | AppError::EditLocked { .. }
                | AppError::NotOwner(_)
                | AppError::Forbidden(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
