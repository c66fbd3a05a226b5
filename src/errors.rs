//! Unified application error type.
//! All modules (storage, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Input problems reported back to the user when a calculation is refused.
/// The first failing check wins: weights, then date, then goal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter valid weights.")]
    InvalidWeight,

    #[error("Please choose a future target date.")]
    InvalidDate,

    #[error("Goal weight must be less than current weight.")]
    InvalidGoal,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Target date {0} is in the past")]
    PastDate(String),

    // ---------------------------
    // Calculation errors
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration YAML error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
