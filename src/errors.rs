//! Unified application error type.
//! All modules (db, core, ui, cli) return AppError so errors propagate with `?`
//! up to `main`, which prints them and exits with a failure code.

use std::io;
use thiserror::Error;

/// Recoverable input problems. They are shown on the blocking error screen
/// and the prompt that produced them runs again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Value is not an integer.")]
    NotInteger,

    #[error("Value is not a menu option.")]
    NotMenuOption,

    #[error("Value is not a valid date.")]
    NotDate,

    #[error("Input not a valid key.")]
    NotEditKey,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Entry {0} not found")]
    EntryNotFound(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Input(#[from] InputError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
