//! Unified application error type.
//! All modules (db, core, config, utils) return AppError to keep the error
//! handling consistent and easy to manage. Every variant is recoverable:
//! the caller reports the message and may retry with corrected input.

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

    #[error("Database constraint violation: {0}")]
    Constraint(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Time-entry validation
    // ---------------------------
    #[error("{0}")]
    TimeOrdering(String),

    // ---------------------------
    // Location management
    // ---------------------------
    #[error("Location name contains no valid characters")]
    EmptyLocationName,

    #[error("Location '{0}' already exists")]
    DuplicateLocation(String),

    #[error("Maximum number of locations ({0}) reached")]
    LocationLimitReached(usize),

    // ---------------------------
    // Entry / sequence validation
    // ---------------------------
    #[error("At least one location must be selected")]
    EmptyLocations,

    #[error("{selected} locations selected but only {active} are active and available")]
    InvalidLocations { selected: usize, active: usize },

    #[error("Location {0} already added to sequence")]
    AlreadyInSequence(i64),

    #[error("The location sequence is empty")]
    EmptySequence,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
