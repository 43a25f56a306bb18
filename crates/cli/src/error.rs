//! CLI error types.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;
use venuecal_core::calendar::CalendarError;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read booking catalog {path}: {source}")]
    ReadCatalog {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid booking catalog: {0}")]
    ParseCatalog(#[from] serde_json::Error),

    #[error("Unknown venue: {0}")]
    UnknownVenue(String),

    #[error("{venue} is already booked on {date}")]
    DateBooked { venue: String, date: NaiveDate },

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
