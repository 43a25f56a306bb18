use thiserror::Error;

use crate::calendar::BookingTableError;

/// Errors found when checking a venue catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Venue key cannot be empty")]
    EmptyKey,
    #[error("Duplicate venue key: {0}")]
    DuplicateKey(String),
    #[error("Invalid bookings for {venue}: {source}")]
    InvalidBookings {
        venue: String,
        source: BookingTableError,
    },
}
