use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use super::seed::{chateau_hall, grand_ballroom};
use crate::calendar::{
    select_day, validate_booking_table, BookingTable, DisplayMonth, SelectionMessage,
};

/// A bookable hall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Stable identifier, e.g. `grandBallroom`.
    pub key: String,
    /// Display name used in calendars and inquiry messages.
    pub name: String,
    /// Number of guests the hall seats.
    pub capacity: u32,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub bookings: BookingTable,
}

impl Venue {
    /// Creates a venue with no description and no bookings.
    pub fn new(key: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            capacity,
            description: Vec::new(),
            bookings: BookingTable::new(),
        }
    }

    /// Sets the description lines for this venue.
    pub fn with_description<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the booking table for this venue.
    pub fn with_bookings(mut self, bookings: BookingTable) -> Self {
        self.bookings = bookings;
        self
    }

    /// Returns the booked days of `month` at this venue.
    pub fn booked_days(&self, month: DisplayMonth) -> &[u32] {
        self.bookings.booked_days(month)
    }

    /// Selects a day at this venue, see [`select_day`].
    pub fn select_day(&self, month: DisplayMonth, day: Option<u32>) -> Option<SelectionMessage> {
        select_day(&self.name, &self.bookings, month, day)
    }

    /// Returns true if `query` names this venue by key or display name.
    pub fn matches(&self, query: &str) -> bool {
        self.key == query || self.name.eq_ignore_ascii_case(query.trim())
    }
}

/// The venues shown on the availability board, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueCatalog {
    pub venues: Vec<Venue>,
}

impl VenueCatalog {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// The built-in catalog: Grand Ballroom and Chateau Hall.
    pub fn seed() -> Self {
        Self::new(vec![grand_ballroom(), chateau_hall()])
    }

    /// Parses a catalog from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Finds a venue by key or display name.
    pub fn get(&self, query: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.matches(query))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Venue> {
        self.venues.iter()
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

/// Validates venue keys and every venue's booking table.
pub fn validate_catalog(catalog: &VenueCatalog) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for venue in catalog.iter() {
        if venue.key.trim().is_empty() {
            return Err(CatalogError::EmptyKey);
        }
        if !seen.insert(venue.key.as_str()) {
            return Err(CatalogError::DuplicateKey(venue.key.clone()));
        }
        validate_booking_table(&venue.bookings).map_err(|source| {
            CatalogError::InvalidBookings {
                venue: venue.key.clone(),
                source,
            }
        })?;
    }

    Ok(())
}
