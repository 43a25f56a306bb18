use chrono::NaiveDate;
use serde::Serialize;

use super::booking::is_booked;
use super::clock::Clock;
use super::grid::{build_grid, is_today};
use super::types::{DayCell, DisplayMonth};
use crate::venue::{Venue, VenueCatalog};

/// One venue's availability for a displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueMonth {
    pub venue_key: String,
    pub venue_name: String,
    pub month: DisplayMonth,
    pub booked_days: Vec<u32>,
    pub cells: Vec<DayCell>,
}

impl VenueMonth {
    /// Annotates the month grid with the venue's bookings and today's date.
    pub fn build(venue: &Venue, month: DisplayMonth, today: NaiveDate) -> Self {
        let booked = venue.bookings.booked_days(month);
        let cells = build_grid(month)
            .cells
            .into_iter()
            .map(|day| DayCell {
                day,
                booked: is_booked(day, booked),
                today: is_today(month, day, today),
            })
            .collect();

        Self {
            venue_key: venue.key.clone(),
            venue_name: venue.name.clone(),
            month,
            booked_days: booked.to_vec(),
            cells,
        }
    }

    /// Returns the grid split into its six weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// Returns the days that can still be inquired about.
    pub fn available_days(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_selectable())
            .filter_map(|cell| cell.day)
    }
}

/// All venues side by side for one shared displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityBoard {
    pub month: DisplayMonth,
    pub is_current_month: bool,
    pub venues: Vec<VenueMonth>,
}

impl AvailabilityBoard {
    /// Builds the board for every venue in the catalog.
    pub fn build(catalog: &VenueCatalog, month: DisplayMonth, clock: &impl Clock) -> Self {
        Self::for_venues(catalog.iter(), month, clock)
    }

    /// Builds the board for the given venues only.
    pub fn for_venues<'a>(
        venues: impl IntoIterator<Item = &'a Venue>,
        month: DisplayMonth,
        clock: &impl Clock,
    ) -> Self {
        let today = clock.today();
        Self {
            month,
            is_current_month: month.is_current(today),
            venues: venues
                .into_iter()
                .map(|venue| VenueMonth::build(venue, month, today))
                .collect(),
        }
    }
}
