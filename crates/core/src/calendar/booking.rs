use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::BookingTableError;
use super::grid::days_in_month;
use super::types::DisplayMonth;

/// Booked days per 1-indexed month number.
pub type MonthlyBookings = BTreeMap<u32, Vec<u32>>;

/// One keyed entry of a [`BookingTable`].
///
/// Booking data has been entered in two shapes over time. A key holding a
/// plain list of days is a month number (legacy form, valid for every year);
/// a key holding a month map is a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BookingEntry {
    /// Days booked in month `key`, whatever the year.
    LegacyMonth(Vec<u32>),
    /// Days booked per month in year `key`.
    YearScoped(MonthlyBookings),
}

/// The booked days of one venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingTable {
    entries: BTreeMap<i32, BookingEntry>,
}

impl BookingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a legacy entry for a 1-indexed month, replacing any entry under that key.
    pub fn with_legacy_month(mut self, month: u32, days: Vec<u32>) -> Self {
        self.entries.insert(month as i32, BookingEntry::LegacyMonth(days));
        self
    }

    /// Adds a year-scoped entry, replacing any entry under that key.
    pub fn with_year(
        mut self,
        year: i32,
        months: impl IntoIterator<Item = (u32, Vec<u32>)>,
    ) -> Self {
        let months = months.into_iter().collect();
        self.entries.insert(year, BookingEntry::YearScoped(months));
        self
    }

    /// Returns the entry stored under `key`.
    pub fn entry(&self, key: i32) -> Option<&BookingEntry> {
        self.entries.get(&key)
    }

    /// Iterates over all keyed entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (i32, &BookingEntry)> {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the booked days of `month`.
    ///
    /// A year-scoped entry for the month wins; otherwise the legacy entry for
    /// the month number is used. The two forms are never merged.
    pub fn booked_days(&self, month: DisplayMonth) -> &[u32] {
        let number = month.number();

        if let Some(BookingEntry::YearScoped(months)) = self.entries.get(&month.year()) {
            if let Some(days) = months.get(&number) {
                return days;
            }
        }

        match self.entries.get(&(number as i32)) {
            Some(BookingEntry::LegacyMonth(days)) => days,
            _ => &[],
        }
    }
}

/// Returns true if `day` is a real day and appears in `booked`.
pub fn is_booked(day: Option<u32>, booked: &[u32]) -> bool {
    day.is_some_and(|day| booked.contains(&day))
}

/// Checks that every key and day in the table names a real calendar day.
///
/// Legacy entries are checked against the longest length their month can
/// have (29 for February), since they apply to every year.
pub fn validate_booking_table(table: &BookingTable) -> Result<(), BookingTableError> {
    for (key, entry) in table.entries() {
        match entry {
            BookingEntry::LegacyMonth(days) => {
                let month = month_number(i64::from(key))?;
                // 2000 is a leap year, so February allows the 29th.
                let display = DisplayMonth::new(2000, month - 1)
                    .map_err(|_| BookingTableError::InvalidMonth { key: key.into() })?;
                check_days(None, display, days)?;
            }
            BookingEntry::YearScoped(months) => {
                for (number, days) in months {
                    let month = month_number(i64::from(*number))?;
                    let display = DisplayMonth::new(key, month - 1)
                        .map_err(|_| BookingTableError::InvalidYear(key))?;
                    check_days(Some(key), display, days)?;
                }
            }
        }
    }
    Ok(())
}

fn month_number(key: i64) -> Result<u32, BookingTableError> {
    match u32::try_from(key) {
        Ok(month @ 1..=12) => Ok(month),
        _ => Err(BookingTableError::InvalidMonth { key }),
    }
}

fn check_days(
    year: Option<i32>,
    month: DisplayMonth,
    days: &[u32],
) -> Result<(), BookingTableError> {
    let last = days_in_month(month);
    match days.iter().find(|day| !(1..=last).contains(*day)) {
        Some(day) => Err(BookingTableError::InvalidDay {
            year,
            month: month.number(),
            day: *day,
        }),
        None => Ok(()),
    }
}
