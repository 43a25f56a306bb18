use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use super::error::CalendarError;
use super::types::DisplayMonth;

/// Number of years offered by the year picker, starting at the current year.
pub const SELECTABLE_YEAR_SPAN: u32 = 27;

impl DisplayMonth {
    /// The month before this one.
    ///
    /// At the start of the representable range the month is returned unchanged.
    pub fn previous(self) -> Self {
        self.shift(-1).unwrap_or(self)
    }

    /// The month after this one. January follows December of the previous year.
    ///
    /// At the end of the representable range the month is returned unchanged.
    pub fn next(self) -> Self {
        self.shift(1).unwrap_or(self)
    }

    /// Moves `months` forward (or backward when negative).
    pub fn shift(self, months: i64) -> Result<Self, CalendarError> {
        let month = i64::from(self.month()).checked_add(months).ok_or_else(|| {
            CalendarError::YearOutOfRange(i64::from(self.year()).saturating_add(months / 12))
        })?;
        Self::normalized(self.year(), month)
    }

    /// Selects a 0-indexed month in the same year, carrying overflow.
    pub fn with_month(self, month: i64) -> Result<Self, CalendarError> {
        Self::normalized(self.year(), month)
    }

    /// Selects the same month in another year.
    pub fn with_year(self, year: i32) -> Result<Self, CalendarError> {
        Self::new(year, self.month())
    }
}

/// Returns the years offered by the year picker: `span` years from today's.
pub fn selectable_years(today: NaiveDate, span: u32) -> RangeInclusive<i32> {
    let first = today.year();
    let last = first.saturating_add(span.saturating_sub(1) as i32);
    first..=last
}
