use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use super::error::CalendarError;

/// English month names, indexed by 0-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column headers, starting on Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of cells in a month grid (six full weeks).
pub const GRID_CELLS: usize = 42;

/// The (year, month) pair a calendar is currently showing.
///
/// Months are 0-indexed (0 = January) everywhere in the engine API. The
/// 1-indexed form is only used as the key into booking tables, see
/// [`DisplayMonth::number`].
///
/// A `DisplayMonth` always denotes a representable calendar month, so the
/// computations built on it are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayMonth {
    first: NaiveDate,
}

impl DisplayMonth {
    /// Creates the displayed month for `year` and a 0-indexed `month`.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1)
            .map(|first| Self { first })
            .ok_or(CalendarError::YearOutOfRange(i64::from(year)))
    }

    /// Creates a displayed month, carrying any month overflow into the year.
    ///
    /// `normalized(2025, 12)` is January 2026 and `normalized(2025, -1)` is
    /// December 2024, like calendar-date arithmetic on the 1st of the month.
    pub fn normalized(year: i32, month: i64) -> Result<Self, CalendarError> {
        let total = i64::from(year)
            .checked_mul(12)
            .and_then(|months| months.checked_add(month))
            .ok_or_else(|| {
                CalendarError::YearOutOfRange(i64::from(year).saturating_add(month / 12))
            })?;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32;
        let year = i32::try_from(year).map_err(|_| CalendarError::YearOutOfRange(year))?;
        Self::new(year, month)
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// The 0-indexed month.
    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    /// The 1-indexed month number, as used for booking table keys.
    pub fn number(&self) -> u32 {
        self.first.month()
    }

    /// The English name of the month.
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.first.month0() as usize]
    }

    /// The 1st day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The date of `day` in this month, if that day exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    /// Returns true if `today` falls inside this month.
    pub fn is_current(&self, today: NaiveDate) -> bool {
        today.year() == self.year() && today.month0() == self.month()
    }
}

impl fmt::Display for DisplayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

/// The rendered day grid of one month.
///
/// Always [`GRID_CELLS`] cells long. Padding cells are `None`; the others
/// hold the day number, starting at the index of the month's first weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub month: DisplayMonth,
    pub cells: Vec<Option<u32>>,
}

impl CalendarView {
    /// Returns the grid split into its six weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(7)
    }

    /// Returns the non-padding day numbers in order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flatten().copied()
    }
}

/// One annotated cell of a venue's month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: Option<u32>,
    pub booked: bool,
    pub today: bool,
}

impl DayCell {
    /// A padding cell before the 1st or after the last day.
    pub fn padding() -> Self {
        Self {
            day: None,
            booked: false,
            today: false,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day.is_none()
    }

    /// Returns true if this cell can start an inquiry.
    pub fn is_selectable(&self) -> bool {
        self.day.is_some() && !self.booked
    }

    /// Accessible label for the cell, e.g. `"June 7 - Booked"`.
    pub fn label(&self, month: DisplayMonth) -> Option<String> {
        let day = self.day?;
        let status = if self.booked {
            "Booked"
        } else {
            "Available, click to inquire"
        };
        Some(format!("{} {} - {}", month.name(), day, status))
    }
}

/// A pre-filled inquiry for an available day at a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionMessage {
    pub venue: String,
    pub date: NaiveDate,
    pub message: String,
}

impl fmt::Display for SelectionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_display_month_new() {
        let june = DisplayMonth::new(2025, 5).unwrap();
        assert_eq!(june.year(), 2025);
        assert_eq!(june.month(), 5);
        assert_eq!(june.number(), 6);
        assert_eq!(june.name(), "June");
        assert_eq!(june.first_day(), make_date(2025, 6, 1));
    }

    #[test]
    fn test_display_month_rejects_month_twelve() {
        assert_eq!(
            DisplayMonth::new(2025, 12),
            Err(CalendarError::MonthOutOfRange(12))
        );
    }

    #[test]
    fn test_display_month_rejects_unrepresentable_year() {
        assert!(matches!(
            DisplayMonth::new(i32::MAX, 0),
            Err(CalendarError::YearOutOfRange(_))
        ));
    }

    #[test]
    fn test_normalized_carries_overflow() {
        assert_eq!(
            DisplayMonth::normalized(2025, 12).unwrap(),
            DisplayMonth::new(2026, 0).unwrap()
        );
        assert_eq!(
            DisplayMonth::normalized(2025, -1).unwrap(),
            DisplayMonth::new(2024, 11).unwrap()
        );
        assert_eq!(
            DisplayMonth::normalized(2025, 25).unwrap(),
            DisplayMonth::new(2027, 1).unwrap()
        );
        assert_eq!(
            DisplayMonth::normalized(2025, -13).unwrap(),
            DisplayMonth::new(2023, 11).unwrap()
        );
    }

    #[test]
    fn test_containing() {
        let month = DisplayMonth::containing(make_date(2024, 2, 29));
        assert_eq!(month, DisplayMonth::new(2024, 1).unwrap());
    }

    #[test]
    fn test_date_and_is_current() {
        let feb = DisplayMonth::new(2023, 1).unwrap();
        assert_eq!(feb.date(28), Some(make_date(2023, 2, 28)));
        assert_eq!(feb.date(29), None);
        assert_eq!(feb.date(0), None);

        assert!(feb.is_current(make_date(2023, 2, 14)));
        assert!(!feb.is_current(make_date(2024, 2, 14)));
        assert!(!feb.is_current(make_date(2023, 3, 1)));
    }

    #[test]
    fn test_display_month_display() {
        let month = DisplayMonth::new(2025, 9).unwrap();
        assert_eq!(month.to_string(), "October 2025");
    }

    #[test]
    fn test_day_cell_label() {
        let june = DisplayMonth::new(2025, 5).unwrap();
        let booked = DayCell {
            day: Some(7),
            booked: true,
            today: false,
        };
        let open = DayCell {
            day: Some(8),
            booked: false,
            today: true,
        };

        assert_eq!(booked.label(june).as_deref(), Some("June 7 - Booked"));
        assert_eq!(
            open.label(june).as_deref(),
            Some("June 8 - Available, click to inquire")
        );
        assert_eq!(DayCell::padding().label(june), None);
    }

    #[test]
    fn test_day_cell_selectable() {
        assert!(!DayCell::padding().is_selectable());
        assert!(DayCell::padding().is_padding());
        assert!(DayCell {
            day: Some(3),
            booked: false,
            today: false
        }
        .is_selectable());
        assert!(!DayCell {
            day: Some(3),
            booked: true,
            today: false
        }
        .is_selectable());
    }
}
