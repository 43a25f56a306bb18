use thiserror::Error;

/// Errors that can occur when constructing or moving a displayed month.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Year out of supported range: {0}")]
    YearOutOfRange(i64),
    #[error("Month out of range (expected 0-11): {0}")]
    MonthOutOfRange(u32),
    #[error("Day {day} does not exist in {year}-{month:02}")]
    DayOutOfRange { year: i32, month: u32, day: u32 },
}

/// Errors found when checking a booking table against the calendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingTableError {
    #[error("Invalid month key {key} (expected 1-12)")]
    InvalidMonth { key: i64 },
    #[error("Invalid year key {0}")]
    InvalidYear(i32),
    #[error("Invalid day {day} for month {month}")]
    InvalidDay {
        year: Option<i32>,
        month: u32,
        day: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_error_display() {
        assert_eq!(
            CalendarError::MonthOutOfRange(12).to_string(),
            "Month out of range (expected 0-11): 12"
        );
        assert_eq!(
            CalendarError::DayOutOfRange {
                year: 2025,
                month: 6,
                day: 31
            }
            .to_string(),
            "Day 31 does not exist in 2025-06"
        );
    }

    #[test]
    fn test_booking_table_error_display() {
        assert_eq!(
            BookingTableError::InvalidMonth { key: 13 }.to_string(),
            "Invalid month key 13 (expected 1-12)"
        );
        assert_eq!(
            BookingTableError::InvalidDay {
                year: None,
                month: 4,
                day: 31
            }
            .to_string(),
            "Invalid day 31 for month 4"
        );
    }
}
