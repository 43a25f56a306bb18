use chrono::{Datelike, Months, NaiveDate};

use super::types::{CalendarView, DisplayMonth, GRID_CELLS};

/// Returns the number of days in the month.
///
/// Computed as the day before the 1st of the following month, so leap years
/// need no special casing.
pub fn days_in_month(month: DisplayMonth) -> u32 {
    match month.first_day().checked_add_months(Months::new(1)) {
        Some(next) => next.pred_opt().map_or(31, |last| last.day()),
        // Only December of the last representable year has no successor.
        None => 31,
    }
}

/// Returns the weekday of the 1st of the month (0 = Sunday .. 6 = Saturday).
pub fn first_weekday(month: DisplayMonth) -> u32 {
    month.first_day().weekday().num_days_from_sunday()
}

/// Builds the 42-cell day grid for the month.
///
/// Cell `i` holds `i - first_weekday + 1` when that value is a day of the
/// month and `None` otherwise.
pub fn build_grid(month: DisplayMonth) -> CalendarView {
    let offset = i64::from(first_weekday(month));
    let last = i64::from(days_in_month(month));

    let cells = (0..GRID_CELLS as i64)
        .map(|i| {
            let day = i - offset + 1;
            (1..=last).contains(&day).then_some(day as u32)
        })
        .collect();

    CalendarView { month, cells }
}

/// Returns true if `day` of `month` is the calendar date `today`.
pub fn is_today(month: DisplayMonth, day: Option<u32>, today: NaiveDate) -> bool {
    day.is_some_and(|day| month.date(day) == Some(today))
}
