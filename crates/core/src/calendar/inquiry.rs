use chrono::NaiveDate;

use super::booking::{is_booked, BookingTable};
use super::error::CalendarError;
use super::types::{DisplayMonth, SelectionMessage};

/// Formats a date the long US way, e.g. `"Saturday, June 7, 2025"`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Builds the inquiry text for booking `venue_name` on `date`.
pub fn inquiry_message(venue_name: &str, date: NaiveDate) -> String {
    format!(
        "Hello,\n\n\
         I am interested in booking the {venue_name} for {}. \
         Could you please provide me with information about:\n\n\
         1. Availability for this date\n\
         2. Pricing and packages available\n\
         3. Required deposit and payment terms\n\n\
         Thank you for your assistance.\n\n\
         Best regards",
        long_date(date)
    )
}

/// Builds the inquiry text for `day` of `month`.
pub fn format_inquiry(
    venue_name: &str,
    month: DisplayMonth,
    day: u32,
) -> Result<String, CalendarError> {
    let date = month.date(day).ok_or(CalendarError::DayOutOfRange {
        year: month.year(),
        month: month.number(),
        day,
    })?;
    Ok(inquiry_message(venue_name, date))
}

/// Handles a click on a grid cell.
///
/// Padding cells, booked days and days outside the month produce nothing;
/// an available day produces the pre-filled inquiry.
pub fn select_day(
    venue_name: &str,
    bookings: &BookingTable,
    month: DisplayMonth,
    day: Option<u32>,
) -> Option<SelectionMessage> {
    if is_booked(day, bookings.booked_days(month)) {
        return None;
    }
    let date = month.date(day?)?;

    Some(SelectionMessage {
        venue: venue_name.to_string(),
        date,
        message: inquiry_message(venue_name, date),
    })
}
