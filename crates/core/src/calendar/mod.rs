mod board;
mod booking;
mod clock;
mod error;
mod grid;
mod inquiry;
mod navigation;
mod types;

pub use board::{AvailabilityBoard, VenueMonth};
pub use booking::{
    is_booked, validate_booking_table, BookingEntry, BookingTable, MonthlyBookings,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{BookingTableError, CalendarError};
pub use grid::{build_grid, days_in_month, first_weekday, is_today};
pub use inquiry::{format_inquiry, inquiry_message, long_date, select_day};
pub use navigation::{selectable_years, SELECTABLE_YEAR_SPAN};
pub use types::{
    CalendarView, DayCell, DisplayMonth, SelectionMessage, GRID_CELLS, MONTH_NAMES,
    WEEKDAY_LABELS,
};
