//! Pretty output formatting.

use std::ops::RangeInclusive;

use venuecal_core::calendar::{
    AvailabilityBoard, DayCell, DisplayMonth, SelectionMessage, VenueMonth, WEEKDAY_LABELS,
};
use venuecal_core::venue::Venue;

const LEGEND: &str = "x = booked, * = today";

/// Format a venue for display.
pub fn format_venue(venue: &Venue) -> String {
    let mut output = format!(
        "{} [{}]\n  Capacity: {}",
        venue.name, venue.key, venue.capacity
    );
    for line in &venue.description {
        output.push_str(&format!("\n  {}", line));
    }
    output
}

/// Format venues for display.
pub fn format_venues(venues: &[Venue]) -> String {
    if venues.is_empty() {
        return "No venues found.".to_string();
    }
    let mut output = format!("VENUES ({})\n", venues.len());
    output.push_str(&"-".repeat(40));
    for venue in venues {
        output.push_str(&format!("\n{}", format_venue(venue)));
        output.push('\n');
    }
    output
}

fn format_cell(cell: &DayCell) -> String {
    match cell.day {
        None => "    ".to_string(),
        Some(day) => {
            let marker = if cell.booked {
                'x'
            } else if cell.today {
                '*'
            } else {
                ' '
            };
            format!("{:>3}{}", day, marker)
        }
    }
}

/// Format one venue's month grid.
///
/// Weeks made only of padding are left out.
pub fn format_venue_month(venue_month: &VenueMonth) -> String {
    let mut output = format!("{} - {}\n", venue_month.venue_name, venue_month.month);
    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{:>3} ", label))
        .collect();
    output.push_str(header.trim_end());

    for week in venue_month
        .weeks()
        .filter(|week| !week.iter().all(DayCell::is_padding))
    {
        let row: String = week.iter().map(format_cell).collect();
        output.push('\n');
        output.push_str(row.trim_end());
    }
    output
}

/// Format the availability board.
pub fn format_board(board: &AvailabilityBoard, quiet: bool) -> String {
    if board.venues.is_empty() {
        return "No venues found.".to_string();
    }
    let mut output = board
        .venues
        .iter()
        .map(format_venue_month)
        .collect::<Vec<_>>()
        .join("\n\n");
    if !quiet {
        output.push_str("\n\n");
        output.push_str(LEGEND);
    }
    output
}

/// Format the booked days of a venue.
pub fn format_booked(venue: &Venue, month: DisplayMonth, days: &[u32]) -> String {
    if days.is_empty() {
        return format!("{} - {}: no bookings", venue.name, month);
    }
    let days = days
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} - {}: {}", venue.name, month, days)
}

/// Format an inquiry message.
pub fn format_selection(selection: &SelectionMessage) -> String {
    selection.message.clone()
}

/// Format the selectable years, one per line.
pub fn format_years(years: RangeInclusive<i32>) -> String {
    years
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use venuecal_core::calendar::FixedClock;
    use venuecal_core::venue::VenueCatalog;

    fn june_2025() -> DisplayMonth {
        DisplayMonth::new(2025, 5).unwrap()
    }

    #[test]
    fn test_format_venues() {
        let catalog = VenueCatalog::seed();
        let output = format_venues(&catalog.venues);

        assert!(output.starts_with("VENUES (2)"));
        assert!(output.contains("Grand Ballroom [grandBallroom]\n  Capacity: 450"));
        assert!(output.contains("  Features elegant decor and private bar"));
        assert_eq!(format_venues(&[]), "No venues found.");
    }

    #[test]
    fn test_format_venue_month() {
        let catalog = VenueCatalog::seed();
        let venue = catalog.get("grandBallroom").unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let output = format_venue_month(&VenueMonth::build(venue, june_2025(), today));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Grand Ballroom - June 2025");
        assert_eq!(lines[1], "Sun Mon Tue Wed Thu Fri Sat");
        assert_eq!(lines[2], "  1   2   3   4   5   6   7x");
        assert_eq!(lines[3], "  8   9  10* 11  12  13  14x");
        assert_eq!(lines[6], " 29  30");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_format_board_legend() {
        let catalog = VenueCatalog::seed();
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let board = AvailabilityBoard::build(&catalog, june_2025(), &clock);

        let output = format_board(&board, false);
        assert!(output.contains("Chateau Hall - June 2025"));
        assert!(output.ends_with(LEGEND));
        assert!(!format_board(&board, true).contains(LEGEND));
    }

    #[test]
    fn test_format_booked() {
        let venue = VenueCatalog::seed().get("chateauHall").cloned().unwrap();
        assert_eq!(
            format_booked(&venue, june_2025(), &[7, 14]),
            "Chateau Hall - June 2025: 7, 14"
        );
        assert_eq!(
            format_booked(&venue, june_2025(), &[]),
            "Chateau Hall - June 2025: no bookings"
        );
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(2025..=2027), "2025\n2026\n2027");
    }
}
