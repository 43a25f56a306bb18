//! Built-in venue data.
//!
//! The two halls and the bookings that were recorded for them by hand. The
//! Grand Ballroom's bookings use the year-scoped form; the Chateau Hall's
//! still use the legacy per-month form.

use super::types::Venue;
use crate::calendar::BookingTable;

/// The large hall, for weddings and galas.
pub fn grand_ballroom() -> Venue {
    Venue::new("grandBallroom", "Grand Ballroom", 450)
        .with_description([
            "Perfect for large weddings, corporate galas, and grand celebrations",
            "Features crystal chandeliers and spacious dance floor",
        ])
        .with_bookings(BookingTable::new().with_year(
            2025,
            [(6, vec![7, 14]), (8, vec![30]), (10, vec![4])],
        ))
}

/// The smaller hall with its private bar.
pub fn chateau_hall() -> Venue {
    Venue::new("chateauHall", "Chateau Hall", 150)
        .with_description([
            "Ideal for intimate weddings, corporate events, and private celebrations",
            "Features elegant decor and private bar",
        ])
        .with_bookings(
            BookingTable::new()
                .with_legacy_month(3, vec![1])
                .with_legacy_month(5, vec![10, 31])
                .with_legacy_month(6, vec![7, 14])
                .with_legacy_month(7, vec![26]),
        )
}
