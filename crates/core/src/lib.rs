//! venuecal_core - booking calendar logic for the venue halls.
//!
//! Everything in this crate is pure: month grids, booking lookups and
//! inquiry messages are computed from explicit inputs. The current date is
//! injected through [`calendar::Clock`].

pub mod calendar;
pub mod serde;
pub mod venue;
