mod error;
mod seed;
mod types;

pub use error::CatalogError;
pub use seed::{chateau_hall, grand_ballroom};
pub use types::{validate_catalog, Venue, VenueCatalog};
