//! Booking catalog loading.

use std::fs;
use std::path::Path;

use venuecal_core::venue::{validate_catalog, VenueCatalog};

use crate::error::{CliError, Result};

/// Loads the venue catalog from `path`, or the built-in one when `None`.
///
/// Validation problems are logged, not fatal: the calendar still renders
/// whatever the data says.
pub fn load_catalog(path: Option<&Path>) -> Result<VenueCatalog> {
    let Some(path) = path else {
        tracing::debug!("Using built-in venue catalog");
        return Ok(VenueCatalog::seed());
    };

    let json = fs::read_to_string(path).map_err(|source| CliError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&json)?;

    tracing::info!(
        path = %path.display(),
        venues = catalog.len(),
        "Loaded venue catalog"
    );
    Ok(catalog)
}

/// Parses a catalog from JSON and reports validation problems.
pub fn parse_catalog(json: &str) -> Result<VenueCatalog> {
    let catalog = VenueCatalog::from_json(json)?;
    if let Err(err) = validate_catalog(&catalog) {
        tracing::warn!(error = %err, "Booking catalog contains invalid data");
    }
    Ok(catalog)
}
