use std::env;

use venuecal_core::calendar::SELECTABLE_YEAR_SPAN;

/// Default tracing filter when neither `RUST_LOG` nor `VENUECAL_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "venuecal=warn";

/// Settings read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive (default: "venuecal=warn")
    pub log_filter: String,
    /// Number of years offered by the year picker (default: 27)
    pub year_span: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `VENUECAL_LOG` - Tracing filter (default: "venuecal=warn")
    /// - `VENUECAL_YEAR_SPAN` - Years offered by the year picker (default: 27)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("VENUECAL_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            year_span: lookup("VENUECAL_YEAR_SPAN")
                .and_then(|v| v.parse().ok())
                .filter(|span| *span > 0)
                .unwrap_or(SELECTABLE_YEAR_SPAN),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            year_span: SELECTABLE_YEAR_SPAN,
        }
    }
}
