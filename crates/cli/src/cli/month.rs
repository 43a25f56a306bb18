//! Month selection arguments.

use clap::Args;
use venuecal_core::calendar::{CalendarError, DisplayMonth};

/// Picks the displayed month; omitted parts default to today's.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct MonthArgs {
    /// Year to show.
    #[arg(long)]
    pub year: Option<i32>,
    /// Month to show (1-12).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

impl MonthArgs {
    /// Applies the given year and month on top of `current`.
    pub fn resolve(&self, current: DisplayMonth) -> Result<DisplayMonth, CalendarError> {
        let mut month = current;
        if let Some(year) = self.year {
            month = month.with_year(year)?;
        }
        if let Some(number) = self.month {
            month = month.with_month(i64::from(number) - 1)?;
        }
        Ok(month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month0: u32) -> DisplayMonth {
        DisplayMonth::new(year, month0).unwrap()
    }

    #[test]
    fn test_resolve_defaults_to_current() {
        let current = month(2025, 5);
        assert_eq!(MonthArgs::default().resolve(current).unwrap(), current);
    }

    #[test]
    fn test_resolve_year_and_month() {
        let args = MonthArgs {
            year: Some(2027),
            month: Some(1),
        };
        assert_eq!(args.resolve(month(2025, 5)).unwrap(), month(2027, 0));
    }

    #[test]
    fn test_resolve_month_only_keeps_year() {
        let args = MonthArgs {
            year: None,
            month: Some(12),
        };
        assert_eq!(args.resolve(month(2025, 5)).unwrap(), month(2025, 11));
    }
}
