//! CLI command definitions.

mod month;

pub use month::MonthArgs;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Availability calendar for the Grand Ballroom and Chateau Hall.
#[derive(Debug, Parser)]
#[command(name = "venuecal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON booking catalog to use instead of the built-in one.
    #[arg(long, env = "VENUECAL_BOOKINGS")]
    pub bookings: Option<PathBuf>,

    /// Date to treat as today (YYYY-MM-DD).
    #[arg(long, env = "VENUECAL_TODAY")]
    pub today: Option<NaiveDate>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the venues.
    Venues,
    /// Show the availability grid for a month.
    Month {
        /// Only show this venue (key or name).
        #[arg(long)]
        venue: Option<String>,
        #[command(flatten)]
        month: MonthArgs,
        /// Move this many months forward (negative: backward).
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        shift: i64,
    },
    /// List the booked days of a venue.
    Booked {
        /// Venue key or name.
        #[arg(long)]
        venue: String,
        #[command(flatten)]
        month: MonthArgs,
    },
    /// Print the inquiry message for an available date.
    Inquire {
        /// Venue key or name.
        #[arg(long)]
        venue: String,
        /// Date to inquire about (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
    },
    /// List the years offered by the year picker.
    Years,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_month_command() {
        let cli = Cli::try_parse_from([
            "venuecal", "--today", "2025-06-01", "--format", "json", "month", "--venue",
            "chateauHall", "--year", "2026", "--month", "3", "--shift", "-2",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2025, 6, 1));
        match cli.command {
            Commands::Month {
                venue,
                month,
                shift,
            } => {
                assert_eq!(venue.as_deref(), Some("chateauHall"));
                assert_eq!(month.year, Some(2026));
                assert_eq!(month.month, Some(3));
                assert_eq!(shift, -2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_month_flag_is_range_checked() {
        let result = Cli::try_parse_from(["venuecal", "booked", "--venue", "x", "--month", "13"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_inquire_command() {
        let cli = Cli::try_parse_from([
            "venuecal",
            "inquire",
            "--venue",
            "Grand Ballroom",
            "--date",
            "2025-06-08",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Inquire { ref venue, date }
                if venue == "Grand Ballroom" && date == NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()
        ));
    }
}
