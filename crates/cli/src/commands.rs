//! Command execution.
//!
//! Every command renders to a string so the binary only has to print it.

use chrono::Datelike;
use serde::Serialize;
use venuecal_core::calendar::{selectable_years, AvailabilityBoard, Clock, DisplayMonth};
use venuecal_core::venue::{Venue, VenueCatalog};

use crate::cli::{Commands, OutputFormat};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{json, pretty};

/// Everything a command needs besides its own arguments.
pub struct Context<'a, C> {
    pub catalog: &'a VenueCatalog,
    pub config: &'a Config,
    pub clock: C,
    pub format: OutputFormat,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct BookedReport<'a> {
    venue: &'a str,
    month: DisplayMonth,
    booked_days: &'a [u32],
}

#[derive(Debug, Serialize)]
struct YearsReport {
    years: Vec<i32>,
}

/// Runs `command` and returns its rendered output.
pub fn run<C: Clock>(command: &Commands, ctx: &Context<'_, C>) -> Result<String> {
    let today = ctx.clock.today();
    let current = DisplayMonth::containing(today);

    match command {
        Commands::Venues => Ok(match ctx.format {
            OutputFormat::Json => json::format_json(ctx.catalog),
            OutputFormat::Pretty => pretty::format_venues(&ctx.catalog.venues),
        }),
        Commands::Month {
            venue,
            month,
            shift,
        } => {
            let month = month.resolve(current)?.shift(*shift)?;
            tracing::debug!(%month, venue = ?venue, "Building availability board");

            let board = match venue {
                Some(query) => {
                    let venue = find_venue(ctx.catalog, query)?;
                    AvailabilityBoard::for_venues([venue], month, &ctx.clock)
                }
                None => AvailabilityBoard::build(ctx.catalog, month, &ctx.clock),
            };
            Ok(match ctx.format {
                OutputFormat::Json => json::format_json(&board),
                OutputFormat::Pretty => pretty::format_board(&board, ctx.quiet),
            })
        }
        Commands::Booked { venue, month } => {
            let venue = find_venue(ctx.catalog, venue)?;
            let month = month.resolve(current)?;
            let days = venue.booked_days(month);
            tracing::debug!(
                venue = %venue.key,
                %month,
                booked = days.len(),
                "Looked up bookings"
            );

            Ok(match ctx.format {
                OutputFormat::Json => json::format_json(&BookedReport {
                    venue: &venue.name,
                    month,
                    booked_days: days,
                }),
                OutputFormat::Pretty => pretty::format_booked(venue, month, days),
            })
        }
        Commands::Inquire { venue, date } => {
            let venue = find_venue(ctx.catalog, venue)?;
            let month = DisplayMonth::containing(*date);
            let selection = venue.select_day(month, Some(date.day())).ok_or_else(|| {
                CliError::DateBooked {
                    venue: venue.name.clone(),
                    date: *date,
                }
            })?;
            tracing::info!(venue = %venue.key, %date, "Prepared inquiry message");

            Ok(match ctx.format {
                OutputFormat::Json => json::format_json(&selection),
                OutputFormat::Pretty => pretty::format_selection(&selection),
            })
        }
        Commands::Years => {
            let years = selectable_years(today, ctx.config.year_span);
            Ok(match ctx.format {
                OutputFormat::Json => json::format_json(&YearsReport {
                    years: years.collect(),
                }),
                OutputFormat::Pretty => pretty::format_years(years),
            })
        }
    }
}

fn find_venue<'a>(catalog: &'a VenueCatalog, query: &str) -> Result<&'a Venue> {
    catalog
        .get(query)
        .ok_or_else(|| CliError::UnknownVenue(query.to_string()))
}
