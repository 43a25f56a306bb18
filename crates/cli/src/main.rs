//! venuecal CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use venuecal_cli::catalog::load_catalog;
use venuecal_cli::cli::Cli;
use venuecal_cli::commands::{run, Context};
use venuecal_cli::config::Config;
use venuecal_core::calendar::{FixedClock, SystemClock};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Logs go to stderr so command output stays clean on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = load_catalog(cli.bookings.as_deref())?;

    let output = match cli.today {
        Some(today) => {
            tracing::debug!(%today, "Using fixed date as today");
            run(
                &cli.command,
                &Context {
                    catalog: &catalog,
                    config: &config,
                    clock: FixedClock(today),
                    format: cli.format,
                    quiet: cli.quiet,
                },
            )?
        }
        None => run(
            &cli.command,
            &Context {
                catalog: &catalog,
                config: &config,
                clock: SystemClock,
                format: cli.format,
                quiet: cli.quiet,
            },
        )?,
    };

    println!("{}", output);
    Ok(())
}
