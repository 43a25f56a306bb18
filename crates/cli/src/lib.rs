//! venuecal_cli - command line front end for the venue booking calendar.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
