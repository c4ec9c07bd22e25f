//! CLI module for quotegarden
//!
//! Provides the command-line interface:
//! - start: load config, seed the store, enter the serving loop
//! - check: validate config and seed file, print the quote count

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, start, Config};
pub use errors::{CliError, CliResult};
