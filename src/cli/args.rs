//! CLI argument definitions using clap
//!
//! Commands:
//! - quotegarden start --config <path>
//! - quotegarden check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// quotegarden - a small quotes REST API
#[derive(Parser, Debug)]
#[command(name = "quotegarden")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the quotes API server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./quotegarden.json")]
        config: PathBuf,
    },

    /// Validate the configuration and seed file, then exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./quotegarden.json")]
        config: PathBuf,
    },
}
