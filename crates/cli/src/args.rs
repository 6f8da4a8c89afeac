//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global connection options to their `MUX_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration (see `mux_config::ConfigLoader`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "mux-cli")]
#[command(about = "Mux Data CLI - Inspect playback incidents from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  mux-cli incidents list --status open\n  mux-cli incidents get ABCD1234\n  mux-cli -o table incidents related ABCD1234 --measurement median\n"
)]
pub struct Cli {
    /// Base URL of the API (defaults to https://api.mux.com)
    #[arg(short, long, global = true, env = "MUX_BASE_URL")]
    pub base_url: Option<String>,

    /// Access token id
    #[arg(long, global = true, env = "MUX_TOKEN_ID")]
    pub token_id: Option<String>,

    /// Access token secret
    #[arg(long, global = true, env = "MUX_TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "MUX_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect Data incidents
    Incidents {
        #[command(subcommand)]
        command: commands::incidents::IncidentsCommand,
    },
}
