// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

/// Generate random passwords and rate their strength
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute (defaults to the interactive generator)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}
