// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};
use std::fmt;

#[derive(Subcommand)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Rate the strength of a password
    Score {
        /// Password to rate
        #[arg(required = true)]
        password: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the interactive generator
    Interactive,
}

// Written by hand so the password passed to `score` never reaches a log line
impl fmt::Debug for CliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliCommand::Generate(args) => f.debug_tuple("Generate").field(args).finish(),
            CliCommand::Score { password: _, json } => f
                .debug_struct("Score")
                .field("password", &"<redacted>")
                .field("json", json)
                .finish(),
            CliCommand::Interactive => write!(f, "Interactive"),
        }
    }
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH or 16)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
