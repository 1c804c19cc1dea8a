use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use rust_passforge::cli::{self, Args, CliCommand};
use rust_passforge::core::config::Config;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();

    let mut config = Config::load().context("Invalid configuration")?;
    if let Some(level) = &args.log_level {
        config.log_level = level
            .parse()
            .map_err(|_| anyhow!("Invalid log level '{}'", level))?;
    }

    init_logging(&config)?;
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Generate(generate_args) => {
            let succeeded = cli::handlers::run_generate(&config, &generate_args)
                .map_err(|e| anyhow!("{}", e))?;
            if !succeeded {
                return Ok(ExitCode::FAILURE);
            }
        }
        CliCommand::Score { password, json } => {
            cli::handlers::run_score(&password, json).map_err(|e| anyhow!("{}", e))?;
        }
        CliCommand::Interactive => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                // The menu loop checks this flag and returns on its own
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received. Shutting down...");
                    should_exit.store(true, Ordering::SeqCst);
                })
                .context("Failed to set Ctrl+C handler")?;
            }

            cli::menu::run_cli_menu(&config, should_exit).map_err(|e| {
                log::error!("CLI menu error: {:?}", e);
                anyhow!("{}", e)
            })?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
