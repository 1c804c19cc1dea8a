// src/cli/handlers.rs
use std::error::Error;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::commands::GenerateArgs;
use crate::core::config::Config;
use crate::generators::{analyze, PasswordGenerator};
use crate::models::{OptionsError, PasswordConfig, StrengthRating};
use crate::utils::format_strength;

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthRating,
}

// Merge command line flags over the configured defaults and check the bounds
pub fn build_options(
    config: &Config,
    args: &GenerateArgs,
) -> Result<PasswordConfig, OptionsError> {
    let defaults = config.default_options();

    let options = PasswordConfig {
        length: args.length.unwrap_or(defaults.length),
        include_uppercase: defaults.include_uppercase && !args.no_uppercase,
        include_lowercase: defaults.include_lowercase && !args.no_lowercase,
        include_numbers: defaults.include_numbers && !args.no_numbers,
        include_symbols: defaults.include_symbols && !args.no_symbols,
    };

    options.validate(config.min_password_length, config.max_password_length)?;
    Ok(options)
}

fn generate_batch<R: Rng>(
    generator: &mut PasswordGenerator<R>,
    options: &PasswordConfig,
    count: usize,
) -> Vec<GeneratedPassword> {
    (0..count)
        .map(|_| {
            let password = generator.generate_password(options);
            let strength = generator.analyze_password_strength(&password);
            GeneratedPassword { password, strength }
        })
        .collect()
}

pub fn handle_generate(
    config: &Config,
    args: &GenerateArgs,
) -> Result<Vec<GeneratedPassword>, Box<dyn Error>> {
    let options = build_options(config, args)?;
    log::info!(
        "Generating {} password(s) of length {} from {} classes",
        args.count,
        options.length,
        options.selected_classes().len()
    );

    let generated = match args.seed {
        Some(seed) => {
            let mut generator = PasswordGenerator::with_rng(ChaCha8Rng::seed_from_u64(seed));
            generate_batch(&mut generator, &options, args.count)
        }
        None => generate_batch(&mut PasswordGenerator::new(), &options, args.count),
    };

    Ok(generated)
}

// Body printed in JSON mode, for success and failure alike
pub fn generate_response(result: &Result<Vec<GeneratedPassword>, Box<dyn Error>>) -> Value {
    match result {
        Ok(generated) => json!({
            "success": true,
            "passwords": generated,
        }),
        Err(e) => json!({
            "success": false,
            "error": format!("Failed to generate password: {}", e),
        }),
    }
}

/// Print the requested passwords. In JSON mode a failed request is reported
/// only in the printed body and the call returns `Ok(false)`.
pub fn run_generate(config: &Config, args: &GenerateArgs) -> Result<bool, Box<dyn Error>> {
    let result = handle_generate(config, args);

    if args.json {
        println!("{}", generate_response(&result));
        return Ok(result.is_ok());
    }

    for entry in &result? {
        println!("{}", entry.password);
        println!("{}", format_strength(entry.strength));
    }

    Ok(true)
}

pub fn run_score(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let report = analyze(password);
    log::debug!("Scored password: {} points, {}", report.points, report.rating);

    if json {
        let response = json!({
            "success": true,
            "strength": report.rating,
            "points": report.points,
            "feedback": report.feedback,
        });
        println!("{}", response);
        return Ok(());
    }

    println!("{}", format_strength(report.rating));
    println!("Points: {}/6", report.points);
    for line in &report.feedback {
        println!("  • {}", line);
    }

    Ok(())
}
