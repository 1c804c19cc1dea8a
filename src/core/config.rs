// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

use crate::models::PasswordConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },

    #[error("Minimum password length {min} exceeds maximum {max}")]
    InvalidBounds { min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// Configuration for the password generator front end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            min_password_length: 6,
            max_password_length: 32,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_numbers: true,
            default_include_symbols: true,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Result<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            config.default_password_length = parse_var("DEFAULT_PASSWORD_LENGTH", &val)?;
        }

        if let Some(val) = lookup("MIN_PASSWORD_LENGTH") {
            config.min_password_length = parse_var("MIN_PASSWORD_LENGTH", &val)?;
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            config.max_password_length = parse_var("MAX_PASSWORD_LENGTH", &val)?;
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_UPPERCASE") {
            config.default_include_uppercase = parse_var("DEFAULT_INCLUDE_UPPERCASE", &val)?;
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_LOWERCASE") {
            config.default_include_lowercase = parse_var("DEFAULT_INCLUDE_LOWERCASE", &val)?;
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_NUMBERS") {
            config.default_include_numbers = parse_var("DEFAULT_INCLUDE_NUMBERS", &val)?;
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_SYMBOLS") {
            config.default_include_symbols = parse_var("DEFAULT_INCLUDE_SYMBOLS", &val)?;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = match level.to_lowercase().as_str() {
                "off" => LevelFilter::Off,
                "error" => LevelFilter::Error,
                "warn" => LevelFilter::Warn,
                "info" => LevelFilter::Info,
                "debug" => LevelFilter::Debug,
                "trace" => LevelFilter::Trace,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_LEVEL".to_string(),
                        value: level,
                    })
                }
            };
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        if config.min_password_length > config.max_password_length {
            return Err(ConfigError::InvalidBounds {
                min: config.min_password_length,
                max: config.max_password_length,
            });
        }

        Ok(config)
    }

    /// Starting options for a new generator, with the length pulled into bounds.
    pub fn default_options(&self) -> PasswordConfig {
        PasswordConfig {
            length: self.clamp_length(self.default_password_length),
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
        }
    }

    /// Pull `length` into the configured bounds. When the bounds are
    /// inverted the maximum wins.
    pub fn clamp_length(&self, length: usize) -> usize {
        length
            .max(self.min_password_length)
            .min(self.max_password_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_options(), PasswordConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = load(&[
            ("DEFAULT_PASSWORD_LENGTH", "20"),
            ("DEFAULT_INCLUDE_SYMBOLS", "false"),
            ("LOG_LEVEL", "Debug"),
            ("LOG_FILE", "/tmp/passforge.log"),
        ])
        .unwrap();

        assert_eq!(config.default_password_length, 20);
        assert!(!config.default_include_symbols);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passforge.log")));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_eq!(
            load(&[("DEFAULT_PASSWORD_LENGTH", "sixteen")]),
            Err(ConfigError::InvalidValue {
                key: "DEFAULT_PASSWORD_LENGTH".to_string(),
                value: "sixteen".to_string(),
            })
        );
        assert!(load(&[("DEFAULT_INCLUDE_NUMBERS", "yes")]).is_err());
        assert!(load(&[("LOG_LEVEL", "loud")]).is_err());
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        assert_eq!(
            load(&[("MIN_PASSWORD_LENGTH", "40")]),
            Err(ConfigError::InvalidBounds { min: 40, max: 32 })
        );
    }

    #[test]
    fn test_default_length_is_clamped_into_bounds() {
        let config = load(&[("DEFAULT_PASSWORD_LENGTH", "64")]).unwrap();
        assert_eq!(config.default_options().length, 32);

        let config = load(&[("DEFAULT_PASSWORD_LENGTH", "2")]).unwrap();
        assert_eq!(config.default_options().length, 6);
    }

    #[test]
    fn test_clamp_length_with_inverted_bounds_does_not_panic() {
        let config = Config {
            min_password_length: 40,
            max_password_length: 32,
            ..Config::default()
        };
        assert_eq!(config.clamp_length(16), 32);
        assert_eq!(config.default_options().length, 32);
    }
}
