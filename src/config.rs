//! Configuration management for Sellah.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "data/addressbook.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration for Sellah.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON data file (default: "data/addressbook.json")
    pub data_file: PathBuf,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SELLAH_DATA_FILE`: Path of the address book document
    /// - `LOG_LEVEL`: One of off, error, warn, info, debug, trace
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, which is the command console
        let _ = dotenvy::dotenv();

        let data_file = match env::var("SELLAH_DATA_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "SELLAH_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let log_level = Self::parse_log_level("LOG_LEVEL")?;

        Ok(Config {
            data_file,
            log_level,
        })
    }

    /// Read a log level variable, defaulting to "warn".
    fn parse_log_level(var_name: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_ascii_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
                    })
                }
            }
            Err(_) => Ok(DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
