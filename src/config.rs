//! Runtime configuration for the `ip2num` record filter.
//!
//! Values come from the environment (optionally seeded from a `.env` file by
//! `dotenv`). Unset variables fall back to defaults; malformed ones are errors.

use std::env;
use std::error::Error;
use std::str::FromStr;

pub const ENV_DELIMITER: &str = "IP2NUM_DELIMITER";
pub const ENV_COLUMN: &str = "IP2NUM_COLUMN";
pub const ENV_NULL: &str = "IP2NUM_NULL";
pub const ENV_FORMAT: &str = "IP2NUM_FORMAT";
pub const ENV_LOG_CONFIG: &str = "IP2NUM_LOG_CONFIG";

/// How converted records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Input record with the number appended as one more delimited field.
    Tsv,
    /// One JSON object per record.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format {other:?}, expected tsv or json").into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Field separator for input records (and tsv output).
    pub delimiter: String,
    /// 0-based index of the field holding the address.
    pub column: usize,
    /// Token written for an absent number in tsv output.
    pub null_token: String,
    pub format: OutputFormat,
    /// Path of the log4rs yaml file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delimiter: "\t".to_string(),
            column: 0,
            null_token: "\\N".to_string(),
            format: OutputFormat::Tsv,
            log_config: "log4rs.yml".to_string(),
        }
    }
}

impl Config {
    /// Build a [`Config`] from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build a [`Config`] from any key lookup, defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(delimiter) = lookup(ENV_DELIMITER) {
            let delimiter = unescape(&delimiter);
            if delimiter.is_empty() {
                return Err(format!("{ENV_DELIMITER} must not be empty").into());
            }
            config.delimiter = delimiter;
        }
        if let Some(column) = lookup(ENV_COLUMN) {
            config.column = column
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_COLUMN} {column:?}: {e}"))?;
        }
        if let Some(null_token) = lookup(ENV_NULL) {
            config.null_token = null_token;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse()?;
        }
        if let Some(log_config) = lookup(ENV_LOG_CONFIG) {
            config.log_config = log_config;
        }

        log::debug!("Config: {config:?}");
        Ok(config)
    }
}

// `.env` files cannot hold a literal tab comfortably.
fn unescape(value: &str) -> String {
    match value {
        "\\t" => "\t".to_string(),
        "\\x01" => "\x01".to_string(),
        other => other.to_string(),
    }
}
