//! Application configuration.
//!
//! Settings come from an optional TOML file. Every key is optional:
//!
//! ```toml
//! log_level = "info"          # any tracing EnvFilter directive; RUST_LOG wins
//! service_commission = 600    # naira added to each payment quote
//! output = "text"             # "text" or "json"
//! date_format = "%d/%m/%Y"    # chrono format for report dates
//! ```
//!
//! When no path is given on the command line, `easytax.toml` in the working
//! directory is used if it exists.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::calculations::payment::SERVICE_COMMISSION;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "easytax.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("service_commission must not be negative, got {0}")]
    NegativeCommission(Decimal),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub log_level: String,
    pub service_commission: Decimal,
    pub output: OutputFormat,
    pub date_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            service_commission: SERVICE_COMMISSION,
            output: OutputFormat::Text,
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text. `path` is only used in errors.
    pub fn from_toml_str(
        contents: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.service_commission < Decimal::ZERO {
            return Err(ConfigError::NegativeCommission(config.service_commission));
        }

        Ok(config)
    }

    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, or falls back to defaults.
    ///
    /// An explicitly requested file that cannot be read is an error; a missing
    /// default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.is_file() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");

        Self::from_toml_str(&contents, &path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn parse(contents: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_toml_str(contents, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn defaults_match_standard_commission() {
        let config = AppConfig::default();

        assert_eq!(config.service_commission, dec!(600));
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn all_keys_are_read() {
        let config = parse(
            r#"
log_level = "debug"
service_commission = 750
output = "json"
date_format = "%Y-%m-%d"
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            AppConfig {
                log_level: "debug".to_string(),
                service_commission: dec!(750),
                output: OutputFormat::Json,
                date_format: "%Y-%m-%d".to_string(),
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse("colour = \"green\"").unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        assert!(parse("output = \"xml\"").is_err());
    }

    #[test]
    fn negative_commission_is_rejected() {
        let err = parse("service_commission = -5").unwrap_err();

        assert!(matches!(err, ConfigError::NegativeCommission(c) if c == dec!(-5)));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("no/such/easytax.toml"))).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
