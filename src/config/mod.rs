//! Application configuration loading and validation.
//!
//! Configuration is a small TOML file; every key is optional.
//!
//! ```toml
//! data_dir = "data"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [archive]
//! daily_retention = 30
//! guard_monthly_rollover = true
//! ```
//!
//! `PHARMACY_DATA_DIR` overrides `data_dir`.

mod archive;
mod logging;

pub use archive::ArchiveConfig;
pub use logging::LoggingConfig;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Environment variable overriding [`Config::data_dir`].
pub const DATA_DIR_ENV: &str = "PHARMACY_DATA_DIR";

/// Default config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pharmacy-ledger.toml";

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the JSON documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub archive: ArchiveConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            logging: LoggingConfig::default(),
            archive: ArchiveConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise start from defaults, then apply
    /// environment overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::parse_toml(&content)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(ConfigError::ReadFile(err).into()),
        };
        config.with_data_dir_override(std::env::var(DATA_DIR_ENV).ok())
    }

    /// Replace `data_dir` when an override is present.
    pub fn with_data_dir_override(mut self, data_dir: Option<String>) -> Result<Self> {
        if let Some(dir) = data_dir {
            self.data_dir = PathBuf::from(dir);
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "data_dir" }.into());
        }
        if self.archive.daily_retention == 0 {
            return Err(ConfigError::InvalidValue {
                field: "daily_retention",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("unknown log format '{}'", self.logging.format),
            }
            .into());
        }
        Ok(())
    }
}
