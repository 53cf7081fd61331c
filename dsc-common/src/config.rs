//! Configuration loading and config file resolution
//!
//! Config file path priority order:
//! 1. Command-line argument (highest priority)
//! 2. `DSC_CONFIG` environment variable
//! 3. `<user config dir>/dsc/config.toml`
//! 4. Built-in defaults (fallback)
//!
//! A missing config file never stops startup: the built-in defaults are used
//! and the returned `ConfigSource` says so, to be logged once the subscriber
//! is installed. A file that exists but cannot be parsed is an error.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "DSC_CONFIG";

/// Complete DSC configuration as read from TOML
///
/// Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial value store contents, in entry order
    pub values: Vec<f64>,

    /// Output rendering options
    pub display: DisplayConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Output rendering options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places used when rendering an average
    pub average_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            average_decimals: default_average_decimals(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (off, trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_average_decimals() -> usize {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Largest precision `format!` renders meaningfully for an f64
const MAX_AVERAGE_DECIMALS: usize = 17;

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(toml_content: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let toml_content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&toml_content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Reject values the engines are not defined for
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self.values.iter().find(|v| v.is_nan()) {
            return Err(Error::Config(format!("values must not contain NaN (got {})", bad)));
        }

        if self.display.average_decimals > MAX_AVERAGE_DECIMALS {
            return Err(Error::Config(format!(
                "display.average_decimals must be at most {} (got {})",
                MAX_AVERAGE_DECIMALS, self.display.average_decimals
            )));
        }

        validate_log_level(&self.logging.level)
    }
}

/// Check that `level` names a tracing level (or "off")
pub fn validate_log_level(level: &str) -> Result<()> {
    if level.eq_ignore_ascii_case("off") || level.parse::<tracing::Level>().is_ok() {
        Ok(())
    } else {
        Err(Error::Config(format!("unknown log level '{}'", level)))
    }
}

/// Where the resolved configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// Named explicitly but absent; defaults in use
    Missing(PathBuf),
    /// No file named or found
    Defaults,
}

impl ConfigSource {
    /// Report the source through tracing
    ///
    /// Resolution runs before logging is initialised, so callers log the
    /// source afterwards.
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded configuration from {}", path.display()),
            ConfigSource::Missing(path) => warn!(
                "Config file {} not found, using built-in defaults",
                path.display()
            ),
            ConfigSource::Defaults => debug!("No config file found, using built-in defaults"),
        }
    }
}

/// Resolves which config file to read, then loads it
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver; `cli_path` is the `--config` argument, if any
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self { cli_path }
    }

    /// Pick the config file path by priority, without touching the filesystem
    /// for explicit paths
    ///
    /// Returns `None` when neither an explicit path nor an existing user config
    /// file is available.
    pub fn config_path(&self) -> Option<PathBuf> {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_path {
            return Some(path.clone());
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        // Priority 3: Per-user config file, only if it exists
        default_config_path().filter(|path| path.exists())
    }

    /// Load the resolved configuration, degrading to defaults when the file
    /// is missing
    pub fn resolve(&self) -> Result<(Config, ConfigSource)> {
        let Some(path) = self.config_path() else {
            return Ok((Config::default(), ConfigSource::Defaults));
        };

        if !path.exists() {
            return Ok((Config::default(), ConfigSource::Missing(path)));
        }

        let config = Config::load(&path)?;
        Ok((config, ConfigSource::File(path)))
    }
}

/// Per-user config file location for the platform
///
/// `~/.config/dsc/config.toml` on Linux, the platform equivalent elsewhere.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dsc").join("config.toml"))
}
