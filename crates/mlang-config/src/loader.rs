//! Configuration loading utilities

use crate::validator::ConfigValidator;
use crate::Config;
use mlang_common::{LangId, MlangError, MsgId};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming a configuration file.
pub const ENV_CONFIG_PATH: &str = "MLANG_CONFIG_PATH";
/// Environment variable overriding `table.path`.
pub const ENV_TABLE_PATH: &str = "MLANG_TABLE_PATH";
/// Environment variable overriding `table.charset`.
pub const ENV_CHARSET_PATH: &str = "MLANG_CHARSET_PATH";
/// Environment variable overriding `lookup.language`.
pub const ENV_LANGUAGE: &str = "MLANG_LANGUAGE";
/// Environment variable overriding `lookup.message`.
pub const ENV_MESSAGE: &str = "MLANG_MESSAGE";
/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "MLANG_LOG_LEVEL";

/// Files probed in the working directory when no path is given.
const DEFAULT_FILES: [&str; 3] = ["mlang.yaml", "mlang.yml", "mlang.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

impl From<ConfigError> for MlangError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse a configuration file, choosing the format by extension.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Load configuration from a file with environment variable overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let mut config = Self::parse_file(path)?;
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The configuration file [`ConfigLoader::load`] reads, or `None` when it
    /// falls back to defaults.
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(ENV_CONFIG_PATH).map(PathBuf::from))
            .or_else(|| {
                DEFAULT_FILES
                    .iter()
                    .map(Path::new)
                    .find(|p| p.exists())
                    .map(Path::to_path_buf)
            })
    }

    /// Load configuration from the first available source.
    ///
    /// Order: `explicit`, then `MLANG_CONFIG_PATH`, then `mlang.yaml`,
    /// `mlang.yml` or `mlang.toml` in the working directory, then defaults.
    /// Environment overrides and validation apply in every case.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = Self::resolve_path(explicit) {
            return Self::load_from_file(path);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Apply `MLANG_*` environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides from any variable source.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_TABLE_PATH) {
            config.table.path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup(ENV_CHARSET_PATH) {
            config.table.charset = Some(PathBuf::from(path));
        }

        if let Some(value) = lookup(ENV_LANGUAGE) {
            config.lookup.language = LangId(parse_var(ENV_LANGUAGE, &value)?);
        }

        if let Some(value) = lookup(ENV_MESSAGE) {
            config.lookup.message = MsgId(parse_var(ENV_MESSAGE, &value)?);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }

        Ok(())
    }
}

fn parse_var(var: &str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|e| ConfigError::EnvParse {
        var: var.to_string(),
        source: Box::new(e),
    })
}
