//! Structured logging infrastructure for mlang

use crate::error::{MlangError, Result};
use serde::{Deserialize, Serialize};
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output with colors
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON records
    Json,
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "`mlang_table=trace`")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            include_targets: true,
        }
    }
}

/// Check that a filter directive string is accepted by the subscriber
pub fn validate_level(level: &str) -> Result<()> {
    if level.trim().is_empty() {
        return Err(MlangError::config("log level cannot be empty"));
    }
    EnvFilter::try_new(level)
        .map(|_| ())
        .map_err(|e| MlangError::config_with_source(format!("invalid log level '{level}'"), e))
}

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` wins over `config.level` when it is set. Events go to stderr so
/// stdout stays reserved for program output. Calling this twice returns an
/// error instead of panicking.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            MlangError::config_with_source(format!("invalid log level '{}'", config.level), e)
        })?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_target(config.include_targets),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_target(config.include_targets),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(config.include_targets),
            )
            .try_init(),
    };

    result.map_err(|e| MlangError::Logging(e.to_string()))
}
