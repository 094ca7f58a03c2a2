//! Configuration schema definitions using serde.

use mlang_common::{LangId, LogFormat, LoggingConfig, MsgId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Packed table sources.
    pub table: TableConfig,
    /// What to look up.
    pub lookup: LookupConfig,
    /// Logging configuration.
    pub logging: LogConfig,
}

/// Where the packed table and its character list come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Little-endian packed table file. `None` uses the embedded table.
    pub path: Option<PathBuf>,
    /// Character list used to turn code units back into text.
    pub charset: Option<PathBuf>,
}

/// Lookup selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    /// Language index to select.
    pub language: LangId,
    /// Message ID to fetch.
    pub message: MsgId,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `mlang_table=trace`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Whether to print event targets.
    pub include_targets: bool,
}

impl LogConfig {
    /// Convert into the logging subsystem's configuration.
    #[must_use]
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            include_targets: self.include_targets,
        }
    }
}
