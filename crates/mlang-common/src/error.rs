//! Application-wide error type.

use thiserror::Error;

/// Result type alias for mlang application operations.
pub type Result<T> = std::result::Result<T, MlangError>;

/// Application-level error.
///
/// Library crates carry their own error enums; this type is what they are
/// folded into at the application boundary.
#[derive(Error, Debug)]
pub enum MlangError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A packed table lookup or load failed.
    #[error("Message table error: {message}")]
    Table {
        /// Human-readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The logging subsystem could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MlangError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new table error with source.
    pub fn table_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Table {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}
