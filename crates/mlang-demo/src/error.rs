//! Application-wide error types using thiserror.

use mlang_common::MlangError;
use mlang_config::ConfigError;
use mlang_table::TableError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Table load or lookup error.
    #[error("Message table error: {0}")]
    Table(#[from] TableError),

    /// Logging setup or other shared-infrastructure error.
    #[error(transparent)]
    Common(#[from] MlangError),

    /// I/O error writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the demo application.
pub type DemoResult<T> = Result<T, DemoError>;
