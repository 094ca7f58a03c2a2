//! Runtime validation of loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use std::path::Path;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    ///
    /// The log level must be a filter the subscriber accepts and every
    /// configured file must exist. Language and message indices are only
    /// checked against a table once one is loaded.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        mlang_common::validate_level(&config.logging.level)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if let Some(path) = &config.table.path {
            Self::require_file("table.path", path)?;
        }

        if let Some(path) = &config.table.charset {
            Self::require_file("table.charset", path)?;
        }

        Ok(())
    }

    fn require_file(field: &str, path: &Path) -> Result<(), ConfigError> {
        if path.is_file() {
            Ok(())
        } else {
            Err(ConfigError::Validation(format!(
                "{field}: {} is not a readable file",
                path.display()
            )))
        }
    }
}
