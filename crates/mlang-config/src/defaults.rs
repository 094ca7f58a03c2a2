//! Default values for every configuration section.

use crate::schema::*;
use mlang_common::{LangId, LogFormat, MsgId};

impl Default for Config {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            lookup: LookupConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            path: None,
            charset: None,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            language: LangId(0),
            message: MsgId(0),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            include_targets: true,
        }
    }
}
