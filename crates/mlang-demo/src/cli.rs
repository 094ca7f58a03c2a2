//! Command-line arguments.

use clap::Parser;
use mlang_common::{LangId, MsgId};
use mlang_config::Config;
use std::path::PathBuf;

/// Look up one message in a packed multi-language table.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mlang-demo", version, about)]
pub struct Args {
    /// Configuration file (YAML or TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Packed table file (little-endian u16 words); defaults to the embedded table
    #[arg(short, long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Character list for decoding code units into text
    #[arg(long, value_name = "FILE")]
    pub charset: Option<PathBuf>,

    /// Language index
    #[arg(short, long)]
    pub language: Option<u16>,

    /// Message ID
    #[arg(short, long)]
    pub message: Option<u16>,

    /// Print every message of the language instead of one
    #[arg(short, long)]
    pub all: bool,

    /// Decode code units as UTF-16 when no character list is given
    #[arg(long)]
    pub text: bool,

    /// Log filter directive, e.g. `debug` or `mlang_table=trace`
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    /// Overlay the flags that were given onto a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.table {
            config.table.path = Some(path.clone());
        }
        if let Some(path) = &self.charset {
            config.table.charset = Some(path.clone());
        }
        if let Some(language) = self.language {
            config.lookup.language = LangId(language);
        }
        if let Some(message) = self.message {
            config.lookup.message = MsgId(message);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
