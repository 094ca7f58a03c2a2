//! Demo runner: resolve the configured table and print a lookup.

use crate::error::DemoResult;
use crate::pack::DEMO_PACK;
use mlang_common::format_message_report;
use mlang_config::Config;
use mlang_table::{decode_utf16, load_table_file, CharList, MessageTable, PackedTable};
use std::io::Write;
use tracing::{debug, info};

/// Install the tracing subscriber described by `config.logging`.
pub fn init_logging(config: &Config) -> DemoResult<()> {
    mlang_common::init_logging(&config.logging.to_logging_config())?;
    Ok(())
}

/// Table words, either compiled in or read from disk.
#[derive(Debug, Clone)]
pub enum TableSource {
    /// The embedded [`DEMO_PACK`].
    Embedded,
    /// Words loaded from a table file.
    Loaded(Vec<u16>),
}

impl TableSource {
    /// Resolve the table named by the configuration.
    pub fn from_config(config: &Config) -> DemoResult<Self> {
        match &config.table.path {
            Some(path) => Ok(Self::Loaded(load_table_file(path)?)),
            None => {
                debug!("Using embedded demo table");
                Ok(Self::Embedded)
            }
        }
    }

    /// The table words.
    #[must_use]
    pub fn words(&self) -> &[u16] {
        match self {
            Self::Embedded => &DEMO_PACK[..],
            Self::Loaded(words) => words.as_slice(),
        }
    }
}

/// How code units are turned into a `text:` line, if at all.
#[derive(Debug, Clone)]
pub enum TextDecoder {
    /// Only print code units.
    Off,
    /// Code units are UTF-16.
    Utf16,
    /// Code units index a character list.
    CharList(CharList),
}

impl TextDecoder {
    /// Pick a decoder: a configured character list wins over `utf16`.
    pub fn from_config(config: &Config, utf16: bool) -> DemoResult<Self> {
        if let Some(path) = &config.table.charset {
            let list = CharList::from_file(path)?;
            info!("Loaded character list {} ({} characters)", path.display(), list.len());
            return Ok(Self::CharList(list));
        }
        Ok(if utf16 { Self::Utf16 } else { Self::Off })
    }

    fn decode(&self, units: &[u16]) -> DemoResult<Option<String>> {
        Ok(match self {
            Self::Off => None,
            Self::Utf16 => Some(decode_utf16(units)?),
            Self::CharList(list) => Some(list.decode(units)?),
        })
    }
}

/// One configured lookup run.
pub struct Demo {
    config: Config,
    decoder: TextDecoder,
    all: bool,
}

impl Demo {
    /// Creates a demo run.
    #[must_use]
    pub const fn new(config: Config, decoder: TextDecoder, all: bool) -> Self {
        Self {
            config,
            decoder,
            all,
        }
    }

    /// Select the configured language, fetch, and write the report to `out`.
    pub fn run<W: Write>(&self, source: &TableSource, out: &mut W) -> DemoResult<()> {
        let mut messages = MessageTable::new(PackedTable::new(source.words())?);
        info!(
            "Table has {} messages in {} languages ({} words)",
            messages.message_count(),
            messages.language_count(),
            messages.table().words().len()
        );
        messages.set_language(self.config.lookup.language)?;

        if self.all {
            for (id, units) in messages.messages() {
                writeln!(out, "[{id}]")?;
                self.write_message(out, units?)?;
            }
        } else {
            let units = messages.get_message(self.config.lookup.message)?;
            self.write_message(out, units)?;
        }
        Ok(())
    }

    fn write_message<W: Write>(&self, out: &mut W, units: &[u16]) -> DemoResult<()> {
        writeln!(out, "{}", format_message_report(units))?;
        if let Some(text) = self.decoder.decode(units)? {
            writeln!(out, "text: {text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::{L_FRENCH, MSG_GOODBYE};
    use mlang_common::LangId;

    fn run_to_string(demo: &Demo, source: &TableSource) -> String {
        let mut out = Vec::new();
        demo.run(source, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_run_prints_english_name() {
        let demo = Demo::new(Config::default(), TextDecoder::Off, false);
        assert_eq!(
            run_to_string(&demo, &TableSource::Embedded),
            "len: 7\nstr: 69,110,103,108,105,115,104,\n"
        );
    }

    #[test]
    fn test_utf16_text_line() {
        let mut config = Config::default();
        config.lookup.language = L_FRENCH;
        config.lookup.message = MSG_GOODBYE;

        let demo = Demo::new(config, TextDecoder::Utf16, false);
        let output = run_to_string(&demo, &TableSource::Embedded);
        assert!(output.starts_with("len: 9\n"));
        assert!(output.ends_with("text: Au revoir\n"));
    }

    #[test]
    fn test_all_messages() {
        let demo = Demo::new(Config::default(), TextDecoder::Utf16, true);
        let output = run_to_string(&demo, &TableSource::Embedded);

        assert_eq!(output.matches("len: ").count(), 4);
        assert!(output.contains("[1]\nlen: 5\nstr: 72,101,108,108,111,\ntext: Hello\n"));
        assert!(output.ends_with("[3]\nlen: 0\nstr: \ntext: \n"));
    }

    #[test]
    fn test_out_of_range_language_fails() {
        let mut config = Config::default();
        config.lookup.language = LangId(2);

        let demo = Demo::new(config, TextDecoder::Off, false);
        let mut out = Vec::new();
        assert!(demo.run(&TableSource::Embedded, &mut out).is_err());
        assert!(out.is_empty());
    }
}
