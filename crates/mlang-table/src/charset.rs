//! Character lists mapping table code units back to characters.
//!
//! The table generator does not store Unicode directly: each character is
//! replaced by its index in a character list file. The same file turns code
//! units back into text at runtime.
//!
//! File format, one entry per line after trimming trailing whitespace:
//!
//! ```text
//! # comment              ignored, as are empty lines
//! :128                   next character gets index 128 (decimal or 0x hex)
//! ABCabc                 consecutive indices, one per character
//! ```

use crate::error::{TableError, TableResult};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

const BOM: char = '\u{feff}';

/// Bidirectional character ↔ code-unit mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharList {
    indices: HashMap<char, u16>,
    chars: HashMap<u16, char>,
}

impl CharList {
    /// Parse character list text.
    pub fn parse(text: &str) -> TableResult<Self> {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let mut list = Self::default();
        let mut next: usize = 0;

        for (number, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(directive) = line.strip_prefix(':') {
                // Anything that is not a plain non-negative number is ignored.
                if let Some(index) = parse_index(directive.trim()) {
                    next = index;
                }
                continue;
            }

            for ch in line.chars() {
                let index = u16::try_from(next).map_err(|_| TableError::CharList {
                    line: number + 1,
                    reason: format!("index {next} for {ch:?} exceeds 16 bits"),
                })?;
                list.insert(ch, index);
                next += 1;
            }
        }

        debug!("Parsed character list with {} entries", list.len());
        Ok(list)
    }

    /// Read a character list file encoded as UTF-8, or UTF-16 with a BOM.
    pub fn from_file<P: AsRef<Path>>(path: P) -> TableResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let text = if bytes.starts_with(&[0xff, 0xfe]) {
            utf16_text(&bytes[2..], u16::from_le_bytes)?
        } else if bytes.starts_with(&[0xfe, 0xff]) {
            utf16_text(&bytes[2..], u16::from_be_bytes)?
        } else {
            String::from_utf8(bytes)?
        };
        Self::parse(&text)
    }

    fn insert(&mut self, ch: char, index: u16) {
        // A later listing of the same character moves it.
        if let Some(old) = self.indices.insert(ch, index) {
            if self.chars.get(&old) == Some(&ch) {
                self.chars.remove(&old);
            }
        }
        self.chars.insert(index, ch);
    }

    /// Number of listed characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no characters are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Code unit assigned to `ch`.
    #[must_use]
    pub fn index_of(&self, ch: char) -> Option<u16> {
        self.indices.get(&ch).copied()
    }

    /// Character behind code unit `unit`.
    #[must_use]
    pub fn char_at(&self, unit: u16) -> Option<char> {
        self.chars.get(&unit).copied()
    }

    /// Map text to code units.
    pub fn encode(&self, text: &str) -> TableResult<Vec<u16>> {
        text.chars()
            .map(|ch| self.index_of(ch).ok_or(TableError::UnlistedChar(ch)))
            .collect()
    }

    /// Map code units to text.
    pub fn decode(&self, units: &[u16]) -> TableResult<String> {
        units
            .iter()
            .map(|&unit| self.char_at(unit).ok_or(TableError::UnmappedCode(unit)))
            .collect()
    }
}

/// Decode code units from a table whose code units are plain UTF-16.
pub fn decode_utf16(units: &[u16]) -> TableResult<String> {
    String::from_utf16(units).map_err(|_| TableError::InvalidUtf16)
}

fn parse_index(text: &str) -> Option<usize> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn utf16_text(bytes: &[u8], word: fn([u8; 2]) -> u16) -> TableResult<String> {
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|pair| match pair {
            [a, b] => Ok(word([*a, *b])),
            _ => Err(TableError::InvalidUtf16),
        })
        .collect::<TableResult<_>>()?;
    decode_utf16(&units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_consecutive_indices() {
        let list = CharList::parse("ABC\nab").unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list.index_of('A'), Some(0));
        assert_eq!(list.index_of('C'), Some(2));
        assert_eq!(list.index_of('a'), Some(3));
        assert_eq!(list.char_at(4), Some('b'));
    }

    #[test]
    fn test_comments_blank_lines_and_trailing_space() {
        let list = CharList::parse("# header\n\nxy   \n#z\n").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.index_of('y'), Some(1));
        assert_eq!(list.index_of('#'), None);
        assert_eq!(list.index_of(' '), None);
    }

    #[test]
    fn test_offset_directives() {
        let list = CharList::parse(":32\n a\n:0x41\nAB\n:oops\nC").unwrap();
        assert_eq!(list.index_of(' '), Some(32));
        assert_eq!(list.index_of('a'), Some(33));
        assert_eq!(list.index_of('A'), Some(65));
        assert_eq!(list.index_of('B'), Some(66));
        // An unparsable directive leaves the running index alone.
        assert_eq!(list.index_of('C'), Some(67));
    }

    #[test]
    fn test_bom_is_dropped() {
        let list = CharList::parse("\u{feff}Q").unwrap();
        assert_eq!(list.index_of('Q'), Some(0));
        assert_eq!(list.index_of(BOM), None);
    }

    #[test]
    fn test_relisting_moves_character() {
        let list = CharList::parse("ab\n:10\na").unwrap();
        assert_eq!(list.index_of('a'), Some(10));
        assert_eq!(list.char_at(0), None);
        assert_eq!(list.char_at(10), Some('a'));
    }

    #[test]
    fn test_index_overflow() {
        let err = CharList::parse(":65535\nab").unwrap_err();
        assert!(matches!(err, TableError::CharList { line: 2, .. }));
    }

    #[test]
    fn test_encode_decode() {
        let list = CharList::parse(":72\nH\n:101\ne\n:108\nl\n:111\no").unwrap();
        let units = list.encode("Hello").unwrap();
        assert_eq!(units, vec![72, 101, 108, 108, 111]);
        assert_eq!(list.decode(&units).unwrap(), "Hello");

        assert!(matches!(list.encode("Hi"), Err(TableError::UnlistedChar('i'))));
        assert!(matches!(list.decode(&[72, 5]), Err(TableError::UnmappedCode(5))));
    }

    #[test]
    fn test_decode_utf16() {
        let units: Vec<u16> = "Grüße 🌍".encode_utf16().collect();
        assert_eq!(decode_utf16(&units).unwrap(), "Grüße 🌍");
        assert!(matches!(decode_utf16(&[0xd800]), Err(TableError::InvalidUtf16)));
    }

    #[test]
    fn test_from_file_utf16le() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut bytes = vec![0xff, 0xfe];
        for unit in "xyz".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        file.write_all(&bytes).unwrap();

        let list = CharList::from_file(file.path()).unwrap();
        assert_eq!(list.index_of('z'), Some(2));
    }

    #[test]
    fn test_from_file_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("# chars\nàé\n".as_bytes()).unwrap();

        let list = CharList::from_file(file.path()).unwrap();
        assert_eq!(list.decode(&[1, 0]).unwrap(), "éà");
    }
}
