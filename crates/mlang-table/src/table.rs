//! Read-only view over a packed message table.
//!
//! Layout, in `u16` words:
//!
//! ```text
//! [0]            messageCount (M)
//! [1]            languageCount (L)
//! [2 ..]         language offsets, relative to word 2
//! per language:  M + 1 message offsets, relative to the block start,
//!                then the code units of every message back to back
//! ```
//!
//! The generator writes `L + 1` language offsets, the last one marking the
//! end of the final block. Tables without that trailing entry are accepted;
//! their last block runs to the end of the buffer. A lookup never reads past
//! the block of the language it was asked for.

use crate::error::{TableError, TableResult};
use mlang_common::{LangId, MsgId};

/// Word index where the language offset table starts.
const LANG_OFFSET_BASE: usize = 2;

/// A borrowed packed table with its header already read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedTable<'a> {
    words: &'a [u16],
    message_count: u16,
    language_count: u16,
}

impl<'a> PackedTable<'a> {
    /// Wrap a word buffer, reading the header.
    ///
    /// Only the header and the presence of the language offsets are checked.
    /// Offsets are not walked here; a corrupt table surfaces as
    /// [`TableError::Malformed`] on the lookup that hits it.
    pub fn new(words: &'a [u16]) -> TableResult<Self> {
        let (message_count, language_count) = match words {
            [m, l, ..] => (*m, *l),
            _ => {
                return Err(TableError::malformed(format!(
                    "header needs 2 words, buffer has {}",
                    words.len()
                )))
            }
        };

        if message_count == 0 {
            return Err(TableError::malformed("message count is zero"));
        }
        if language_count == 0 {
            return Err(TableError::malformed("language count is zero"));
        }
        if words.len() < LANG_OFFSET_BASE + usize::from(language_count) {
            return Err(TableError::malformed(format!(
                "language offset table truncated: {language_count} languages, {} words",
                words.len()
            )));
        }

        Ok(Self {
            words,
            message_count,
            language_count,
        })
    }

    /// Number of distinct message IDs.
    #[must_use]
    pub const fn message_count(&self) -> u16 {
        self.message_count
    }

    /// Number of supported languages.
    #[must_use]
    pub const fn language_count(&self) -> u16 {
        self.language_count
    }

    /// The whole underlying buffer.
    #[must_use]
    pub const fn words(&self) -> &'a [u16] {
        self.words
    }

    /// Reject a language index outside `0..language_count`.
    pub fn check_language(&self, lang: LangId) -> TableResult<()> {
        if lang.0 < self.language_count {
            Ok(())
        } else {
            Err(TableError::LanguageOutOfRange {
                index: lang,
                count: self.language_count,
            })
        }
    }

    /// Reject a message ID outside `0..message_count`.
    pub fn check_message(&self, msg: MsgId) -> TableResult<()> {
        if msg.0 < self.message_count {
            Ok(())
        } else {
            Err(TableError::MessageOutOfRange {
                index: msg,
                count: self.message_count,
            })
        }
    }

    /// A language's block: its message offsets followed by its code units.
    /// Message offsets are relative to this slice.
    ///
    /// The block ends where the next language's block starts. The last block
    /// ends at the trailing language offset when the table carries one, and
    /// at the end of the buffer otherwise.
    pub fn language_block(&self, lang: LangId) -> TableResult<&'a [u16]> {
        self.check_language(lang)?;

        let base = self.block_start(lang.index())?;
        let end = if lang.0 + 1 < self.language_count || self.has_trailing_offset() {
            self.block_start(lang.index() + 1)?
        } else {
            self.words.len()
        };

        self.words.get(base..end).ok_or_else(|| {
            TableError::malformed(format!(
                "language {lang} block spans words {base}..{end}, outside the table"
            ))
        })
    }

    /// Absolute word index of the block named by language offset `slot`.
    fn block_start(&self, slot: usize) -> TableResult<usize> {
        self.words
            .get(LANG_OFFSET_BASE + slot)
            .map(|relative| LANG_OFFSET_BASE + usize::from(*relative))
            .ok_or_else(|| TableError::malformed("language offset table truncated"))
    }

    /// Whether the offset table holds `L + 1` entries. The first block then
    /// starts past the extra entry.
    fn has_trailing_offset(&self) -> bool {
        self.words
            .get(LANG_OFFSET_BASE)
            .is_some_and(|first| *first > self.language_count)
    }

    /// The `message_count + 1` message offsets of a language.
    pub fn message_offsets(&self, lang: LangId) -> TableResult<&'a [u16]> {
        let block = self.language_block(lang)?;
        block
            .get(..=usize::from(self.message_count))
            .ok_or_else(|| TableError::malformed(format!("language {lang} offset block truncated")))
    }

    /// Code units of message `msg` in language `lang`.
    ///
    /// Resolves language base, then message bounds, both relative; the
    /// result borrows the table.
    pub fn message(&self, lang: LangId, msg: MsgId) -> TableResult<&'a [u16]> {
        self.check_language(lang)?;
        self.check_message(msg)?;

        let block = self.language_block(lang)?;
        let (start, end) = match block.get(msg.index()..=msg.index() + 1) {
            Some([start, end]) => (usize::from(*start), usize::from(*end)),
            _ => {
                return Err(TableError::malformed(format!(
                    "language {lang} offset block truncated"
                )))
            }
        };

        if start > end {
            return Err(TableError::malformed(format!(
                "language {lang} offsets decrease at message {msg} ({start} > {end})"
            )));
        }

        block.get(start..end).ok_or_else(|| {
            TableError::malformed(format!(
                "language {lang} message {msg} spans {start}..{end}, past the end of the table"
            ))
        })
    }
}
