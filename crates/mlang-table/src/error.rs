//! Error types for message table operations

use mlang_common::{LangId, MlangError, MsgId};
use thiserror::Error;

/// Errors that can occur while loading or reading a packed table
#[derive(Error, Debug)]
pub enum TableError {
    /// Language index is not below the table's language count
    #[error("Language {index} out of range (table has {count} languages)")]
    LanguageOutOfRange {
        /// Requested language
        index: LangId,
        /// Number of languages in the table
        count: u16,
    },

    /// Message ID is not below the table's message count
    #[error("Message {index} out of range (table has {count} messages)")]
    MessageOutOfRange {
        /// Requested message
        index: MsgId,
        /// Number of messages in the table
        count: u16,
    },

    /// The words do not follow the packed layout
    #[error("Malformed message table: {reason}")]
    Malformed {
        /// What the checked read ran into
        reason: String,
    },

    /// A byte buffer cannot be split into 16-bit words
    #[error("Table byte length {0} is not a multiple of 2")]
    OddByteLength(usize),

    /// A code unit has no entry in the character list
    #[error("Code unit {0} is not mapped by the character list")]
    UnmappedCode(u16),

    /// A character has no entry in the character list
    #[error("Character {0:?} is not listed in the character list")]
    UnlistedChar(char),

    /// Code units are not valid UTF-16
    #[error("Text is not valid UTF-16")]
    InvalidUtf16,

    /// Bytes are not valid UTF-8
    #[error("Text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A character list line could not be applied
    #[error("Invalid character list at line {line}: {reason}")]
    CharList {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// Whether this is a rejected language or message index
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::LanguageOutOfRange { .. } | Self::MessageOutOfRange { .. }
        )
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl From<TableError> for MlangError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::Io(io) => Self::Io(io),
            other => Self::table_with_source(other.to_string(), other),
        }
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_classification() {
        let lang = TableError::LanguageOutOfRange {
            index: LangId(2),
            count: 2,
        };
        let msg = TableError::MessageOutOfRange {
            index: MsgId(5),
            count: 5,
        };
        assert!(lang.is_out_of_range());
        assert!(msg.is_out_of_range());
        assert!(!TableError::malformed("x").is_out_of_range());
        assert!(!TableError::OddByteLength(3).is_out_of_range());
    }

    #[test]
    fn test_display() {
        let err = TableError::LanguageOutOfRange {
            index: LangId(2),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "Language 2 out of range (table has 2 languages)"
        );
    }

    #[test]
    fn test_into_application_error() {
        let err: MlangError = TableError::OddByteLength(3).into();
        assert!(matches!(err, MlangError::Table { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MlangError = TableError::Io(io).into();
        assert!(matches!(err, MlangError::Io(_)));
    }
}
