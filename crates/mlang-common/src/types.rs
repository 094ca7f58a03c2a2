//! Identifier newtypes for indexing a packed message table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of one supported language (translation set) in a packed table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LangId(pub u16);

impl LangId {
    /// Returns the identifier as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LangId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for LangId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Index of one logical message, stable across languages.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MsgId(pub u16);

impl MsgId {
    /// Returns the identifier as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MsgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for MsgId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}
