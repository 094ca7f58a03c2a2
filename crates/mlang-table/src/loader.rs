//! Load-time decoding of packed tables shipped as files.
//!
//! On disk a table is its words in little-endian order, with no framing.
//! Tables compiled into the binary skip this module and wrap a `static`
//! word array directly.

use crate::error::{TableError, TableResult};
use std::path::Path;
use tracing::{debug, info};

/// Decode little-endian bytes into table words.
pub fn words_from_le_bytes(bytes: &[u8]) -> TableResult<Vec<u16>> {
    if bytes.len() % 2 != 0 {
        return Err(TableError::OddByteLength(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Encode table words as little-endian bytes, the inverse of
/// [`words_from_le_bytes`].
#[must_use]
pub fn words_to_le_bytes(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Read a packed table file into memory.
///
/// The caller owns the returned words and builds a
/// [`PackedTable`](crate::PackedTable) over them.
pub fn load_table_file<P: AsRef<Path>>(path: P) -> TableResult<Vec<u16>> {
    let path = path.as_ref();
    debug!("Loading packed table from {}", path.display());

    let bytes = std::fs::read(path)?;
    let words = words_from_le_bytes(&bytes)?;

    info!(
        "Loaded packed table {} ({} words)",
        path.display(),
        words.len()
    );
    Ok(words)
}
