//! # mlang Table
//!
//! Zero-copy lookup of multi-language messages from a packed table.
//!
//! A packed table is a flat run of `u16` words produced offline: a header
//! with the message and language counts, one offset per language, and for
//! each language a block of message offsets followed by the message code
//! units. This crate never copies message data; every lookup returns a slice
//! borrowed from the table.
//!
//! # Example
//!
//! ```rust
//! use mlang_common::{LangId, MsgId};
//! use mlang_table::{MessageTable, PackedTable};
//!
//! # fn example() -> Result<(), mlang_table::TableError> {
//! static PACK: [u16; 21] = [
//!     1, 2, 3, 10, 19,
//!     2, 7, 72, 101, 108, 108, 111,
//!     2, 9, 66, 111, 110, 106, 111, 117, 114,
//! ];
//!
//! let mut messages = MessageTable::new(PackedTable::new(&PACK)?);
//! messages.set_language(LangId(1))?;
//! assert_eq!(messages.get_message(MsgId(0))?.len(), 7);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod accessor;
pub mod charset;
pub mod error;
pub mod loader;
pub mod table;

pub use accessor::MessageTable;
pub use charset::{decode_utf16, CharList};
pub use error::{TableError, TableResult};
pub use loader::{load_table_file, words_from_le_bytes, words_to_le_bytes};
pub use table::PackedTable;
