//! Message table accessor with an active-language selector

use crate::error::TableResult;
use crate::table::PackedTable;
use mlang_common::{LangId, MsgId};
use tracing::{debug, trace, warn};

/// Resolves message IDs against a packed table in the active language.
///
/// The selector is an ordinary field, so each accessor (and each thread
/// holding one) has its own active language. Cloning is cheap: the table is
/// borrowed, never copied.
#[derive(Debug, Clone, Copy)]
pub struct MessageTable<'a> {
    table: PackedTable<'a>,
    language: LangId,
}

impl<'a> MessageTable<'a> {
    /// Create an accessor with language 0 selected.
    ///
    /// Every table has at least one language, so language 0 is always a
    /// valid starting point.
    #[must_use]
    pub const fn new(table: PackedTable<'a>) -> Self {
        Self {
            table,
            language: LangId(0),
        }
    }

    /// Create an accessor with `language` selected.
    pub fn with_language(table: PackedTable<'a>, language: LangId) -> TableResult<Self> {
        let mut accessor = Self::new(table);
        accessor.set_language(language)?;
        Ok(accessor)
    }

    /// Select the language used by subsequent lookups.
    ///
    /// An out-of-range index is rejected and the previous selection is kept.
    pub fn set_language(&mut self, language: LangId) -> TableResult<()> {
        if let Err(e) = self.table.check_language(language) {
            warn!("Rejected language selection: {}", e);
            return Err(e);
        }

        debug!("Active language: {} -> {}", self.language, language);
        self.language = language;
        Ok(())
    }

    /// Code units of `msg` in the active language.
    ///
    /// The slice borrows the table, not this accessor, and its `len()` is the
    /// message length. Empty messages yield an empty slice.
    pub fn get_message(&self, msg: MsgId) -> TableResult<&'a [u16]> {
        match self.table.message(self.language, msg) {
            Ok(units) => {
                trace!(
                    language = %self.language,
                    message = %msg,
                    len = units.len(),
                    "Resolved message"
                );
                Ok(units)
            }
            Err(e) => {
                warn!(language = %self.language, message = %msg, "Message lookup failed: {}", e);
                Err(e)
            }
        }
    }

    /// Every message of the active language, in ID order.
    pub fn messages(&self) -> impl Iterator<Item = (MsgId, TableResult<&'a [u16]>)> + '_ {
        (0..self.table.message_count()).map(move |id| {
            let msg = MsgId(id);
            (msg, self.get_message(msg))
        })
    }

    /// The active language.
    #[must_use]
    pub const fn language(&self) -> LangId {
        self.language
    }

    /// The underlying table.
    #[must_use]
    pub const fn table(&self) -> PackedTable<'a> {
        self.table
    }

    /// Number of message IDs in the table.
    #[must_use]
    pub const fn message_count(&self) -> u16 {
        self.table.message_count()
    }

    /// Number of languages in the table.
    #[must_use]
    pub const fn language_count(&self) -> u16 {
        self.table.language_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use mlang_common::test_utils::{hello_bonjour_pack, init_test_logging, pack_strings, units};

    #[test]
    fn test_defaults_to_language_zero() {
        let pack = hello_bonjour_pack();
        let messages = MessageTable::new(PackedTable::new(&pack).unwrap());

        assert_eq!(messages.language(), LangId(0));
        assert_eq!(messages.table().words(), &pack[..]);
        assert_eq!(messages.get_message(MsgId(0)).unwrap(), &units("Hello")[..]);
    }

    #[test]
    fn test_switching_languages() {
        init_test_logging();

        let pack = hello_bonjour_pack();
        let mut messages = MessageTable::new(PackedTable::new(&pack).unwrap());

        messages.set_language(LangId(0)).unwrap();
        let hello = messages.get_message(MsgId(0)).unwrap();
        assert_eq!(hello.len(), 5);
        assert_eq!(hello, &[72, 101, 108, 108, 111]);

        messages.set_language(LangId(1)).unwrap();
        let bonjour = messages.get_message(MsgId(0)).unwrap();
        assert_eq!(bonjour.len(), 7);
        assert_eq!(bonjour, &[66, 111, 110, 106, 111, 117, 114]);

        // The earlier slice is still valid; it borrows the table.
        assert_eq!(hello.len(), 5);
    }

    #[test]
    fn test_rejected_language_keeps_selection() {
        init_test_logging();

        let pack = hello_bonjour_pack();
        let mut messages = MessageTable::new(PackedTable::new(&pack).unwrap());
        messages.set_language(LangId(1)).unwrap();

        let err = messages.set_language(LangId(2)).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(messages.language(), LangId(1));
    }

    #[test]
    fn test_message_boundary() {
        let pack = pack_strings(&[&["a", "b"]]);
        let messages = MessageTable::new(PackedTable::new(&pack).unwrap());

        assert!(messages.get_message(MsgId(1)).is_ok());
        assert!(matches!(
            messages.get_message(MsgId(2)),
            Err(TableError::MessageOutOfRange { count: 2, .. })
        ));
    }

    #[test]
    fn test_with_language() {
        let pack = hello_bonjour_pack();
        let table = PackedTable::new(&pack).unwrap();

        let messages = MessageTable::with_language(table, LangId(1)).unwrap();
        assert_eq!(messages.language(), LangId(1));
        assert!(MessageTable::with_language(table, LangId(9)).is_err());
    }

    #[test]
    fn test_messages_iterates_active_language() {
        let pack = pack_strings(&[&["one", "", "three"], &["un", "deux", ""]]);
        let mut messages = MessageTable::new(PackedTable::new(&pack).unwrap());
        messages.set_language(LangId(1)).unwrap();

        let all: Vec<(MsgId, Vec<u16>)> = messages
            .messages()
            .map(|(id, units)| (id, units.unwrap().to_vec()))
            .collect();
        assert_eq!(
            all,
            vec![
                (MsgId(0), units("un")),
                (MsgId(1), units("deux")),
                (MsgId(2), Vec::new()),
            ]
        );
    }

    #[test]
    fn test_independent_accessors_share_one_table() {
        let pack = hello_bonjour_pack();
        let table = PackedTable::new(&pack).unwrap();

        let english = MessageTable::new(table);
        let french = MessageTable::with_language(table, LangId(1)).unwrap();

        std::thread::scope(|s| {
            let en = s.spawn(|| english.get_message(MsgId(0)).unwrap().len());
            let fr = s.spawn(|| french.get_message(MsgId(0)).unwrap().len());
            assert_eq!(en.join().unwrap(), 5);
            assert_eq!(fr.join().unwrap(), 7);
        });
    }
}
