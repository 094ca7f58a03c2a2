//! Embedded demo table.
//!
//! Generated layout for two languages and four messages; code units are
//! Unicode, so no character list is needed to read it.
//!
//! | message         | English   | French      |
//! |-----------------|-----------|-------------|
//! | `MSG_ENGLISH`   | English   | Anglais     |
//! | `MSG_HELLO`     | Hello     | Bonjour     |
//! | `MSG_GOODBYE`   | Goodbye   | Au revoir   |
//! | `MSG_EMPTY`     |           |             |

use mlang_common::{LangId, MsgId};

/// English.
pub const L_ENGLISH: LangId = LangId(0);
/// French.
pub const L_FRENCH: LangId = LangId(1);
/// Number of languages in [`DEMO_PACK`].
pub const L_TOTAL: u16 = 2;

/// The name of the English language.
pub const MSG_ENGLISH: MsgId = MsgId(0);
/// A greeting.
pub const MSG_HELLO: MsgId = MsgId(1);
/// A farewell.
pub const MSG_GOODBYE: MsgId = MsgId(2);
/// Deliberately empty in every language.
pub const MSG_EMPTY: MsgId = MsgId(3);
/// Number of messages in [`DEMO_PACK`].
pub const MSG_TOTAL: u16 = 4;

/// Packed demo table.
#[rustfmt::skip]
pub static DEMO_PACK: [u16; 57] = [
       4,   // the total messages of a language
       2,   // the total number of languages

    // The offsets of languages
       3,  27,  55,

    // English message offsets
       5,  12,  17,  24,  24,

    // English messages
      69, 110, 103, 108, 105, 115, 104,
      72, 101, 108, 108, 111,
      71, 111, 111, 100,  98, 121, 101,

    // French message offsets
       5,  12,  19,  28,  28,

    // French messages
      65, 110, 103, 108,  97, 105, 115,
      66, 111, 110, 106, 111, 117, 114,
      65, 117,  32, 114, 101, 118, 111, 105, 114,
];

#[cfg(test)]
mod tests {
    use super::*;
    use mlang_table::{decode_utf16, MessageTable, PackedTable};

    #[test]
    fn test_header_matches_constants() {
        let table = PackedTable::new(&DEMO_PACK).unwrap();
        assert_eq!(table.message_count(), MSG_TOTAL);
        assert_eq!(table.language_count(), L_TOTAL);
    }

    #[test]
    fn test_every_message_decodes() {
        let mut messages = MessageTable::new(PackedTable::new(&DEMO_PACK).unwrap());
        let text = |m: &MessageTable<'static>, id| decode_utf16(m.get_message(id).unwrap()).unwrap();

        messages.set_language(L_ENGLISH).unwrap();
        assert_eq!(text(&messages, MSG_ENGLISH), "English");
        assert_eq!(text(&messages, MSG_HELLO), "Hello");
        assert_eq!(text(&messages, MSG_GOODBYE), "Goodbye");
        assert_eq!(text(&messages, MSG_EMPTY), "");

        messages.set_language(L_FRENCH).unwrap();
        assert_eq!(text(&messages, MSG_ENGLISH), "Anglais");
        assert_eq!(text(&messages, MSG_HELLO), "Bonjour");
        assert_eq!(text(&messages, MSG_GOODBYE), "Au revoir");
        assert_eq!(text(&messages, MSG_EMPTY), "");
    }
}
