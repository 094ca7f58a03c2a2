//! Test utilities and shared fixtures for mlang.
//!
//! Provides logging setup for tests and a reference packer that lays out
//! per-language message lists exactly the way the offline table generator
//! does, so lookups can be checked against known input.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Encode a string as UTF-16 code units.
pub fn units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Cumulative offsets for consecutive runs of the given lengths, shifted past
/// the `lens.len() + 1` offset words that precede the data.
///
/// `[1, 2, 3]` gives `[4, 5, 7, 10]`.
pub fn offsets_from_lens(lens: &[usize]) -> Vec<u16> {
    let base = lens.len() + 1;
    let mut offsets = Vec::with_capacity(base);
    let mut acc = base;
    offsets.push(word(acc));
    for len in lens {
        acc += len;
        offsets.push(word(acc));
    }
    offsets
}

/// Build a packed table from `languages[lang][msg]` code-unit strings.
///
/// Layout: `[messageCount, languageCount, langOffset^(L+1), block^L]`, where
/// language offsets are relative to the language-offset table and each
/// block is `msgOffset^(M+1)` followed by the concatenated messages.
///
/// # Panics
///
/// Panics when there are no languages, no messages, languages disagree on
/// the message count, or the table does not fit in 16-bit offsets.
pub fn pack_messages(languages: &[Vec<Vec<u16>>]) -> Vec<u16> {
    assert!(!languages.is_empty(), "at least one language is required");
    let message_count = languages[0].len();
    assert!(message_count > 0, "at least one message is required");
    assert!(
        languages.iter().all(|msgs| msgs.len() == message_count),
        "every language must carry the same number of messages"
    );

    let blocks: Vec<Vec<u16>> = languages
        .iter()
        .map(|msgs| {
            let lens: Vec<usize> = msgs.iter().map(Vec::len).collect();
            let mut block = offsets_from_lens(&lens);
            for msg in msgs {
                block.extend_from_slice(msg);
            }
            block
        })
        .collect();

    let block_lens: Vec<usize> = blocks.iter().map(Vec::len).collect();
    let mut pack = vec![word(message_count), word(languages.len())];
    pack.extend(offsets_from_lens(&block_lens));
    for block in blocks {
        pack.extend(block);
    }
    pack
}

/// Build a packed table from UTF-8 strings, stored as UTF-16 code units.
pub fn pack_strings(languages: &[&[&str]]) -> Vec<u16> {
    let languages: Vec<Vec<Vec<u16>>> = languages
        .iter()
        .map(|msgs| msgs.iter().map(|m| units(m)).collect())
        .collect();
    pack_messages(&languages)
}

/// Two languages with one message each: "Hello" and "Bonjour".
pub fn hello_bonjour_pack() -> Vec<u16> {
    pack_strings(&[&["Hello"], &["Bonjour"]])
}

fn word(value: usize) -> u16 {
    u16::try_from(value).expect("packed table exceeds 16-bit offsets")
}

/// Property-based testing utilities using proptest.
#[cfg(any(test, feature = "proptest"))]
pub mod property_testing {
    use proptest::collection::vec;
    use proptest::prelude::*;

    /// Strategy for `languages[lang][msg]` tables with a shared message count.
    ///
    /// Messages may be empty; sizes stay well inside 16-bit offsets.
    pub fn languages_strategy() -> impl Strategy<Value = Vec<Vec<Vec<u16>>>> {
        (1usize..=4, 1usize..=6).prop_flat_map(|(langs, msgs)| {
            vec(vec(vec(any::<u16>(), 0..12), msgs..=msgs), langs..=langs)
        })
    }
}
