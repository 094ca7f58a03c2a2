//! Formatting helpers for code-unit output.

use std::fmt::Write as _;

/// Renders code units as decimal numbers, each followed by a comma.
///
/// `[72, 105]` becomes `"72,105,"`; an empty slice becomes `""`.
#[must_use]
pub fn format_code_units(units: &[u16]) -> String {
    let mut out = String::with_capacity(units.len() * 4);
    for unit in units {
        let _ = write!(out, "{unit},");
    }
    out
}

/// Renders the two-line `len:`/`str:` report for one message.
#[must_use]
pub fn format_message_report(units: &[u16]) -> String {
    format!("len: {}\nstr: {}", units.len(), format_code_units(units))
}
