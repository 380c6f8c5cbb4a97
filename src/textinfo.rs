//! Parser for the encoder's text-placement entries.
//!
//! A `textinfo` string is a whitespace-separated list. Each entry is
//! either a bare mode marker (`+`/`-`) or an `<x>:<size>:<char>` triple
//! giving the horizontal offset, font size, and literal character of
//! one human-readable glyph.

/// Parse one `<x>:<size>:<char>` entry.
///
/// Only the first character after the second colon counts, so `"1:2:34"`
/// yields `'3'`. Returns `None` when the entry does not carry two
/// numbers and a character; callers log and skip such entries rather
/// than aborting the symbol.
pub(crate) fn parse_entry(entry: &str) -> Option<(f64, f64, char)> {
    let mut parts = entry.splitn(3, ':');
    let x: f64 = parts.next()?.parse().ok()?;
    let size: f64 = parts.next()?.parse().ok()?;
    let ch = parts.next()?.chars().next()?;
    Some((x, size, ch))
}
