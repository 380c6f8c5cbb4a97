//! Run-length scanner for the encoder's bar/space string.
//!
//! The encoder describes a symbol as a string of width tokens: `0`-`9`
//! give widths 0-9, `a`-`z` give widths 1-26 and mark guard bars that
//! reach into the text band, and `+`/`-` switch where the
//! human-readable text sits without occupying a drawing position. The
//! first token is always the leading quiet-zone gap; content tokens
//! after it alternate bar/space starting with a bar.

use crate::error::BarcodeError;
use crate::model::TextMode;

/// One content token of the run string, with the text mode in force
/// at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run {
    /// Width in module units: 0-9 for digit tokens, 1-26 for letters.
    pub(crate) width: u8,
    /// Letter-coded widths mark guard bars. Guard bars keep less
    /// clearance from the text band, so they render taller.
    pub(crate) guard: bool,
    /// Text placement mode in force at this token.
    pub(crate) mode: TextMode,
}

/// Scan a run-length string into content tokens.
///
/// Mode markers are folded into each token's `mode`, so the caller can
/// walk the result with a plain alternating bar/space counter; markers
/// never disturb that parity. Any byte outside `0-9a-z+-` rejects the
/// whole symbol: a skipped token would silently swap every later bar
/// and space.
pub(crate) fn scan_runs(runs: &str) -> Result<Vec<Run>, BarcodeError> {
    if runs.is_empty() {
        return Err(BarcodeError::BadSymbol("empty run-length string".into()));
    }
    if !runs.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(BarcodeError::BadSymbol(format!(
            "run-length string must start with a digit (the leading gap), got {runs:?}"
        )));
    }

    let mut tokens = Vec::with_capacity(runs.len());
    let mut mode = TextMode::Below;
    for (i, c) in runs.chars().enumerate() {
        match c {
            '0'..='9' => tokens.push(Run {
                width: c as u8 - b'0',
                guard: false,
                mode,
            }),
            'a'..='z' => tokens.push(Run {
                width: c as u8 - b'a' + 1,
                guard: true,
                mode,
            }),
            '+' => mode = TextMode::Above,
            '-' => mode = TextMode::Below,
            _ => {
                return Err(BarcodeError::BadSymbol(format!(
                    "run-length byte {c:?} at position {i} is outside 0-9a-z+-"
                )))
            }
        }
    }
    Ok(tokens)
}

/// Total width of a symbol in module units.
pub(crate) fn total_units(tokens: &[Run]) -> u32 {
    tokens.iter().map(|r| u32::from(r.width)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_letters_decode_to_widths() {
        let tokens = scan_runs("0319az").unwrap();
        let widths: Vec<u8> = tokens.iter().map(|r| r.width).collect();
        assert_eq!(widths, [0, 3, 1, 9, 1, 26]);
    }

    #[test]
    fn letters_are_guards_digits_are_not() {
        let tokens = scan_runs("1a1a").unwrap();
        let guards: Vec<bool> = tokens.iter().map(|r| r.guard).collect();
        assert_eq!(guards, [false, true, false, true]);
    }

    #[test]
    fn markers_switch_mode_without_taking_a_position() {
        let tokens = scan_runs("11+23-4").unwrap();
        assert_eq!(tokens.len(), 5);
        let modes: Vec<TextMode> = tokens.iter().map(|r| r.mode).collect();
        assert_eq!(
            modes,
            [
                TextMode::Below,
                TextMode::Below,
                TextMode::Above,
                TextMode::Above,
                TextMode::Below,
            ]
        );
    }

    #[test]
    fn total_units_sums_every_token() {
        let tokens = scan_runs("113a").unwrap();
        assert_eq!(total_units(&tokens), 6);
    }

    #[test]
    fn empty_string_is_rejected() {
        assert!(matches!(
            scan_runs(""),
            Err(BarcodeError::BadSymbol(_))
        ));
    }

    #[test]
    fn leading_token_must_be_a_digit() {
        assert!(scan_runs("a11").is_err());
        assert!(scan_runs("+11").is_err());
    }

    #[test]
    fn stray_byte_rejects_the_whole_symbol() {
        let err = scan_runs("11Q1").unwrap_err();
        assert!(err.to_string().contains("'Q'"), "got: {err}");
    }
}
