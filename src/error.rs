//! Error types for barcode planning.

use thiserror::Error;

use crate::model::Symbology;

/// Errors surfaced by barcode geometry generation.
///
/// Both variants mean "this input cannot be rendered". Recoverable
/// conditions (an unknown style code, a malformed text entry) are
/// logged and worked around instead, and never show up here.
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// The encoder rejected the input data: wrong digit count, a
    /// character outside the symbology's alphabet, bad check digit.
    #[error("cannot encode {data:?} as {symbology}: {reason}")]
    Unencodable {
        symbology: Symbology,
        data: String,
        reason: String,
    },

    /// The encoder handed back a symbol that violates the run-length
    /// contract, so no geometry can be laid out from it.
    #[error("invalid encoded symbol: {0}")]
    BadSymbol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unencodable_names_symbology_and_data() {
        let err = BarcodeError::Unencodable {
            symbology: Symbology::Ean,
            data: "12AB".to_string(),
            reason: "non-digit character".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("EAN"), "message was: {msg}");
        assert!(msg.contains("12AB"), "message was: {msg}");
    }

    #[test]
    fn bad_symbol_carries_detail() {
        let err = BarcodeError::BadSymbol("empty run-length string".to_string());
        assert_eq!(
            err.to_string(),
            "invalid encoded symbol: empty run-length string"
        );
    }
}
