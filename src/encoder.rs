//! The encoder seam.
//!
//! barlib consumes the output of an external barcode encoding library
//! and never computes check digits, guard patterns or start/stop codes
//! itself. Host applications implement [`Encoder`] over whatever
//! library they link and hand the planner its output.

use crate::error::BarcodeError;
use crate::model::{EncodedSymbol, Symbology};

/// An external barcode encoder.
///
/// Returning an error is the normal way to report data the symbology
/// cannot express: wrong digit count, a character outside the alphabet,
/// checksum-incompatible input. The planner passes such errors through
/// untouched.
pub trait Encoder {
    fn encode(&self, symbology: Symbology, data: &str) -> Result<EncodedSymbol, BarcodeError>;
}

/// Symbology identifiers as the GNU Barcode encoding library numbers
/// them. One table rather than a branch per call site, so a new
/// symbology is a one-line addition.
const ENCODER_FLAGS: [(Symbology, u32); 12] = [
    (Symbology::Any, 0),
    (Symbology::Ean, 1),
    (Symbology::Upc, 2),
    (Symbology::Isbn, 3),
    (Symbology::Code39, 4),
    (Symbology::Code128, 5),
    (Symbology::Code128C, 6),
    (Symbology::Code128B, 7),
    (Symbology::I25, 8),
    (Symbology::Codabar, 10),
    (Symbology::Msi, 11),
    (Symbology::Plessey, 12),
];

/// Look up the encoding-library identifier for a symbology.
///
/// ```
/// use barlib::{encoder_flag, Symbology};
///
/// assert_eq!(encoder_flag(Symbology::Code128), 5);
/// assert_eq!(encoder_flag(Symbology::Any), 0);
/// ```
pub fn encoder_flag(symbology: Symbology) -> u32 {
    ENCODER_FLAGS
        .iter()
        .find(|&&(s, _)| s == symbology)
        .map(|&(_, flag)| flag)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbology_has_a_flag() {
        for s in Symbology::ALL {
            let in_table = ENCODER_FLAGS.iter().any(|&(t, _)| t == s);
            assert!(in_table, "{s} missing from the flag table");
        }
    }

    #[test]
    fn flags_are_distinct() {
        for (i, &(_, a)) in ENCODER_FLAGS.iter().enumerate() {
            for &(_, b) in &ENCODER_FLAGS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn auto_detect_is_flag_zero() {
        assert_eq!(encoder_flag(Symbology::Any), 0);
    }
}
