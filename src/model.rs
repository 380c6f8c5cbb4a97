//! Data model for barcode geometry.
//!
//! An [`EncodedSymbol`] is what an external encoding library hands us:
//! run-length and text-placement strings plus sizing hints. A
//! [`BarcodePlan`] is what the planner produces from it: bar rectangles
//! and positioned characters in drawing units, ready for any surface to
//! paint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Barcode symbology: the standard that defines a symbol's alphabet,
/// check digit, and bar patterns.
///
/// The numeric codes (for documents that store styles as integers)
/// follow the declaration order; [`Symbology::from_code_lossy`] maps
/// unknown codes to [`Symbology::Any`] with a logged warning rather
/// than failing a whole document over one bad attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbology {
    Ean,
    Upc,
    Isbn,
    Code39,
    Code128,
    Code128C,
    Code128B,
    I25,
    Codabar,
    Msi,
    Plessey,
    /// Let the encoder pick a symbology that fits the data
    Any,
}

/// Where the human-readable text sits relative to the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Text under the bars; bars stop short of the bottom edge
    #[default]
    Below,
    /// Text over the bars; bars are lifted and shortened at both ends
    Above,
}

/// A symbol as returned by an external barcode encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedSymbol {
    /// Width-encoded bars and spaces. `0`-`9` are widths 0-9, `a`-`z`
    /// are widths 1-26 and mark guard bars, `+`/`-` switch the text
    /// mode without taking a position. The first token is the leading
    /// quiet-zone gap; after it, tokens alternate bar/space starting
    /// with a bar.
    pub runs: String,
    /// Whitespace-separated text placement: `<x>:<size>:<char>` entries
    /// and bare `+`/`-` mode markers
    pub textinfo: String,
    /// Whitespace border on every side, in drawing units (not scaled)
    pub margin: f64,
    /// Intrinsic width hint; `None` means "just wide enough"
    pub width: Option<f64>,
    /// Intrinsic height hint; `None` means the default height, scaled
    pub height: Option<f64>,
}

/// One bar of a planned symbol.
///
/// `x` is the horizontal *center* of the bar. Surfaces that stroke
/// lines use it directly as the stroke position; surfaces that fill
/// rectangles put the left edge at `x - width / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Horizontal center, from the plan's left edge
    pub x: f64,
    /// Top edge, from the plan's top edge
    pub y: f64,
    /// Ink width, already shrunk for ink spread
    pub width: f64,
    /// Bar height; shorter than the symbol when text needs room
    pub height: f64,
}

/// One positioned character of the human-readable line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextChar {
    /// Baseline start, from the plan's left edge
    pub x: f64,
    /// Baseline, from the plan's top edge
    pub y: f64,
    /// Font size in drawing units, scale and shrink already applied
    pub font_size: f64,
    /// The literal character to draw
    pub ch: char,
}

/// A device-independent drawing plan for one barcode symbol.
///
/// Built fresh by every planner call and owned by the caller. Painting
/// it is the renderer's job: screen, print surface, or the bundled SVG
/// preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodePlan {
    /// Bar rectangles, in symbol order
    pub bars: Vec<Bar>,
    /// Human-readable characters, in symbol order (empty when text is off)
    pub chars: Vec<TextChar>,
    /// Overall width including both margins
    pub width: f64,
    /// Overall height including both margins
    pub height: f64,
}

impl Symbology {
    /// Every symbology, in document-code order.
    pub const ALL: [Symbology; 12] = [
        Symbology::Ean,
        Symbology::Upc,
        Symbology::Isbn,
        Symbology::Code39,
        Symbology::Code128,
        Symbology::Code128C,
        Symbology::Code128B,
        Symbology::I25,
        Symbology::Codabar,
        Symbology::Msi,
        Symbology::Plessey,
        Symbology::Any,
    ];

    /// Numeric code as stored in label documents.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Decode a stored style code, falling back to auto-detection when
    /// the code is unknown.
    pub fn from_code_lossy(code: i32) -> Symbology {
        match Symbology::ALL.iter().find(|s| s.code() == code) {
            Some(&s) => s,
            None => {
                log::warn!("illegal barcode style {code}, using auto-detect");
                Symbology::Any
            }
        }
    }

    /// Parse a symbology name as written in config files and menus.
    /// Case and embedded spaces are ignored, so `"Code 39"`, `"code39"`
    /// and `"CODE39"` all match.
    pub fn from_name(name: &str) -> Option<Symbology> {
        let wanted = compact_name(name);
        Symbology::ALL
            .iter()
            .find(|s| compact_name(s.name()) == wanted)
            .copied()
    }

    /// Human-readable name, as shown in style menus.
    pub fn name(self) -> &'static str {
        match self {
            Symbology::Ean => "EAN",
            Symbology::Upc => "UPC",
            Symbology::Isbn => "ISBN",
            Symbology::Code39 => "Code 39",
            Symbology::Code128 => "Code 128",
            Symbology::Code128C => "Code 128C",
            Symbology::Code128B => "Code 128B",
            Symbology::I25 => "Interleaved 2 of 5",
            Symbology::Codabar => "Codabar",
            Symbology::Msi => "MSI",
            Symbology::Plessey => "Plessey",
            Symbology::Any => "Any",
        }
    }
}

fn compact_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TextMode {
    /// Recognize a bare `+`/`-` marker entry from a text-placement
    /// string. Anything else (including entries that merely *start*
    /// with a sign, like `"-1.5:8:X"`) is not a marker.
    pub fn from_marker(entry: &str) -> Option<TextMode> {
        match entry {
            "+" => Some(TextMode::Above),
            "-" => Some(TextMode::Below),
            _ => None,
        }
    }
}
