//! Geometry planner.
//!
//! Turns an [`EncodedSymbol`] into a [`BarcodePlan`]: bar rectangles
//! plus positioned human-readable characters, all in device-independent
//! drawing units. Check digits, guard patterns and start/stop codes are
//! the encoder's business, and painting is the renderer's; the planner
//! only lays out geometry.
//!
//! Planning is two passes over the encoder's strings. The run-length
//! string is first scanned into width tokens, then walked with an
//! alternating bar/space counter; the text-placement string is split
//! into entries and positioned per the mode in force.

mod constants;

use serde::{Deserialize, Serialize};

use crate::encoder::Encoder;
use crate::error::BarcodeError;
use crate::model::*;
use crate::runs::{scan_runs, total_units};
use crate::textinfo::parse_entry;
use constants::*;

// ═══════════════════════════════════════════════════════════════════════
// Tunables
// ═══════════════════════════════════════════════════════════════════════

/// Tunable constants of the geometry pass.
///
/// Clearances, the default height and the baseline inset are multiples
/// of the caller's scale; `shrink_amount` is subtracted from bar widths
/// after scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Subtracted from every bar's ink width to compensate for ink
    /// spread when printed.
    pub shrink_amount: f64,
    /// Multiplier applied to every glyph's declared font size.
    pub font_scale: f64,
    /// Symbol height used when the encoder supplies no height hint.
    pub default_height: f64,
    /// Clearance data bars keep from the text band.
    pub clearance_digit: f64,
    /// Clearance guard bars keep from the text band.
    pub clearance_guard: f64,
    /// Text baseline distance from the symbol's bottom edge, for text
    /// below the bars.
    pub baseline_inset: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            shrink_amount: SHRINK_AMOUNT,
            font_scale: FONT_SCALE,
            default_height: DEFAULT_HEIGHT,
            clearance_digit: CLEARANCE_DIGIT,
            clearance_guard: CLEARANCE_GUARD,
            baseline_inset: BASELINE_INSET,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Entry points
// ═══════════════════════════════════════════════════════════════════════

/// Encode `data` with the given encoder and lay out its geometry,
/// in one call.
///
/// `show_text` turns the human-readable line on or off; turning it off
/// also gives the bars the full symbol height. `scale` multiplies all
/// intrinsic dimensions (but never the margin).
pub fn generate(
    encoder: &dyn Encoder,
    symbology: Symbology,
    show_text: bool,
    scale: f64,
    data: &str,
) -> Result<BarcodePlan, BarcodeError> {
    let symbol = encoder.encode(symbology, data)?;
    plan_encoded(&symbol, show_text, scale)
}

/// Lay out the geometry of an already-encoded symbol with the default
/// tunables.
pub fn plan_encoded(
    symbol: &EncodedSymbol,
    show_text: bool,
    scale: f64,
) -> Result<BarcodePlan, BarcodeError> {
    plan_encoded_with(symbol, show_text, scale, &PlanConfig::default())
}

/// Lay out the geometry of an already-encoded symbol.
pub fn plan_encoded_with(
    symbol: &EncodedSymbol,
    show_text: bool,
    scale: f64,
    config: &PlanConfig,
) -> Result<BarcodePlan, BarcodeError> {
    if symbol.runs.is_empty() || symbol.textinfo.is_empty() {
        return Err(BarcodeError::BadSymbol(
            "encoder produced an empty symbol".into(),
        ));
    }
    let tokens = scan_runs(&symbol.runs)?;

    // Width defaults to "just wide enough" plus one unit of slack;
    // height to the standard symbol height, rescaled.
    let barlen = total_units(&tokens);
    let width = symbol
        .width
        .unwrap_or_else(|| f64::from(barlen) * scale + 1.0);
    let height = symbol
        .height
        .unwrap_or_else(|| config.default_height * scale);
    let margin = symbol.margin;

    // The first token is the leading gap: it seeds the cursor and puts
    // no ink down. After it, content tokens alternate bar/space
    // starting with a bar; the scanner already folded the mode markers
    // out, so this parity is clean.
    let mut bars = Vec::new();
    let mut x = margin + f64::from(tokens[0].width) * scale;
    for (i, token) in tokens.iter().enumerate().skip(1) {
        let w = f64::from(token.width) * scale;
        if i % 2 == 1 {
            let mut y = margin;
            let mut bar_height = height;
            if show_text {
                let clearance = if token.guard {
                    config.clearance_guard
                } else {
                    config.clearance_digit
                };
                match token.mode {
                    TextMode::Below => bar_height -= clearance * scale,
                    TextMode::Above => {
                        // Lift the bar by a full data-bar clearance and
                        // keep this token's clearance at both ends.
                        y += config.clearance_digit * scale;
                        bar_height -= 2.0 * clearance * scale;
                    }
                }
            }
            bars.push(Bar {
                x: x + w / 2.0,
                y,
                width: w - config.shrink_amount,
                height: bar_height,
            });
        }
        x += w;
    }

    let mut chars = Vec::new();
    if show_text {
        let mut mode = TextMode::default();
        for entry in symbol.textinfo.split_whitespace() {
            if let Some(m) = TextMode::from_marker(entry) {
                mode = m;
                continue;
            }
            match parse_entry(entry) {
                Some((offset, size, ch)) => chars.push(TextChar {
                    x: offset * scale + margin,
                    y: match mode {
                        TextMode::Below => margin + height - config.baseline_inset * scale,
                        TextMode::Above => margin,
                    },
                    font_size: size * config.font_scale * scale,
                    ch,
                }),
                None => log::warn!("impossible text entry {entry:?}, skipping"),
            }
        }
    }

    Ok(BarcodePlan {
        bars,
        chars,
        width: width + 2.0 * margin,
        height: height + 2.0 * margin,
    })
}
