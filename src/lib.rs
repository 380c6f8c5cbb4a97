//! barlib — barcode geometry library.
//!
//! Converts an encoded barcode symbol (the run-length and
//! text-placement strings produced by an external encoding library)
//! into a device-independent drawing plan: bar rectangles plus
//! positioned human-readable characters. Painting the plan is the
//! caller's side of the contract (screen widget, print surface, or the
//! bundled SVG preview); encoding data into bars is the encoder's.
//!
//! # Example
//! ```
//! use barlib::{generate, BarcodeError, EncodedSymbol, Encoder, Symbology};
//!
//! /// Canned encoder standing in for the host's encoding library.
//! struct CannedEncoder;
//!
//! impl Encoder for CannedEncoder {
//!     fn encode(&self, _: Symbology, _: &str) -> Result<EncodedSymbol, BarcodeError> {
//!         Ok(EncodedSymbol {
//!             runs: "113131".to_string(),
//!             textinfo: "2:9:7".to_string(),
//!             margin: 10.0,
//!             width: None,
//!             height: None,
//!         })
//!     }
//! }
//!
//! let plan = generate(&CannedEncoder, Symbology::Code39, true, 1.0, "7")?;
//! assert_eq!(plan.bars.len(), 3);
//! assert_eq!(plan.chars.len(), 1);
//! # Ok::<(), BarcodeError>(())
//! ```

pub mod encoder;
pub mod error;
pub mod model;
pub mod planner;
pub mod svg;

mod runs;
mod textinfo;

pub use encoder::{encoder_flag, Encoder};
pub use error::BarcodeError;
pub use model::{Bar, BarcodePlan, EncodedSymbol, Symbology, TextChar, TextMode};
pub use planner::{generate, plan_encoded, plan_encoded_with, PlanConfig};
pub use svg::plan_to_svg;

/// Convert a drawing plan to a JSON string.
/// Useful for passing plans across FFI boundaries.
pub fn plan_to_json(plan: &BarcodePlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for host applications linking the static or shared library
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};

/// Rebuild an [`EncodedSymbol`] from raw C arguments. Size hints use
/// 0.0 for "unset".
///
/// # Safety
/// Non-null pointers must be valid null-terminated C strings.
unsafe fn symbol_from_c(
    runs: *const c_char,
    textinfo: *const c_char,
    margin: f64,
    width: f64,
    height: f64,
) -> Option<EncodedSymbol> {
    if runs.is_null() || textinfo.is_null() {
        return None;
    }
    let runs = unsafe { CStr::from_ptr(runs) }.to_str().ok()?;
    let textinfo = unsafe { CStr::from_ptr(textinfo) }.to_str().ok()?;
    Some(EncodedSymbol {
        runs: runs.to_string(),
        textinfo: textinfo.to_string(),
        margin,
        width: if width > 0.0 { Some(width) } else { None },
        height: if height > 0.0 { Some(height) } else { None },
    })
}

/// Plan a symbol's geometry and return the plan as a JSON C string.
/// The caller must free the returned string with `barlib_free_string`.
///
/// `show_text` is nonzero to draw the human-readable line. Pass 0.0 for
/// `width`/`height` to use the defaults; a non-positive `scale` falls
/// back to 1.0.
///
/// # Safety
/// `runs` and `textinfo` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn barlib_plan_json(
    runs: *const c_char,
    textinfo: *const c_char,
    show_text: c_int,
    scale: f64,
    margin: f64,
    width: f64,
    height: f64,
) -> *mut c_char {
    let symbol = match unsafe { symbol_from_c(runs, textinfo, margin, width, height) } {
        Some(s) => s,
        None => return std::ptr::null_mut(),
    };
    let scale = if scale > 0.0 { scale } else { 1.0 };

    let plan = match plan_encoded(&symbol, show_text != 0, scale) {
        Ok(p) => p,
        Err(_) => return std::ptr::null_mut(),
    };
    match plan_to_json(&plan) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Plan a symbol's geometry and return the SVG preview as a C string.
/// The caller must free the returned string with `barlib_free_string`.
///
/// Arguments as for `barlib_plan_json`.
///
/// # Safety
/// `runs` and `textinfo` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn barlib_plan_svg(
    runs: *const c_char,
    textinfo: *const c_char,
    show_text: c_int,
    scale: f64,
    margin: f64,
    width: f64,
    height: f64,
) -> *mut c_char {
    let symbol = match unsafe { symbol_from_c(runs, textinfo, margin, width, height) } {
        Some(s) => s,
        None => return std::ptr::null_mut(),
    };
    let scale = if scale > 0.0 { scale } else { 1.0 };

    match plan_encoded(&symbol, show_text != 0, scale) {
        Ok(plan) => CString::new(plan_to_svg(&plan))
            .unwrap_or_default()
            .into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by barlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a barlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn barlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
