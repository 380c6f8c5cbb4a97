//! Default tunables for the geometry planner (all in drawing units;
//! "scaled" values are multiplied by the caller's scale before use).

// ── Bar geometry ────────────────────────────────────────────────────
pub(super) const SHRINK_AMOUNT: f64 = 0.15; // shrink bars to account for ink spreading
pub(super) const DEFAULT_HEIGHT: f64 = 80.0; // symbol height when the encoder gives none, scaled

// ── Human-readable text ─────────────────────────────────────────────
pub(super) const FONT_SCALE: f64 = 0.95; // shrink fonts just a hair
pub(super) const CLEARANCE_DIGIT: f64 = 10.0; // data-bar clearance from the text band, scaled
pub(super) const CLEARANCE_GUARD: f64 = 5.0; // guard-bar clearance; half, so guards reach past the text
pub(super) const BASELINE_INSET: f64 = 8.0; // text baseline above the bottom edge, scaled
