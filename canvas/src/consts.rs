//! Shared numeric constants for the canvas crate.

// ── Gestures ────────────────────────────────────────────────────

/// Drags shorter than this (CSS pixels) are treated as taps, not circles.
pub const TAP_THRESHOLD_PX: f64 = 3.0;

/// A native click arriving this soon after a tap-via-drag is a duplicate.
pub const TAP_DEDUP_WINDOW_MS: f64 = 250.0;

// ── Feedback ────────────────────────────────────────────────────

/// How long the "Hit" / "Miss" label stays visible before fading.
pub const FEEDBACK_VISIBLE_MS: u32 = 700;

// ── Color cycle ─────────────────────────────────────────────────

/// Degrees added to the hue after every generated color.
pub const HUE_STEP_DEG: u16 = 37;

/// Saturation percentage of generated fills.
pub const FILL_SATURATION_PCT: u8 = 75;

/// Lightness percentage of generated fills.
pub const FILL_LIGHTNESS_PCT: u8 = 55;

// ── Preview ─────────────────────────────────────────────────────

/// Fill opacity of the in-progress drag preview.
pub const PREVIEW_ALPHA: f64 = 0.12;

/// Neutral slate used for the preview disk, as `(hue, saturation %, lightness %)`.
pub const PREVIEW_FILL_HSL: (u16, u8, u8) = (210, 10, 20);

/// Preview outline color, as `(r, g, b, alpha)`.
pub const PREVIEW_OUTLINE_RGBA: (u8, u8, u8, f64) = (55, 65, 81, 0.4);

/// Outline width of the drag preview, in CSS pixels.
pub const PREVIEW_LINE_WIDTH_PX: f64 = 1.0;

// ── Surface ─────────────────────────────────────────────────────

/// Device pixel ratios below this are rounded up to it.
pub const MIN_DPR: f64 = 1.0;
