//! Tunables for the scene controller.
//!
//! Every field defaults to the matching value in [`crate::consts`]. Hosts use
//! [`CanvasConfig::default`]; tests override individual fields to exercise
//! edge cases without touching the constants.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::color::{Hsl, Rgba};
use crate::consts::{
    FEEDBACK_VISIBLE_MS, FILL_LIGHTNESS_PCT, FILL_SATURATION_PCT, HUE_STEP_DEG, PREVIEW_ALPHA, PREVIEW_FILL_HSL,
    PREVIEW_LINE_WIDTH_PX, PREVIEW_OUTLINE_RGBA, TAP_DEDUP_WINDOW_MS, TAP_THRESHOLD_PX,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Release distance below which a gesture counts as a tap.
    pub tap_threshold_px: f64,
    /// Window after a tap during which a native click is swallowed.
    pub tap_dedup_window_ms: f64,
    /// Visibility of the feedback label before its fade starts.
    pub feedback_visible_ms: u32,
    /// Hue increment between consecutive fills, in degrees.
    pub hue_step_deg: u16,
    pub saturation_pct: u8,
    pub lightness_pct: u8,
    /// Drag preview disk color, drawn at `preview_alpha`.
    pub preview_fill: Hsl,
    /// Fill opacity of the drag preview.
    pub preview_alpha: f64,
    pub preview_outline: Rgba,
    pub preview_line_width_px: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            tap_threshold_px: TAP_THRESHOLD_PX,
            tap_dedup_window_ms: TAP_DEDUP_WINDOW_MS,
            feedback_visible_ms: FEEDBACK_VISIBLE_MS,
            hue_step_deg: HUE_STEP_DEG,
            saturation_pct: FILL_SATURATION_PCT,
            lightness_pct: FILL_LIGHTNESS_PCT,
            preview_fill: Hsl::new(PREVIEW_FILL_HSL.0, PREVIEW_FILL_HSL.1, PREVIEW_FILL_HSL.2),
            preview_alpha: PREVIEW_ALPHA,
            preview_outline: Rgba::new(
                PREVIEW_OUTLINE_RGBA.0,
                PREVIEW_OUTLINE_RGBA.1,
                PREVIEW_OUTLINE_RGBA.2,
                PREVIEW_OUTLINE_RGBA.3,
            ),
            preview_line_width_px: PREVIEW_LINE_WIDTH_PX,
        }
    }
}

impl CanvasConfig {
    /// Whether a release at `distance` from the press point is a tap.
    #[must_use]
    pub fn is_tap(&self, distance: f64) -> bool {
        distance < self.tap_threshold_px
    }

    /// Whether a click at `click_ms` duplicates a tap recorded at `tap_ms`.
    #[must_use]
    pub fn is_duplicate_click(&self, tap_ms: f64, click_ms: f64) -> bool {
        let elapsed = click_ms - tap_ms;
        (0.0..self.tap_dedup_window_ms).contains(&elapsed)
    }
}
