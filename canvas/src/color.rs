//! Fill colors and the deterministic hue cycle that assigns them.
//!
//! Each committed circle takes the next color from [`HueCycle`]. The cycle
//! starts at hue 0 and advances by a fixed step modulo 360, so the n-th color
//! depends only on how many colors were drawn since the last reset.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

/// An HSL color with integral components, rendered as a CSS `hsl()` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees, always in `[0, 360)`.
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    #[must_use]
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self { hue: hue % 360, saturation, lightness }
    }

    /// CSS color string at full opacity, e.g. `hsl(37, 75%, 55%)`.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// CSS color string at the given opacity, e.g. `hsla(37, 75%, 55%, 0.12)`.
    #[must_use]
    pub fn to_css_alpha(self, alpha: f64) -> String {
        let alpha = alpha.clamp(0.0, 1.0);
        format!("hsla({}, {}%, {}%, {alpha})", self.hue, self.saturation, self.lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// An sRGB color with opacity, rendered as a CSS `rgba()` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) } }
    }

    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Rotating hue generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueCycle {
    hue: u16,
    step: u16,
    saturation: u8,
    lightness: u8,
}

impl HueCycle {
    #[must_use]
    pub fn new(step: u16, saturation: u8, lightness: u8) -> Self {
        Self { hue: 0, step: step % 360, saturation, lightness }
    }

    /// The hue the next call to [`HueCycle::next_color`] will use.
    #[must_use]
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// The next color without advancing the cycle.
    #[must_use]
    pub fn peek(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation, self.lightness)
    }

    /// Return the current color and advance the hue by one step.
    pub fn next_color(&mut self) -> Hsl {
        let color = self.peek();
        self.hue = (self.hue + self.step) % 360;
        color
    }

    /// Restart the cycle at hue 0.
    pub fn reset(&mut self) {
        self.hue = 0;
    }
}
