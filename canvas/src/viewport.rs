#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::MIN_DPR;

/// A point in logical (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn dist_sq(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn dist(self, other: Point) -> f64 {
        self.dist_sq(other).sqrt()
    }
}

/// Logical size and device pixel ratio of the drawing surface.
///
/// `width` / `height` are in CSS pixels. The backing store holds
/// `width * dpr` by `height * dpr` physical pixels, rounded and never
/// smaller than 1x1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Build a viewport. The ratio is floored at 1; a non-finite ratio becomes 1.
    #[must_use]
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() { dpr.max(MIN_DPR) } else { MIN_DPR };
        Self { width: clamp_logical(width), height: clamp_logical(height), dpr }
    }

    /// Physical backing resolution as `(width, height)`.
    #[must_use]
    pub fn backing_size(&self) -> (u32, u32) {
        (backing_dimension(self.width, self.dpr), backing_dimension(self.height, self.dpr))
    }
}

fn clamp_logical(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// `max(1, round(logical * dpr))`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn backing_dimension(logical: f64, dpr: f64) -> u32 {
    let physical = (logical * dpr).round();
    if physical.is_finite() && physical >= 1.0 {
        physical.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}
