//! Rendering: repaints the full scene onto a [`Surface`].
//!
//! Drawing is expressed against the [`Surface`] capability rather than a
//! concrete canvas so the scene logic can be exercised without a browser.
//! [`CanvasSurface`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. All coordinates passed to a surface
//! are logical (CSS) pixels; the device pixel ratio is applied once through
//! [`Surface::set_scale`].
//!
//! Every call repaints from scratch: clear, circles bottom first, then the drag
//! preview. Painting the same state twice yields the same image.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::CanvasConfig;
use crate::doc::CircleStore;
use crate::viewport::{Point, Viewport};

/// Something that can clear itself and draw filled or stroked disks.
pub trait Surface {
    type Error;

    /// Map logical pixels to backing pixels with a uniform `scale`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the transform cannot be applied.
    fn set_scale(&mut self, scale: f64) -> Result<(), Self::Error>;

    /// Clear the logical rectangle `(0, 0, width, height)`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if clearing fails.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Fill a disk with a CSS color.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the path cannot be built or filled.
    fn fill_disk(&mut self, center: Point, radius: f64, fill: &str) -> Result<(), Self::Error>;

    /// Stroke a circle outline with a CSS color.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the path cannot be built or stroked.
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &str, line_width: f64)
    -> Result<(), Self::Error>;
}

/// The in-progress drag, drawn translucent over the committed circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    pub center: Point,
    pub radius: f64,
}

/// Draw the full scene.
///
/// # Errors
///
/// Propagates the first error reported by `surface`.
pub fn draw<S: Surface>(
    surface: &mut S,
    doc: &CircleStore,
    preview: Option<Preview>,
    viewport: &Viewport,
    config: &CanvasConfig,
) -> Result<(), S::Error> {
    // Layer 1: transform and clear.
    surface.set_scale(viewport.dpr)?;
    surface.clear(viewport.width, viewport.height)?;

    // Layer 2: circles in paint order (bottom first).
    for circle in doc.iter() {
        surface.fill_disk(circle.center(), clamp_radius(circle.r), &circle.fill.to_css())?;
    }

    // Layer 3: drag preview.
    if let Some(p) = preview.filter(|p| p.radius > 0.0) {
        let radius = clamp_radius(p.radius);
        surface.fill_disk(p.center, radius, &config.preview_fill.to_css_alpha(config.preview_alpha))?;
        surface.stroke_circle(p.center, radius, &config.preview_outline.to_css(), config.preview_line_width_px)?;
    }

    Ok(())
}

/// Degenerate radii paint as zero rather than failing.
fn clamp_radius(r: f64) -> f64 {
    if r.is_finite() { r.max(0.0) } else { 0.0 }
}

/// [`Surface`] backed by a browser 2D context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle_path(&self, center: Point, radius: f64) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn set_scale(&mut self, scale: f64) -> Result<(), JsValue> {
        self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_disk(&mut self, center: Point, radius: f64, fill: &str) -> Result<(), JsValue> {
        self.circle_path(center, radius)?;
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        Ok(())
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &str, line_width: f64) -> Result<(), JsValue> {
        self.circle_path(center, radius)?;
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
        Ok(())
    }
}
