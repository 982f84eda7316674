use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::HueCycle;
use crate::config::CanvasConfig;
use crate::doc::{Circle, CircleStore};
use crate::feedback::Feedback;
use crate::hit::{self, Hit};
use crate::input::{Button, InputState};
use crate::render::{self, CanvasSurface, Preview, Surface};
use crate::schedule::{Deferred, Ticket};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CircleCreated(Circle),
    CircleDeleted(Circle),
    /// Show the overlay and arm a timer that redeems `ticket` after `visible_ms`.
    ShowFeedback { feedback: Feedback, ticket: Ticket, visible_ms: u32 },
    HideFeedback,
    /// Resize the backing store to this many physical pixels.
    ResizeBacking { width: u32, height: u32 },
    SceneCleared,
    RenderNeeded,
}

/// Errors raised while binding to or painting the browser canvas.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The element refused to hand out a 2D context.
    #[error("canvas has no 2d rendering context")]
    NoContext,
    /// A Canvas2D call threw.
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Core engine state: everything that does not touch the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: CanvasConfig,
    pub doc: CircleStore,
    pub colors: HueCycle,
    pub input: InputState,
    pub viewport: Viewport,
    /// Timestamp of the last tap-via-drag, for swallowing the native click.
    last_tap_ms: Option<f64>,
    resize: Deferred<Viewport>,
    feedback: Deferred<Feedback>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            colors: HueCycle::new(config.hue_step_deg, config.saturation_pct, config.lightness_pct),
            config,
            doc: CircleStore::new(),
            input: InputState::default(),
            viewport: Viewport::default(),
            last_tap_ms: None,
            resize: Deferred::new(),
            feedback: Deferred::new(),
        }
    }

    // --- Gestures ---

    /// Press: start dragging out a circle. Only the primary button draws.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = InputState::begin(screen_pt);
        vec![Action::RenderNeeded]
    }

    /// Move: stretch the preview. No-op unless a gesture is active.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.input.stretch_to(screen_pt) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Release: commit a circle, or treat a short drag as a tap.
    pub fn on_pointer_up(&mut self, screen_pt: Point, timestamp_ms: f64) -> Vec<Action> {
        let Some(start) = self.input.finish() else {
            return Vec::new();
        };
        let radius = start.dist(screen_pt);

        let mut actions = Vec::with_capacity(2);
        if self.config.is_tap(radius) {
            self.last_tap_ms = Some(timestamp_ms);
            actions.push(self.show_feedback(screen_pt));
        } else {
            let circle = Circle::new(start, radius, self.colors.next_color());
            log::debug!("circle {} at ({}, {}) r={radius:.1}", circle.id, circle.x, circle.y);
            self.doc.push(circle.clone());
            actions.push(Action::CircleCreated(circle));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// The host aborted the pointer sequence; drop the gesture without committing.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        match self.input.finish() {
            Some(_) => vec![Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    /// Native click. Swallowed when it trails a tap-via-drag too closely.
    pub fn on_click(&mut self, screen_pt: Point, timestamp_ms: f64) -> Vec<Action> {
        if let Some(tap_ms) = self.last_tap_ms
            && self.config.is_duplicate_click(tap_ms, timestamp_ms)
        {
            return Vec::new();
        }
        vec![self.show_feedback(screen_pt)]
    }

    /// Double click: delete the topmost circle under the pointer, if any.
    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        let Some(hit) = self.hit_test(screen_pt) else {
            return Vec::new();
        };
        let Some(removed) = self.doc.remove(&hit.circle_id) else {
            return Vec::new();
        };
        log::debug!("circle {} deleted", removed.id);
        vec![Action::CircleDeleted(removed), Action::RenderNeeded]
    }

    /// Drop every circle and restart the color cycle.
    pub fn reset(&mut self) -> Vec<Action> {
        self.doc.clear();
        self.colors.reset();
        self.input = InputState::Idle;
        log::debug!("scene cleared");
        vec![Action::SceneCleared, Action::RenderNeeded]
    }

    // --- Viewport ---

    /// Queue a geometry change. Supersedes any resize still waiting for a frame.
    pub fn request_resize(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Ticket {
        self.resize.schedule(Viewport::new(width_css, height_css, dpr))
    }

    /// Apply the queued geometry change if `ticket` is still the latest one.
    pub fn apply_resize(&mut self, ticket: Ticket) -> Vec<Action> {
        let Some(viewport) = self.resize.take(ticket) else {
            return Vec::new();
        };
        self.viewport = viewport;
        let (width, height) = viewport.backing_size();
        log::debug!(
            "viewport {}x{} @{} -> backing {width}x{height}",
            viewport.width,
            viewport.height,
            viewport.dpr
        );
        vec![Action::ResizeBacking { width, height }, Action::RenderNeeded]
    }

    /// Resize immediately, bypassing coalescing.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let ticket = self.request_resize(width_css, height_css, dpr);
        self.apply_resize(ticket)
    }

    // --- Feedback ---

    fn show_feedback(&mut self, screen_pt: Point) -> Action {
        let feedback = Feedback::from_hit(self.hit_test(screen_pt), screen_pt);
        let ticket = self.feedback.schedule(feedback);
        Action::ShowFeedback { feedback, ticket, visible_ms: self.config.feedback_visible_ms }
    }

    /// Fade-out timer fired. Hides the overlay unless newer feedback replaced it.
    pub fn expire_feedback(&mut self, ticket: Ticket) -> Vec<Action> {
        match self.feedback.take(ticket) {
            Some(_) => vec![Action::HideFeedback],
            None => Vec::new(),
        }
    }

    // --- Render ---

    /// Repaint the scene onto `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `surface`.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, &self.doc, self.preview(), &self.viewport, &self.config)
    }

    // --- Queries ---

    /// Topmost circle under `pt`.
    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<Hit> {
        hit::hit_test(pt, &self.doc)
    }

    /// Circles in paint order.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        self.doc.as_slice()
    }

    /// The drag preview, present only while drawing with a non-zero radius.
    #[must_use]
    pub fn preview(&self) -> Option<Preview> {
        match self.input {
            InputState::Drawing { start, preview_radius } if preview_radius > 0.0 => {
                Some(Preview { center: start, radius: preview_radius })
            }
            _ => None,
        }
    }

    /// Feedback currently on screen, if its fade has not fired yet.
    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.pending()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoContext`] when the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        Self::with_config(canvas, CanvasConfig::default())
    }

    /// Bind to `canvas` with custom tunables.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoContext`] when the element has no 2D context.
    pub fn with_config(canvas: HtmlCanvasElement, config: CanvasConfig) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::NoContext)?;
        Ok(Self { canvas, ctx, core: EngineCore::with_config(config) })
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, timestamp_ms: f64) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, timestamp_ms)
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    pub fn on_click(&mut self, screen_pt: Point, timestamp_ms: f64) -> Vec<Action> {
        self.core.on_click(screen_pt, timestamp_ms)
    }

    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_double_click(screen_pt)
    }

    pub fn reset(&mut self) -> Vec<Action> {
        self.core.reset()
    }

    pub fn expire_feedback(&mut self, ticket: Ticket) -> Vec<Action> {
        self.core.expire_feedback(ticket)
    }

    // --- Viewport ---

    pub fn request_resize(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Ticket {
        self.core.request_resize(width_css, height_css, dpr)
    }

    /// Apply a queued resize and size the backing store to match.
    pub fn apply_resize(&mut self, ticket: Ticket) -> Vec<Action> {
        let actions = self.core.apply_resize(ticket);
        self.resize_backing(&actions);
        actions
    }

    /// Resize immediately and size the backing store to match.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let actions = self.core.set_viewport(width_css, height_css, dpr);
        self.resize_backing(&actions);
        actions
    }

    fn resize_backing(&self, actions: &[Action]) {
        for action in actions {
            if let Action::ResizeBacking { width, height } = action {
                self.canvas.set_width(*width);
                self.canvas.set_height(*height);
            }
        }
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Js`] if a Canvas2D call throws.
    pub fn render(&self) -> Result<(), EngineError> {
        let mut surface = CanvasSurface::new(&self.ctx);
        self.core.draw(&mut surface)?;
        Ok(())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<Hit> {
        self.core.hit_test(pt)
    }

    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        self.core.circles()
    }
}
