//! Input model: mouse buttons and the gesture state machine.
//!
//! A gesture is press, any number of moves, then release. While a gesture is
//! active the engine tracks where it started and how far the pointer has
//! travelled, which doubles as the radius of the preview circle. On release
//! the gesture either commits a circle or collapses into a tap.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::viewport::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Gesture state. Two states only: idle or drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next press.
    #[default]
    Idle,
    /// The user is dragging out a new circle.
    Drawing {
        /// Where the press landed; becomes the circle's center.
        start: Point,
        /// Distance from `start` to the latest pointer position.
        preview_radius: f64,
    },
}

impl InputState {
    /// Enter the drawing state at `start` with a zero radius.
    #[must_use]
    pub fn begin(start: Point) -> Self {
        Self::Drawing { start, preview_radius: 0.0 }
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// Press point of the active gesture.
    #[must_use]
    pub fn start(&self) -> Option<Point> {
        match self {
            Self::Drawing { start, .. } => Some(*start),
            Self::Idle => None,
        }
    }

    /// Preview radius; zero whenever no gesture is active.
    #[must_use]
    pub fn preview_radius(&self) -> f64 {
        match self {
            Self::Drawing { preview_radius, .. } => *preview_radius,
            Self::Idle => 0.0,
        }
    }

    /// Stretch the preview to reach `pt`. Returns false when idle.
    pub fn stretch_to(&mut self, pt: Point) -> bool {
        match self {
            Self::Drawing { start, preview_radius } => {
                *preview_radius = start.dist(pt);
                true
            }
            Self::Idle => false,
        }
    }

    /// End the gesture, returning its start point if one was active.
    pub fn finish(&mut self) -> Option<Point> {
        let start = self.start();
        *self = Self::Idle;
        start
    }
}
