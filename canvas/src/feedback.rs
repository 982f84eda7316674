#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::doc::CircleId;
use crate::hit::Hit;
use crate::viewport::Point;

/// Transient "Hit" / "Miss" indicator shown where a tap or click landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feedback {
    /// Circle under the pointer, if any.
    pub hit: Option<CircleId>,
    /// Event position in logical pixels.
    pub at: Point,
}

impl Feedback {
    #[must_use]
    pub fn from_hit(hit: Option<Hit>, at: Point) -> Self {
        Self { hit: hit.map(|h| h.circle_id), at }
    }

    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }

    /// Text shown in the overlay.
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.is_hit() { "Hit" } else { "Miss" }
    }
}
