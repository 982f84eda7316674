#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{CircleId, CircleStore};
use crate::viewport::Point;

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub circle_id: CircleId,
    /// Position of the hit circle in paint order.
    pub index: usize,
}

/// Find the topmost circle containing `pt`.
///
/// Walks the store from the most recently added circle down, so a later
/// circle occludes earlier ones for hit purposes just as it does on screen.
#[must_use]
pub fn hit_test(pt: Point, doc: &CircleStore) -> Option<Hit> {
    doc.iter()
        .enumerate()
        .rev()
        .find(|(_, circle)| circle.contains(pt))
        .map(|(index, circle)| Hit { circle_id: circle.id, index })
}
