//! Document model: circles and the ordered store that owns them.
//!
//! Insertion order is paint order. The renderer walks [`CircleStore::iter`]
//! front to back so later circles land on top, and the hit tester walks it in
//! reverse so the topmost circle wins.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use uuid::Uuid;

use crate::color::Hsl;
use crate::viewport::Point;

/// Unique identifier for a circle.
pub type CircleId = Uuid;

/// A committed circle. Immutable once created; only removal changes the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: CircleId,
    /// Center x in logical pixels.
    pub x: f64,
    /// Center y in logical pixels.
    pub y: f64,
    /// Radius in logical pixels.
    pub r: f64,
    pub fill: Hsl,
}

impl Circle {
    /// Create a circle with a fresh id.
    #[must_use]
    pub fn new(center: Point, r: f64, fill: Hsl) -> Self {
        Self { id: Uuid::new_v4(), x: center.x, y: center.y, r, fill }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether `pt` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.center().dist_sq(pt) <= self.r * self.r
    }
}

/// Ordered collection of circles, bottom first.
#[derive(Debug, Clone, Default)]
pub struct CircleStore {
    circles: Vec<Circle>,
}

impl CircleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a circle on top of everything already stored.
    pub fn push(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    /// Remove a circle by id, returning it if it was present. Relative order
    /// of the remaining circles is preserved.
    pub fn remove(&mut self, id: &CircleId) -> Option<Circle> {
        let idx = self.circles.iter().position(|c| c.id == *id)?;
        Some(self.circles.remove(idx))
    }

    /// Remove every circle.
    pub fn clear(&mut self) {
        self.circles.clear();
    }

    #[must_use]
    pub fn get(&self, id: &CircleId) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id == *id)
    }

    /// Circles in paint order (bottom first).
    pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
        self.circles.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Circle] {
        &self.circles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}
