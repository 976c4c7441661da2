//! Circle element.

use super::{contains_inclusive, Style};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A circle defined by center and radius.
///
/// The radius is always derived as a Euclidean distance, so it never goes
/// negative, even mid-resize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    /// Center position.
    pub center: Point,
    /// Radius in surface units.
    pub radius: f64,
    /// Style properties.
    pub style: Style,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64, style: Style) -> Self {
        Self {
            center,
            radius,
            style,
        }
    }

    /// Build a circle whose radius is the distance from the drag anchor to
    /// the current pointer.
    pub fn from_anchor(center: Point, to: Point, style: Style) -> Self {
        Self::new(center, center.distance(to), style)
    }

    /// Bounding box: center plus/minus radius on both axes.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Bounding-box containment; the enclosing square stands in for the
    /// true outline.
    pub fn hit_test(&self, point: Point) -> bool {
        contains_inclusive(self.bounds(), point)
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
