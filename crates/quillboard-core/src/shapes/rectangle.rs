//! Rectangle element.

use super::{contains_inclusive, Style};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at one corner.
///
/// `origin` is the corner where the drag started, not necessarily the
/// top-left: `width` and `height` may be negative when the shape extends
/// in the negative direction. Corner ordering is normalized only when the
/// bounding box is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    /// Anchor corner.
    pub origin: Point,
    /// Signed horizontal extent.
    pub width: f64,
    /// Signed vertical extent.
    pub height: f64,
    /// Style properties.
    pub style: Style,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(origin: Point, width: f64, height: f64, style: Style) -> Self {
        Self {
            origin,
            width,
            height,
            style,
        }
    }

    /// Build a rectangle spanning from a drag anchor to the current pointer.
    pub fn from_anchor(anchor: Point, to: Point, style: Style) -> Self {
        Self::new(anchor, to.x - anchor.x, to.y - anchor.y, style)
    }

    /// Bounding box with normalized corner ordering.
    pub fn bounds(&self) -> Rect {
        let far_x = self.origin.x + self.width;
        let far_y = self.origin.y + self.height;
        Rect::new(
            self.origin.x.min(far_x),
            self.origin.y.min(far_y),
            self.origin.x.max(far_x),
            self.origin.y.max(far_y),
        )
    }

    pub fn hit_test(&self, point: Point) -> bool {
        contains_inclusive(self.bounds(), point)
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.origin += delta;
    }
}
