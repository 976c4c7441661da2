//! Line element.

use super::{point_to_segment_dist, Style, HIT_TOLERANCE};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A straight line segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: Style,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Bounding box over both endpoints.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// Stroke-proximity test against the segment.
    pub fn hit_test(&self, point: Point) -> bool {
        point_to_segment_dist(point, self.start, self.end) < HIT_TOLERANCE
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}
