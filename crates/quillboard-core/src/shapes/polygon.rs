//! Polygon element.

use super::{point_to_polyline_dist, Style, HIT_TOLERANCE};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A polygon built from accumulated click vertices.
///
/// Painters close the outline between the last and first vertex; hit
/// testing deliberately checks only the explicit consecutive segments,
/// not the closing edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    /// Vertices in click order.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: Style,
}

impl Polygon {
    /// Minimum number of vertices for a polygon to be committed.
    pub const MIN_VERTICES: usize = 3;

    /// Create from existing vertices.
    pub fn from_points(points: Vec<Point>, style: Style) -> Self {
        Self { points, style }
    }

    /// Bounding box over all vertices.
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Stroke-proximity test against consecutive vertex pairs.
    pub fn hit_test(&self, point: Point) -> bool {
        point_to_polyline_dist(point, &self.points) < HIT_TOLERANCE
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}
