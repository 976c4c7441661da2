//! Freehand path element.

use super::{point_to_polyline_dist, Style, HIT_TOLERANCE};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A freehand drawing (ordered series of points).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Freehand {
    /// Points in the freehand path.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: Style,
}

impl Freehand {
    /// Minimum number of points for a freehand path to be committed.
    pub const MIN_POINTS: usize = 2;

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>, style: Style) -> Self {
        Self { points, style }
    }

    /// Bounding box over all points.
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

    /// Stroke-proximity test against each consecutive segment.
    pub fn hit_test(&self, point: Point) -> bool {
        point_to_polyline_dist(point, &self.points) < HIT_TOLERANCE
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let freehand = Freehand::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(50.0, 100.0),
            ],
            Style::default(),
        );
        let bounds = freehand.bounds();
        assert!(bounds.x0.abs() < f64::EPSILON);
        assert!(bounds.y0.abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_near_segment() {
        let freehand = Freehand::from_points(
            vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            Style::default(),
        );
        assert!(freehand.hit_test(Point::new(50.0, 3.0)));
        assert!(!freehand.hit_test(Point::new(50.0, 20.0)));
    }

    #[test]
    fn test_single_point_never_hits() {
        let freehand = Freehand::from_points(vec![Point::new(10.0, 10.0)], Style::default());
        assert!(!freehand.hit_test(Point::new(10.0, 10.0)));
    }
}
