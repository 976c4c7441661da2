//! Element definitions for the whiteboard.

mod circle;
mod freehand;
mod line;
mod polygon;
mod rectangle;
mod text;

pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use text::{FontSpec, Text};

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Distance threshold for stroke-proximity hit tests, in surface units.
pub const HIT_TOLERANCE: f64 = 5.0;

/// Offset applied on both axes when an element is duplicated, in surface units.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for elements.
///
/// `stroke` and `fill` are both optional; an unset fill leaves the shape
/// hollow and an unset stroke leaves the outline to the painter's default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    /// Outline color (None = painter default).
    pub stroke: Option<Rgba>,
    /// Interior color (None = no fill).
    pub fill: Option<Rgba>,
    /// Outline width.
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Some(Rgba::black()),
            fill: None,
            stroke_width: 2.0,
        }
    }
}

impl Style {
    /// Get the stroke color as a peniko Color.
    pub fn stroke_color(&self) -> Option<Color> {
        self.stroke.map(|c| c.into())
    }

    /// Get the fill color as a peniko Color.
    pub fn fill_color(&self) -> Option<Color> {
        self.fill.map(|c| c.into())
    }
}

/// Inclusive containment test against a normalized rectangle.
///
/// `kurbo::Rect::contains` treats the right/bottom edges as exclusive;
/// hit-testing wants points on any edge to count.
pub fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a polyline (consecutive segments only).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// A drawable element.
///
/// The set is closed on purpose: geometry, painting, and the drag/resize
/// transforms all match exhaustively, so adding a shape kind means adding
/// one variant and one arm in each match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
    Freehand(Freehand),
    Polygon(Polygon),
    Text(Text),
}

impl Element {
    /// Axis-aligned bounding box with `x0 <= x1` and `y0 <= y1`, whatever
    /// the element's internal sign conventions.
    pub fn bounds(&self) -> Rect {
        match self {
            Element::Rectangle(e) => e.bounds(),
            Element::Circle(e) => e.bounds(),
            Element::Line(e) => e.bounds(),
            Element::Freehand(e) => e.bounds(),
            Element::Polygon(e) => e.bounds(),
            Element::Text(e) => e.bounds(),
        }
    }

    /// Check if a surface point hits this element.
    ///
    /// Rectangles, circles, and text use their bounding box (an accepted
    /// approximation); lines and point sequences use stroke proximity
    /// within [`HIT_TOLERANCE`].
    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Element::Rectangle(e) => e.hit_test(point),
            Element::Circle(e) => e.hit_test(point),
            Element::Line(e) => e.hit_test(point),
            Element::Freehand(e) => e.hit_test(point),
            Element::Polygon(e) => e.hit_test(point),
            Element::Text(e) => e.hit_test(point),
        }
    }

    /// Shift every coordinate field by `delta`; magnitudes are untouched.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Element::Rectangle(e) => e.translate(delta),
            Element::Circle(e) => e.translate(delta),
            Element::Line(e) => e.translate(delta),
            Element::Freehand(e) => e.translate(delta),
            Element::Polygon(e) => e.translate(delta),
            Element::Text(e) => e.translate(delta),
        }
    }

    /// Structural copy shifted by `delta`.
    pub fn translated(&self, delta: Vec2) -> Element {
        let mut copy = self.clone();
        copy.translate(delta);
        copy
    }

    /// Copy for the duplicate shortcut, offset by [`DUPLICATE_OFFSET`] on
    /// both axes.
    pub fn duplicated(&self) -> Element {
        self.translated(Vec2::new(DUPLICATE_OFFSET, DUPLICATE_OFFSET))
    }

    pub fn style(&self) -> &Style {
        match self {
            Element::Rectangle(e) => &e.style,
            Element::Circle(e) => &e.style,
            Element::Line(e) => &e.style,
            Element::Freehand(e) => &e.style,
            Element::Polygon(e) => &e.style,
            Element::Text(e) => &e.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut Style {
        match self {
            Element::Rectangle(e) => &mut e.style,
            Element::Circle(e) => &mut e.style,
            Element::Line(e) => &mut e.style,
            Element::Freehand(e) => &mut e.style,
            Element::Polygon(e) => &mut e.style,
            Element::Text(e) => &mut e.style,
        }
    }

    /// Get the text element if this is one.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }
}
