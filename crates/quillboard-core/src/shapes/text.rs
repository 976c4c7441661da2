//! Text element.

use super::{contains_inclusive, Style};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Font settings applied to a text element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font size in surface units.
    pub size: f64,
    /// Font family name as understood by the painter.
    pub family: String,
}

impl FontSpec {
    /// Default font size.
    pub const DEFAULT_SIZE: f64 = 16.0;

    /// Create a new font configuration.
    pub fn new(size: f64, family: impl Into<String>) -> Self {
        Self {
            size,
            family: family.into(),
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, "sans-serif")
    }
}

/// A text element.
///
/// `origin` is the baseline origin. `width` and `height` are measured from
/// the painter's font metrics when the text is committed, not recomputed
/// on every repaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    /// Baseline origin.
    pub origin: Point,
    /// The text content.
    pub content: String,
    /// Font used at commit time.
    pub font: FontSpec,
    /// Measured width.
    pub width: f64,
    /// Measured height.
    pub height: f64,
    /// Style properties; `fill` keys the glyph color.
    pub style: Style,
}

impl Text {
    /// Create a new text element with measured extents.
    pub fn new(
        origin: Point,
        content: impl Into<String>,
        font: FontSpec,
        width: f64,
        height: f64,
        style: Style,
    ) -> Self {
        Self {
            origin,
            content: content.into(),
            font,
            width,
            height,
            style,
        }
    }

    /// Bounding box: the measured extent above the baseline.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y - self.height,
            self.origin.x + self.width,
            self.origin.y,
        )
    }

    /// Bounding-box containment over the measured extent.
    pub fn hit_test(&self, point: Point) -> bool {
        contains_inclusive(self.bounds(), point)
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.origin += delta;
    }
}
