//! Painter capability the engine repaints through.

use crate::shapes::{Circle, FontSpec, Freehand, Line, Polygon, Rectangle, Text};
use kurbo::{Rect, Size};
use peniko::Color;

/// Drawing-surface capabilities consumed by the engine.
///
/// The engine repaints the full scene on every state change that affects
/// visible output; implementations are expected to clear and redraw the
/// whole surface per frame, starting from `fill_background`. Painting is
/// a pure read of engine state and never feeds back into the data model.
pub trait Painter {
    /// Clear the surface and fill it with a background color. Starts a
    /// new frame.
    fn fill_background(&mut self, color: Color);

    fn draw_rectangle(&mut self, rectangle: &Rectangle);

    fn draw_circle(&mut self, circle: &Circle);

    fn draw_line(&mut self, line: &Line);

    fn draw_freehand(&mut self, freehand: &Freehand);

    fn draw_polygon(&mut self, polygon: &Polygon);

    fn draw_text(&mut self, text: &Text);

    /// Highlight the selected element: a dashed bounding box plus a single
    /// square resize handle at the bottom-right corner.
    fn draw_selection(&mut self, bounds: Rect, handle: Rect);

    /// Measure the rendered extent of `content` with the given font.
    ///
    /// Called once when text is committed; the result is stored on the
    /// element rather than recomputed per repaint.
    fn measure_text(&self, content: &str, font: &FontSpec) -> Size;
}
