//! SVG painter backend.

use crate::RenderResult;
use kurbo::{Rect, Size};
use peniko::Color;
use quillboard_core::shapes::{
    Circle, FontSpec, Freehand, Line, Polygon, Rectangle, Rgba, Style, Text,
};
use quillboard_core::Painter;
use std::path::Path;

/// Approximate advance width per character, as a fraction of font size.
const CHAR_WIDTH_FACTOR: f64 = 0.55;

/// Selection highlight color.
const SELECTION_COLOR: &str = "#3b82f6";

/// A painter that records each frame as an SVG document.
///
/// `fill_background` starts a new frame, so the document always reflects
/// the latest full repaint. Text metrics are approximated from character
/// counts; exact glyph metrics belong to a host with a font stack.
pub struct SvgPainter {
    width: f64,
    height: f64,
    background: Color,
    body: Vec<String>,
}

impl SvgPainter {
    /// Create a painter for a surface of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: Color::from_rgba8(255, 255, 255, 255),
            body: Vec::new(),
        }
    }

    /// Assemble the current frame as an SVG document.
    pub fn document(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.width, self.height
        );
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width,
            self.height,
            css_color(self.background.into())
        ));
        svg.push('\n');
        for item in &self.body {
            svg.push_str("  ");
            svg.push_str(item);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the current frame to a file.
    pub fn save(&self, path: &Path) -> RenderResult<()> {
        std::fs::write(path, self.document())?;
        Ok(())
    }
}

impl Painter for SvgPainter {
    fn fill_background(&mut self, color: Color) {
        self.body.clear();
        self.background = color;
    }

    fn draw_rectangle(&mut self, rectangle: &Rectangle) {
        // SVG rejects negative extents; the bounding box carries the
        // normalized corner ordering.
        let bounds = rectangle.bounds();
        self.body.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height(),
            style_attrs(&rectangle.style, true)
        ));
    }

    fn draw_circle(&mut self, circle: &Circle) {
        self.body.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            circle.center.x,
            circle.center.y,
            circle.radius,
            style_attrs(&circle.style, true)
        ));
    }

    fn draw_line(&mut self, line: &Line) {
        self.body.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            line.start.x,
            line.start.y,
            line.end.x,
            line.end.y,
            style_attrs(&line.style, false)
        ));
    }

    fn draw_freehand(&mut self, freehand: &Freehand) {
        self.body.push(format!(
            r#"<polyline points="{}"{}/>"#,
            points_attr(&freehand.points),
            style_attrs(&freehand.style, false)
        ));
    }

    fn draw_polygon(&mut self, polygon: &Polygon) {
        self.body.push(format!(
            r#"<polygon points="{}"{}/>"#,
            points_attr(&polygon.points),
            style_attrs(&polygon.style, true)
        ));
    }

    fn draw_text(&mut self, text: &Text) {
        // The element origin is the baseline origin, matching SVG's text
        // anchor semantics.
        let fill = text
            .style
            .fill
            .map(css_color)
            .unwrap_or_else(|| "#000000".to_string());
        self.body.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" fill="{}">{}</text>"#,
            text.origin.x,
            text.origin.y,
            text.font.size,
            escape(&text.font.family),
            fill,
            escape(&text.content)
        ));
    }

    fn draw_selection(&mut self, bounds: Rect, handle: Rect) {
        self.body.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" stroke="{}" stroke-width="1" stroke-dasharray="5,5" fill="none"/>"#,
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height(),
            SELECTION_COLOR
        ));
        self.body.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            handle.x0,
            handle.y0,
            handle.width(),
            handle.height(),
            SELECTION_COLOR
        ));
    }

    fn measure_text(&self, content: &str, font: &FontSpec) -> Size {
        let max_line = content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = content.lines().count().max(1);
        Size::new(
            max_line as f64 * font.size * CHAR_WIDTH_FACTOR,
            line_count as f64 * font.size,
        )
    }
}

fn points_attr(points: &[kurbo::Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn style_attrs(style: &Style, fillable: bool) -> String {
    let stroke = style
        .stroke
        .map(css_color)
        .unwrap_or_else(|| "#000000".to_string());
    let fill = if fillable {
        style
            .fill
            .map(css_color)
            .unwrap_or_else(|| "none".to_string())
    } else {
        "none".to_string()
    };
    format!(
        r#" stroke="{}" stroke-width="{}" fill="{}""#,
        stroke, style.stroke_width, fill
    )
}

fn css_color(color: Rgba) -> String {
    if color.a == 255 {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f64::from(color.a) / 255.0
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
