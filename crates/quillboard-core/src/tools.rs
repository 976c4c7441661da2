//! Tool selection and host-owned style configuration.

use crate::shapes::{FontSpec, Rgba, Style};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Rectangle,
    Circle,
    Line,
    Freehand,
    Polygon,
    Text,
}

/// Toolbar-owned configuration the engine reads at commit time.
///
/// These values belong to the host UI; the engine never stores them per
/// gesture, so changing a color mid-drag affects the commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Stroke color for new elements.
    pub stroke: Rgba,
    /// Fill color for new elements (None = hollow).
    pub fill: Option<Rgba>,
    /// Stroke width for new elements.
    pub stroke_width: f64,
    /// Canvas background color.
    pub background: Rgba,
    /// Font size for new text.
    pub font_size: f64,
    /// Font family for new text.
    pub font_family: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            stroke: Rgba::black(),
            fill: None,
            stroke_width: 2.0,
            background: Rgba::white(),
            font_size: FontSpec::DEFAULT_SIZE,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl ToolSettings {
    /// Style applied to newly committed shapes.
    pub fn style(&self) -> Style {
        Style {
            stroke: Some(self.stroke),
            fill: self.fill,
            stroke_width: self.stroke_width,
        }
    }

    /// Style applied to newly committed text: the fill keys the glyph
    /// color and falls back to black.
    pub fn text_style(&self) -> Style {
        Style {
            stroke: None,
            fill: Some(self.fill.unwrap_or_else(Rgba::black)),
            stroke_width: self.stroke_width,
        }
    }

    /// Current font configuration.
    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_size, self.font_family.clone())
    }
}
