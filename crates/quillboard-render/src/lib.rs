//! Renderer implementations for Quillboard.
//!
//! The engine paints through the `Painter` capability defined in
//! `quillboard-core`; this crate provides backends. [`SvgPainter`] records
//! each frame as an SVG document, which keeps rendering deterministic and
//! usable headless (tests, server-side export).

mod svg;

pub use svg::SvgPainter;

use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
