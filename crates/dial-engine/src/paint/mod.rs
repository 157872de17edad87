//! Paint model shared between the canvas, scene and exporters.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// Whether a closed shape is filled or outlined.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Everything needed to stroke or fill one primitive.
///
/// Strokes always end in round caps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub style: PaintStyle,
    /// Stroke width in surface pixels; ignored for fills.
    pub width: f32,
}

impl Pen {
    #[inline]
    pub fn stroke(color: Color, width: f32) -> Self {
        Self { color, style: PaintStyle::Stroke, width }
    }

    #[inline]
    pub fn fill(color: Color) -> Self {
        Self { color, style: PaintStyle::Fill, width: 0.0 }
    }
}
