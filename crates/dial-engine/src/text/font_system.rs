use std::fmt;

use crate::coords::Vec2;

use super::{FixedAdvance, TextMeasure};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns loaded fonts and measures text with the primary one.
///
/// The first successfully loaded font becomes primary. Until a font is
/// loaded, measurement falls back to [`FixedAdvance`].
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
    primary: Option<FontId>,
    fallback: FixedAdvance,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new(), primary: None, fallback: FixedAdvance::default() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        self.primary.get_or_insert(id);
        log::debug!("font {:?} loaded ({} bytes)", id, bytes.len());
        Ok(id)
    }

    #[inline]
    pub fn has_fonts(&self) -> bool {
        !self.fonts.is_empty()
    }

    /// Ink bounds of `text` laid out on one line with font `id`.
    pub fn measure(&self, text: &str, id: FontId, size: f32) -> Option<Vec2> {
        let font = self.fonts.get(id.0)?;

        let mut pen_x = 0.0f32;
        let (mut left, mut right) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut top, mut bottom) = (f32::NEG_INFINITY, f32::INFINITY);
        for ch in text.chars() {
            let m = font.metrics(ch, size);
            if m.width > 0 && m.height > 0 {
                let x0 = pen_x + m.xmin as f32;
                left = left.min(x0);
                right = right.max(x0 + m.width as f32);
                // fontdue's ymin is the bitmap's bottom edge, measured up from the baseline.
                bottom = bottom.min(m.ymin as f32);
                top = top.max(m.ymin as f32 + m.height as f32);
            }
            pen_x += m.advance_width;
        }

        if left > right {
            return Some(Vec2::zero());
        }
        Some(Vec2::new(right - left, top - bottom))
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for FontSystem {
    fn text_bounds(&self, text: &str, size: f32) -> Vec2 {
        self.primary
            .and_then(|id| self.measure(text, id, size))
            .unwrap_or_else(|| self.fallback.text_bounds(text, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"not a font").is_err());
        assert!(!fonts.has_fonts());
    }

    #[test]
    fn without_fonts_falls_back_to_fixed_advance() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.text_bounds("10", 40.0), FixedAdvance::default().text_bounds("10", 40.0));
    }
}
