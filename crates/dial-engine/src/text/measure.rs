use crate::coords::Vec2;

/// Reports the tight bounding box of rendered text.
pub trait TextMeasure {
    /// Returns `(width, height)` of the ink bounds of `text` at `size`
    /// pixels, excluding side bearings and line gap.
    fn text_bounds(&self, text: &str, size: f32) -> Vec2;
}

/// Monospace approximation: every char is `advance × size` wide and the ink
/// height is `height × size`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedAdvance {
    pub advance: f32,
    pub height: f32,
}

impl FixedAdvance {
    pub const fn new(advance: f32, height: f32) -> Self {
        Self { advance, height }
    }
}

impl Default for FixedAdvance {
    /// Proportions of lining digits in common sans-serif faces.
    fn default() -> Self {
        Self::new(0.55, 0.72)
    }
}

impl TextMeasure for FixedAdvance {
    fn text_bounds(&self, text: &str, size: f32) -> Vec2 {
        let n = text.chars().count();
        if n == 0 {
            return Vec2::zero();
        }
        Vec2::new(n as f32 * self.advance * size, self.height * size)
    }
}
