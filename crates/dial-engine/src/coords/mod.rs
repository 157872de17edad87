//! Coordinate and geometry types shared by the canvas, scene and renderer.
//!
//! Canonical space:
//! - surface pixels
//! - origin top-left
//! - +X right, +Y down (positive rotations turn clockwise on screen)

mod transform;
mod vec2;

pub use transform::Transform;
pub use vec2::Vec2;

/// Integer surface dimensions as reported by the host layout pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when either side is zero and nothing can be laid out yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
