//! Immediate-mode drawing surface.
//!
//! [`Canvas`] is the capability a renderer draws against: primitives in the
//! current coordinate frame plus rotation of that frame around a pivot.
//! [`SceneCanvas`] implements it by resolving every primitive to absolute
//! coordinates and recording it into a [`DrawList`](crate::scene::DrawList).

mod scene_canvas;

pub use scene_canvas::SceneCanvas;

use crate::coords::Vec2;
use crate::paint::Pen;

pub trait Canvas {
    /// Circle centred at `center` in the current frame.
    fn draw_circle(&mut self, center: Vec2, radius: f32, pen: &Pen);

    /// Segment between two points in the current frame.
    fn draw_line(&mut self, from: Vec2, to: Vec2, pen: &Pen);

    /// Text whose baseline starts at `origin` in the current frame.
    ///
    /// A stroke pen outlines the glyphs instead of filling them.
    fn draw_text(&mut self, text: &str, origin: Vec2, size: f32, pen: &Pen);

    /// Ink bounds `(width, height)` of `text` at `size`.
    fn text_bounds(&self, text: &str, size: f32) -> Vec2;

    /// Rotates the current frame by `degrees` (clockwise) around `pivot`.
    ///
    /// Rotations accumulate until undone by an opposite rotation.
    fn rotate(&mut self, degrees: f32, pivot: Vec2);
}
