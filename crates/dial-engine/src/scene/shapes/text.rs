use crate::coords::Vec2;
use crate::paint::Pen;
use crate::scene::{DrawCmd, DrawList};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in surface pixels.
    pub size: f32,
    /// Filled glyphs, or outlined ones for a stroke pen.
    pub pen: Pen,
    /// Left end of the baseline, absolute surface coordinates.
    pub origin: Vec2,
    /// Frame rotation in effect when the text was drawn, in degrees.
    pub rotation: f32,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        size: f32,
        pen: Pen,
        origin: Vec2,
        rotation: f32,
    ) {
        self.push(DrawCmd::Text(TextCmd { text: text.into(), size, pen, origin, rotation }));
    }
}
