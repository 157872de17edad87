use crate::coords::Vec2;
use crate::paint::Pen;
use crate::scene::{DrawCmd, DrawList};

/// Straight segment payload. Endpoints are absolute surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub pen: Pen,
}

impl LineCmd {
    #[inline]
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, pen: Pen) {
        self.push(DrawCmd::Line(LineCmd { from, to, pen }));
    }
}
