use crate::coords::Vec2;
use crate::paint::Pen;
use crate::scene::{DrawCmd, DrawList};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub pen: Pen,
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, pen: Pen) {
        self.push(DrawCmd::Circle(CircleCmd { center, radius, pen }));
    }
}
