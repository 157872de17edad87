use super::DrawCmd;
use super::shapes::{CircleCmd, LineCmd, TextCmd};

/// Recorded draw stream for one frame, in paint order.
///
/// `clear()` keeps the allocation, so a list reused across frames stops
/// allocating once warmed up.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Commands in paint order (back-to-front).
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn circles(&self) -> impl Iterator<Item = &CircleCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Circle(c) => Some(c),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        })
    }
}
