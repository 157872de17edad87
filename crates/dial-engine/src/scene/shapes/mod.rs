mod circle;
mod line;
mod text;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use text::TextCmd;
