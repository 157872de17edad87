//! Offline output of recorded scenes.

mod svg;

pub use svg::{save_svg, to_svg};
