//! Text measurement.
//!
//! Layout code only needs the ink bounds of short strings (clock numerals),
//! so the seam is the small [`TextMeasure`] trait. [`FontSystem`] answers it
//! from real font metrics; [`FixedAdvance`] answers it from constants and is
//! what tests and font-less hosts use.

mod font_system;
mod measure;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use measure::{FixedAdvance, TextMeasure};
