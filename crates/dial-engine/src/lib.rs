//! Dial engine crate.
//!
//! Host-independent building blocks for self-redrawing widgets: geometry,
//! paint, a recording canvas, text measurement, redraw timing, logging and
//! SVG export. Nothing here knows what a clock is.

pub mod canvas;
pub mod coords;
pub mod export;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
