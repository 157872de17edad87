//! Time subsystem.
//!
//! - [`FrameClock`] measures the cadence actually achieved between frames
//! - [`Invalidator`] is the "render me again after N ms" request a widget
//!   issues from inside its own frame
//! - [`RedrawQueue`] is a host-side `Invalidator` that holds pending
//!   deadlines until the loop polls them

mod frame_clock;
mod redraw;

pub use frame_clock::{FrameClock, FrameTime};
pub use redraw::{Invalidator, RedrawQueue};
