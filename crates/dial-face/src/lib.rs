//! Dial face: a self-redrawing analog clock renderer on top of `dial-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dial_face::prelude::*;
//!
//! let style = load_style(include_str!("classic.dial"))?;
//! let mut face = ClockFace::new(style.config, style.palette);
//!
//! // In the host's draw callback:
//! let mut list = DrawList::new();
//! let mut canvas = SceneCanvas::new(&mut list, &fonts);
//! face.render_now(&mut canvas, surface_size, &LocalClock, &mut redraw_queue);
//! ```
//!
//! # Theming
//!
//! Colors are looked up through [`ColorResolver`], so a host can map the
//! face's roles onto its own theme instead of using a [`Palette`]:
//!
//! ```rust,ignore
//! struct Dark;
//!
//! impl ColorResolver for Dark {
//!     fn resolve(&self, role: ColorRole) -> Color {
//!         match role {
//!             ColorRole::SecondHand => Color::from_rgb_hex(0xff5252),
//!             _ => Color::WHITE,
//!         }
//!     }
//! }
//! ```

pub mod clock;
pub mod config;
pub mod dial;
pub mod error;
pub mod face;
pub mod geometry;
pub mod palette;
pub mod style;

pub use error::ConfigError;
pub use face::ClockFace;
pub use style::{load_style, FaceStyle};

/// Everything a host needs to put a face on screen.
pub mod prelude {
    pub use crate::clock::{FixedClock, LocalClock, TimeSample, TimeSource};
    pub use crate::config::{
        FaceConfig, HandSpec, HandStrategy, SecondHandMotion, TickSpec, TickStyle,
    };
    pub use crate::dial::HandPositions;
    pub use crate::error::ConfigError;
    pub use crate::face::ClockFace;
    pub use crate::geometry::{Geometry, GeometryState};
    pub use crate::palette::{ColorResolver, ColorRole, Palette};
    pub use crate::style::{load_style, FaceStyle};

    pub use dial_engine::canvas::{Canvas, SceneCanvas};
    pub use dial_engine::coords::{SurfaceSize, Vec2};
    pub use dial_engine::paint::Color;
    pub use dial_engine::scene::DrawList;
    pub use dial_engine::time::{Invalidator, RedrawQueue};
}
