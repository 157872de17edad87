use dial_engine::canvas::Canvas;
use dial_engine::coords::{SurfaceSize, Vec2};
use dial_engine::paint::Pen;
use dial_engine::time::Invalidator;

use crate::clock::{TimeSample, TimeSource};
use crate::config::{FaceConfig, HandStrategy};
use crate::dial::{self, HandPositions};
use crate::geometry::{Geometry, GeometryState, HandGeometry};
use crate::palette::{ColorResolver, ColorRole, Palette};

/// Numerals painted around the face, clockwise from 1.
pub const NUMERALS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// A self-redrawing analog clock face.
///
/// Each [`render_frame`](Self::render_frame) draws the outline, the hands,
/// the numerals and the tick marks for the given time, then asks the host
/// to render again after `config.redraw_interval`. Layout is computed on
/// the first frame with a non-empty surface and kept for the lifetime of
/// the face.
///
/// ```rust,ignore
/// let mut face = ClockFace::new(FaceConfig::classic(), Palette::light());
/// // in the host's draw callback:
/// face.render_now(&mut canvas, surface_size, &LocalClock, &mut redraw_queue);
/// ```
pub struct ClockFace<R: ColorResolver = Palette> {
    config: FaceConfig,
    colors: R,
    geometry: GeometryState,
}

impl<R: ColorResolver> ClockFace<R> {
    pub fn new(config: FaceConfig, colors: R) -> Self {
        Self { config, colors, geometry: GeometryState::Uninitialized }
    }

    #[inline]
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Layout, once a non-empty surface has been seen.
    #[inline]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.get()
    }

    /// Computes the layout for `size` unless it already exists.
    ///
    /// Later calls never change an existing layout. Returns `None` while the
    /// surface is empty.
    pub fn initialize_geometry(&mut self, size: SurfaceSize) -> Option<&Geometry> {
        self.geometry.ensure(size, &self.config)
    }

    /// Samples `clock` and renders one frame.
    pub fn render_now(
        &mut self,
        canvas: &mut dyn Canvas,
        size: SurfaceSize,
        clock: &dyn TimeSource,
        invalidator: &mut dyn Invalidator,
    ) -> Option<HandPositions> {
        let now = clock.now();
        self.render_frame(canvas, size, now, invalidator)
    }

    /// Renders one frame for `now` and schedules the next one.
    ///
    /// Exactly one redraw is requested per call, even when nothing could be
    /// drawn because the surface is still empty. Returns the hand positions
    /// that were drawn.
    pub fn render_frame(
        &mut self,
        canvas: &mut dyn Canvas,
        size: SurfaceSize,
        now: TimeSample,
        invalidator: &mut dyn Invalidator,
    ) -> Option<HandPositions> {
        let drawn = match self.geometry.ensure(size, &self.config) {
            Some(g) => {
                let g = *g;
                draw_face(canvas, &g, &self.config, &self.colors);
                let positions = HandPositions::from_time(&now, &self.config);
                draw_hands(canvas, &g, &self.config, &self.colors, &positions);
                draw_numerals(canvas, &g, &self.config, &self.colors);
                draw_ticks(canvas, &g, &self.config, &self.colors);
                log::trace!(
                    "frame {:02}:{:02}:{:02} -> hour {:.2} minute {:.2} second {:.2}",
                    now.hour,
                    now.minute,
                    now.second,
                    positions.hour,
                    positions.minute,
                    positions.second
                );
                Some(positions)
            }
            None => None,
        };

        invalidator.post_invalidate_delayed(self.config.redraw_interval);
        drawn
    }
}

fn draw_face(canvas: &mut dyn Canvas, g: &Geometry, config: &FaceConfig, colors: &dyn ColorResolver) {
    let color = colors.resolve(ColorRole::CircleFrame);
    canvas.draw_circle(g.center, g.outline_radius, &Pen::stroke(color, config.outline_width));
    if let Some(r) = config.pivot_dot {
        canvas.draw_circle(g.center, r, &Pen::fill(color));
    }
}

fn draw_hands(
    canvas: &mut dyn Canvas,
    g: &Geometry,
    config: &FaceConfig,
    colors: &dyn ColorResolver,
    positions: &HandPositions,
) {
    let hands = [
        (positions.hour, g.hour, ColorRole::HourHand),
        (positions.minute, g.minute, ColorRole::MinuteHand),
        (positions.second, g.second, ColorRole::SecondHand),
    ];
    for (position, hand, role) in hands {
        let pen = Pen::stroke(colors.resolve(role), hand.width);
        draw_hand(canvas, g.center, position, hand, config.hand_strategy, &pen);
    }
}

fn draw_hand(
    canvas: &mut dyn Canvas,
    pivot: Vec2,
    position: f32,
    hand: HandGeometry,
    strategy: HandStrategy,
    pen: &Pen,
) {
    match strategy {
        HandStrategy::RotateFrame => {
            let angle = dial::position_degrees(position);
            canvas.rotate(angle, pivot);
            canvas.draw_line(pivot, Vec2::new(pivot.x, pivot.y - hand.length), pen);
            canvas.rotate(-angle, pivot);
        }
        HandStrategy::Direct => {
            let tip = dial::direct_tip(pivot, position, hand.length);
            canvas.draw_line(pivot, tip, pen);
        }
    }
}

fn draw_numerals(canvas: &mut dyn Canvas, g: &Geometry, config: &FaceConfig, colors: &dyn ColorResolver) {
    let color = colors.resolve(ColorRole::Numerals);
    let pen = if config.numeral_stroke_width > 0.0 {
        Pen::stroke(color, config.numeral_stroke_width)
    } else {
        Pen::fill(color)
    };
    for number in NUMERALS {
        let label = number.to_string();
        let bounds = canvas.text_bounds(&label, g.numeral_size);
        let anchor = dial::numeral_anchor(g.center, g.radius, config.numeral_inset, number);
        // Baseline-left origin that centres the ink box on the anchor, snapped
        // to whole pixels.
        let origin = Vec2::new(
            (anchor.x - bounds.x / 2.0).round(),
            (anchor.y + bounds.y / 2.0).round(),
        );
        canvas.draw_text(&label, origin, g.numeral_size, &pen);
    }
}

/// Rotate-and-draw `count` times without restoring the frame.
///
/// Every tick is the same vertical segment under the 12 o'clock mark; the
/// accumulated rotation places it. After a full turn the frame is back
/// where it started, so nothing is undone.
fn draw_ticks(canvas: &mut dyn Canvas, g: &Geometry, config: &FaceConfig, colors: &dyn ColorResolver) {
    let color = colors.resolve(ColorRole::NumeralLines);
    let style = config.ticks;
    let step = style.step_degrees();
    let top = g.outline_top();

    for index in 1..=style.count() {
        canvas.rotate(step, g.center);
        let spec = if style.is_major(index) { config.major_tick } else { config.minor_tick };
        canvas.draw_line(
            Vec2::new(top.x, top.y + spec.outer_inset),
            Vec2::new(top.x, top.y + spec.inner_inset),
            &Pen::stroke(color, spec.width),
        );
    }
}
