use dial_engine::coords::{SurfaceSize, Vec2};

use crate::config::{FaceConfig, HandSpec};

/// Length and stroke width of one hand, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandGeometry {
    pub length: f32,
    pub width: f32,
}

impl HandGeometry {
    fn from_spec(radius: f32, spec: HandSpec) -> Self {
        Self {
            length: radius * spec.length_pct / 100.0,
            width: (radius / 2.0) * spec.width_pct / 100.0,
        }
    }
}

/// Layout of a face on a surface of a given size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    pub size: SurfaceSize,
    /// Pivot: the surface centre, snapped to whole pixels.
    pub center: Vec2,
    pub padding: f32,
    /// `min(width, height) / 2 - padding`, in integer pixels. Negative on
    /// surfaces too small for the padding.
    pub radius: f32,
    /// Radius of the drawn outline circle.
    pub outline_radius: f32,
    pub hour: HandGeometry,
    pub minute: HandGeometry,
    pub second: HandGeometry,
    pub numeral_size: f32,
}

impl Geometry {
    pub fn compute(size: SurfaceSize, config: &FaceConfig) -> Self {
        let center = Vec2::new((size.width / 2) as f32, (size.height / 2) as f32);
        let half_min = i64::from(size.width.min(size.height) / 2);
        let radius = (half_min - i64::from(config.padding)) as f32;

        Self {
            size,
            center,
            padding: config.padding as f32,
            radius,
            outline_radius: radius + config.outline_offset,
            hour: HandGeometry::from_spec(radius, config.hour_hand),
            minute: HandGeometry::from_spec(radius, config.minute_hand),
            second: HandGeometry::from_spec(radius, config.second_hand),
            numeral_size: config.numeral_size,
        }
    }

    /// Topmost point of the outline circle, directly above the pivot.
    #[inline]
    pub fn outline_top(&self) -> Vec2 {
        Vec2::new(self.center.x, self.center.y - self.outline_radius)
    }
}

/// Lazily computed layout.
///
/// Starts `Uninitialized`; the first call to [`ensure`](Self::ensure) with a
/// non-empty surface computes the geometry, and from then on it never
/// changes, whatever sizes later calls pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GeometryState {
    #[default]
    Uninitialized,
    Ready(Geometry),
}

impl GeometryState {
    /// Returns the layout, computing it on first use.
    ///
    /// An empty surface leaves the state untouched and returns `None`.
    pub fn ensure(&mut self, size: SurfaceSize, config: &FaceConfig) -> Option<&Geometry> {
        if !self.is_ready() {
            if size.is_empty() {
                log::debug!("geometry deferred: surface is {}x{}", size.width, size.height);
                return None;
            }

            let geometry = Geometry::compute(size, config);
            if geometry.radius <= 0.0 {
                log::warn!(
                    "surface {}x{} leaves no room for padding {}: radius {}",
                    size.width,
                    size.height,
                    config.padding,
                    geometry.radius
                );
            }
            log::debug!(
                "geometry ready: center ({}, {}), radius {}",
                geometry.center.x,
                geometry.center.y,
                geometry.radius
            );
            *self = GeometryState::Ready(geometry);
        }
        self.get()
    }

    #[inline]
    pub fn get(&self) -> Option<&Geometry> {
        match self {
            GeometryState::Ready(g) => Some(g),
            GeometryState::Uninitialized => None,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, GeometryState::Ready(_))
    }
}
