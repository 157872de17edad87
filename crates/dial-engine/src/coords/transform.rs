use super::Vec2;

/// 2D affine transform.
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self { e: dx, f: dy, ..Self::IDENTITY }
    }

    /// Rotation by `degrees` around the origin. Positive is clockwise on a
    /// y-down surface.
    pub fn rotate(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    /// Rotation by `degrees` around `pivot`.
    pub fn rotate_around(degrees: f32, pivot: Vec2) -> Self {
        Self::translate(pivot.x, pivot.y)
            .pre_concat(Self::rotate(degrees))
            .pre_concat(Self::translate(-pivot.x, -pivot.y))
    }

    /// Returns `self ∘ other`: `other` is applied first, then `self`.
    ///
    /// This is how a canvas accumulates `rotate`/`translate` calls: the new
    /// operation acts in the current local frame.
    pub fn pre_concat(self, other: Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    #[inline]
    pub fn map_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Rotation component in degrees, in `(-180, 180]`.
    pub fn rotation_degrees(&self) -> f32 {
        self.b.atan2(self.a).to_degrees()
    }

    /// `true` when every coefficient is within `eps` of the identity.
    pub fn approx_identity(&self, eps: f32) -> bool {
        let id = Self::IDENTITY;
        [
            self.a - id.a,
            self.b - id.b,
            self.c - id.c,
            self.d - id.d,
            self.e - id.e,
            self.f - id.f,
        ]
        .iter()
        .all(|v| v.abs() <= eps)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
