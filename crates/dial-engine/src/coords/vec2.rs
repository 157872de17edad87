use core::ops::{Add, Mul, Sub};

/// 2D point or offset in surface pixels (+X right, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Offset of length `len` in direction `radians`.
    ///
    /// Angle 0 points along +X; with +Y down, positive angles turn clockwise
    /// on screen.
    #[inline]
    pub fn polar(radians: f32, len: f32) -> Self {
        Self::new(radians.cos() * len, radians.sin() * len)
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn polar_zero_points_east() {
        let v = Vec2::polar(0.0, 5.0);
        assert!((v.x - 5.0).abs() < 1e-6 && v.y.abs() < 1e-6);
    }

    #[test]
    fn polar_minus_half_pi_points_up() {
        let v = Vec2::polar(-FRAC_PI_2, 2.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y + 2.0).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }
}
