//! Dial arithmetic: where hands point and where numerals sit.
//!
//! Hands are placed on a 60-unit dial ("position"). One unit is 6°, and
//! angles are measured clockwise from 12 o'clock.

use std::f32::consts::{FRAC_PI_2, PI};

use dial_engine::coords::{Transform, Vec2};

use crate::clock::TimeSample;
use crate::config::{FaceConfig, SecondHandMotion};

/// Degrees per dial unit (360° / 60).
pub const DEGREES_PER_UNIT: f32 = 6.0;

/// Positions of the three hands on the 60-unit dial.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandPositions {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandPositions {
    pub fn from_time(now: &TimeSample, config: &FaceConfig) -> Self {
        let minute = now.minute as f32;
        let second = now.second as f32;

        let hour = hour_position(now.hour12(), now.minute);
        let minute = if config.minute_hand_seconds { minute + second / 60.0 } else { minute };
        let second = match config.second_hand_motion {
            SecondHandMotion::Tick => second,
            SecondHandMotion::Sweep => second + now.subsec,
        };
        Self { hour, minute, second }
    }
}

/// `(hour12 + minute / 60) × 5`: the 12-hour dial stretched onto 60 units.
///
/// `hour12` is 12 at noon, so noon-hour positions fall in `[60, 65)`, which
/// points the same way as `[0, 5)`.
pub fn hour_position(hour12: u32, minute: u32) -> f32 {
    (hour12 as f32 + minute as f32 / 60.0) * 5.0
}

/// Dial position to clockwise degrees from 12 o'clock.
#[inline]
pub fn position_degrees(position: f32) -> f32 {
    position * DEGREES_PER_UNIT
}

/// Tip of a hand of `length` at `position`, by trigonometry.
///
/// θ = position·π/30 − π/2, so position 0 points up.
pub fn direct_tip(pivot: Vec2, position: f32, length: f32) -> Vec2 {
    let theta = position * PI / 30.0 - FRAC_PI_2;
    pivot + Vec2::polar(theta, length)
}

/// Tip of a hand of `length` at `position`, by rotating the frame around
/// the pivot and going straight up.
///
/// Matches [`direct_tip`] up to float rounding.
pub fn rotated_tip(pivot: Vec2, position: f32, length: f32) -> Vec2 {
    Transform::rotate_around(position_degrees(position), pivot)
        .map_point(Vec2::new(pivot.x, pivot.y - length))
}

/// Angle of numeral `number` in radians, 0 = 3 o'clock, clockwise.
#[inline]
pub fn numeral_angle(number: u32) -> f32 {
    PI / 6.0 * (number as f32 - 3.0)
}

/// Centre point of numeral `number` on a circle of `radius - inset`.
pub fn numeral_anchor(pivot: Vec2, radius: f32, inset: f32, number: u32) -> Vec2 {
    pivot + Vec2::polar(numeral_angle(number), radius - inset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    fn at(h: u32, m: u32, s: u32) -> HandPositions {
        HandPositions::from_time(&TimeSample::hms(h, m, s), &FaceConfig::classic())
    }

    #[test]
    fn three_o_clock() {
        let p = at(3, 0, 0);
        assert_eq!(p.hour, 15.0);
        assert_eq!(p.minute, 0.0);
        assert_eq!(p.second, 0.0);
        assert_eq!(position_degrees(p.hour), 90.0);

        let pivot = Vec2::new(200.0, 200.0);
        // Hour hand points east, minute and second hands straight up.
        assert!(direct_tip(pivot, p.hour, 100.0).distance(Vec2::new(300.0, 200.0)) < EPS);
        assert!(direct_tip(pivot, p.minute, 100.0).distance(Vec2::new(200.0, 100.0)) < EPS);
        assert!(rotated_tip(pivot, p.second, 100.0).distance(Vec2::new(200.0, 100.0)) < EPS);
    }

    #[test]
    fn half_past_six_offsets_the_hour_hand() {
        let p = at(6, 30, 0);
        assert_eq!(p.hour, 32.5);
        assert_eq!(position_degrees(p.hour), 195.0);
    }

    #[test]
    fn afternoon_matches_morning() {
        assert_eq!(at(18, 30, 0).hour, at(6, 30, 0).hour);
    }

    #[test]
    fn minute_hand_follows_seconds_only_when_enabled() {
        let now = TimeSample::hms(10, 20, 30);
        assert_eq!(HandPositions::from_time(&now, &FaceConfig::classic()).minute, 20.5);
        assert_eq!(HandPositions::from_time(&now, &FaceConfig::minimal()).minute, 20.0);
    }

    #[test]
    fn sweep_adds_the_subsecond_fraction() {
        let now = TimeSample::hms(10, 20, 30).with_subsec(0.5);
        let mut config = FaceConfig::classic();
        assert_eq!(HandPositions::from_time(&now, &config).second, 30.0);
        config.second_hand_motion = SecondHandMotion::Sweep;
        assert_eq!(HandPositions::from_time(&now, &config).second, 30.5);
    }

    #[test]
    fn numeral_twelve_sits_on_top() {
        let pivot = Vec2::new(100.0, 100.0);
        let p = numeral_anchor(pivot, 80.0, 15.0, 12);
        let expected = Vec2::new(
            100.0 + (PI / 6.0 * 9.0).cos() * 65.0,
            100.0 + (PI / 6.0 * 9.0).sin() * 65.0,
        );
        assert!(p.distance(expected) < EPS);
        assert!(p.distance(Vec2::new(100.0, 35.0)) < EPS);
    }

    #[test]
    fn numeral_three_sits_east_and_six_south() {
        let pivot = Vec2::new(100.0, 100.0);
        assert!(numeral_anchor(pivot, 80.0, 30.0, 3).distance(Vec2::new(150.0, 100.0)) < EPS);
        assert!(numeral_anchor(pivot, 80.0, 30.0, 6).distance(Vec2::new(100.0, 150.0)) < EPS);
    }

    proptest! {
        #[test]
        fn hour_position_wraps_into_the_dial(hour in 0u32..24, minute in 0u32..60) {
            let now = TimeSample::hms(hour, minute, 0);
            let h12 = now.hour12();
            prop_assert_eq!(h12, if hour > 12 { hour - 12 } else { hour });

            let p = hour_position(h12, minute);
            prop_assert!((0.0..65.0).contains(&p));
            prop_assert!((0.0..60.0).contains(&p.rem_euclid(60.0)));
        }

        #[test]
        fn both_strategies_agree(
            position in 0.0f32..60.0,
            length in 0.0f32..300.0,
            cx in 0.0f32..500.0,
            cy in 0.0f32..500.0,
        ) {
            let pivot = Vec2::new(cx, cy);
            let a = direct_tip(pivot, position, length);
            let b = rotated_tip(pivot, position, length);
            prop_assert!(a.distance(b) < EPS, "{:?} vs {:?}", a, b);
            prop_assert!((a.distance(pivot) - length).abs() < EPS);
        }
    }
}
