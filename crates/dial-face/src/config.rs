use std::time::Duration;

use crate::error::ConfigError;

/// Length and stroke width of one hand, as percentages.
///
/// `length_pct` is relative to the face radius, `width_pct` to half of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSpec {
    pub length_pct: f32,
    pub width_pct: f32,
}

impl HandSpec {
    pub const fn new(length_pct: f32, width_pct: f32) -> Self {
        Self { length_pct, width_pct }
    }
}

/// How tick marks are laid out around the face.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickStyle {
    /// 60 ticks at 6° steps; every fifth one is drawn with the major spec.
    Minutes,
    /// 12 ticks at 30° steps, all major.
    Hours,
}

impl TickStyle {
    pub const fn count(self) -> u32 {
        match self {
            TickStyle::Minutes => 60,
            TickStyle::Hours => 12,
        }
    }

    /// Rotation between consecutive ticks, in degrees.
    pub fn step_degrees(self) -> f32 {
        360.0 / self.count() as f32
    }

    /// Whether the `index`-th tick (1-based) is an hour mark.
    pub const fn is_major(self, index: u32) -> bool {
        match self {
            TickStyle::Minutes => index % 5 == 0,
            TickStyle::Hours => true,
        }
    }
}

/// One tick kind. Insets are measured inward from the outline circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickSpec {
    pub outer_inset: f32,
    pub inner_inset: f32,
    pub width: f32,
}

impl TickSpec {
    pub const fn new(outer_inset: f32, inner_inset: f32, width: f32) -> Self {
        Self { outer_inset, inner_inset, width }
    }
}

/// How a hand's tip is placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandStrategy {
    /// Rotate the frame around the pivot, draw straight up, rotate back.
    RotateFrame,
    /// Compute the tip with trigonometry and draw without touching the frame.
    Direct,
}

/// Second hand motion.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SecondHandMotion {
    /// Jumps once per second.
    Tick,
    /// Includes the sub-second fraction of the sampled time.
    Sweep,
}

/// Everything that shapes a face apart from colors.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceConfig {
    pub hour_hand: HandSpec,
    pub minute_hand: HandSpec,
    pub second_hand: HandSpec,
    /// Distance kept between the surface edge and the face radius.
    pub padding: u32,
    /// Outline circle radius is `radius + outline_offset`.
    pub outline_offset: f32,
    pub outline_width: f32,
    /// Radius of the filled dot over the pivot; `None` draws no dot.
    pub pivot_dot: Option<f32>,
    /// Numerals sit on a circle of `radius - numeral_inset`.
    pub numeral_inset: f32,
    pub numeral_size: f32,
    /// Numerals are outlined with this stroke width; `0` fills them instead.
    pub numeral_stroke_width: f32,
    pub ticks: TickStyle,
    pub minor_tick: TickSpec,
    pub major_tick: TickSpec,
    /// Minute hand advances with the seconds (`minute + second / 60`).
    pub minute_hand_seconds: bool,
    pub hand_strategy: HandStrategy,
    pub second_hand_motion: SecondHandMotion,
    /// Delay requested after every frame.
    pub redraw_interval: Duration,
}

impl FaceConfig {
    /// 60 ticks, pivot dot, numerals 30px in, minute hand following seconds.
    pub fn classic() -> Self {
        Self {
            hour_hand: HandSpec::new(50.0, 10.0),
            minute_hand: HandSpec::new(75.0, 6.0),
            second_hand: HandSpec::new(80.0, 2.0),
            padding: 50,
            outline_offset: 40.0,
            outline_width: 8.0,
            pivot_dot: Some(16.0),
            numeral_inset: 30.0,
            numeral_size: 40.0,
            numeral_stroke_width: 4.0,
            ticks: TickStyle::Minutes,
            minor_tick: TickSpec::new(0.0, 20.0, 4.0),
            major_tick: TickSpec::new(1.0, 40.0, 10.0),
            minute_hand_seconds: true,
            hand_strategy: HandStrategy::RotateFrame,
            second_hand_motion: SecondHandMotion::Tick,
            redraw_interval: Duration::from_millis(500),
        }
    }

    /// 12 hour ticks, no pivot dot, numerals 15px in, minute hand on whole
    /// minutes, tips placed by trigonometry.
    pub fn minimal() -> Self {
        Self {
            hour_hand: HandSpec::new(45.0, 8.0),
            minute_hand: HandSpec::new(70.0, 5.0),
            second_hand: HandSpec::new(70.0, 2.0),
            pivot_dot: None,
            numeral_inset: 15.0,
            ticks: TickStyle::Hours,
            major_tick: TickSpec::new(0.0, 25.0, 6.0),
            minute_hand_seconds: false,
            hand_strategy: HandStrategy::Direct,
            ..Self::classic()
        }
    }

    /// Looks up a preset by its style-sheet name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "minimal" => Some(Self::minimal()),
            _ => None,
        }
    }

    /// Rejects settings that cannot describe a face.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pct = [
            ("hour_hand_length", self.hour_hand.length_pct),
            ("minute_hand_length", self.minute_hand.length_pct),
            ("second_hand_length", self.second_hand.length_pct),
            ("hour_hand_width", self.hour_hand.width_pct),
            ("minute_hand_width", self.minute_hand.width_pct),
            ("second_hand_width", self.second_hand.width_pct),
        ];
        for (key, value) in pct {
            check_range(key, value, 0.0, 100.0)?;
        }

        check_range("padding", self.padding as f32, 0.0, 10_000.0)?;
        check_range("outline_offset", self.outline_offset, -1000.0, 1000.0)?;
        check_range("outline_width", self.outline_width, 0.0, 1000.0)?;
        check_range("numeral_inset", self.numeral_inset, -1000.0, 1000.0)?;
        check_range("numeral_size", self.numeral_size, 1.0, 1000.0)?;
        check_range("numeral_stroke_width", self.numeral_stroke_width, 0.0, 1000.0)?;
        if let Some(r) = self.pivot_dot {
            check_range("pivot_radius", r, 0.0, 1000.0)?;
        }
        for tick in [self.minor_tick, self.major_tick] {
            check_range("tick_outer_inset", tick.outer_inset, -1000.0, 1000.0)?;
            check_range("tick_inner_inset", tick.inner_inset, -1000.0, 1000.0)?;
            check_range("tick_width", tick.width, 0.0, 1000.0)?;
        }

        let ms = self.redraw_interval.as_millis() as f32;
        check_range("redraw_ms", ms, 1.0, 60_000.0)?;
        Ok(())
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::classic()
    }
}

fn check_range(key: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { key, value, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        FaceConfig::classic().validate().unwrap();
        FaceConfig::minimal().validate().unwrap();
    }

    #[test]
    fn presets_differ_where_the_variants_do() {
        let (a, b) = (FaceConfig::classic(), FaceConfig::minimal());
        assert_eq!(a.numeral_inset, 30.0);
        assert_eq!(b.numeral_inset, 15.0);
        assert!(a.pivot_dot.is_some() && b.pivot_dot.is_none());
        assert!(a.minute_hand_seconds && !b.minute_hand_seconds);
        assert_eq!((a.ticks, b.ticks), (TickStyle::Minutes, TickStyle::Hours));
        assert_eq!(a.redraw_interval, Duration::from_millis(500));
        assert_eq!(b.redraw_interval, Duration::from_millis(500));
    }

    #[test]
    fn hands_get_thinner_from_hour_to_second() {
        for c in [FaceConfig::classic(), FaceConfig::minimal()] {
            assert!(c.hour_hand.width_pct > c.minute_hand.width_pct);
            assert!(c.minute_hand.width_pct > c.second_hand.width_pct);
            assert!(c.hour_hand.length_pct < c.minute_hand.length_pct);
        }
    }

    #[test]
    fn percentage_over_100_is_rejected() {
        let mut c = FaceConfig::classic();
        c.second_hand.length_pct = 120.0;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::OutOfRange { key: "second_hand_length", .. })
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let mut c = FaceConfig::classic();
        c.hour_hand.width_pct = f32::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn layout_lengths_must_be_finite() {
        let mut c = FaceConfig::classic();
        c.outline_offset = f32::INFINITY;
        assert!(matches!(c.validate(), Err(ConfigError::OutOfRange { key: "outline_offset", .. })));

        let mut c = FaceConfig::classic();
        c.numeral_inset = f32::NEG_INFINITY;
        assert!(matches!(c.validate(), Err(ConfigError::OutOfRange { key: "numeral_inset", .. })));

        let mut c = FaceConfig::minimal();
        c.major_tick.inner_inset = f32::NAN;
        assert!(matches!(c.validate(), Err(ConfigError::OutOfRange { key: "tick_inner_inset", .. })));

        let mut c = FaceConfig::classic();
        c.padding = u32::MAX;
        assert!(matches!(c.validate(), Err(ConfigError::OutOfRange { key: "padding", .. })));
    }

    #[test]
    fn zero_redraw_interval_is_rejected() {
        let mut c = FaceConfig::classic();
        c.redraw_interval = Duration::ZERO;
        assert!(c.validate().is_err());
    }

    #[test]
    fn tick_styles() {
        assert_eq!(TickStyle::Minutes.step_degrees(), 6.0);
        assert_eq!(TickStyle::Hours.step_degrees(), 30.0);
        let majors = (1..=60).filter(|&i| TickStyle::Minutes.is_major(i)).count();
        assert_eq!(majors, 12);
    }

    #[test]
    fn unknown_preset() {
        assert!(FaceConfig::preset("baroque").is_none());
        assert_eq!(FaceConfig::preset("minimal"), Some(FaceConfig::minimal()));
    }
}
