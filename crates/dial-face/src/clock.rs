use chrono::{Local, NaiveTime, Timelike};

/// Wall-clock time of day as read for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeSample {
    /// 0–23.
    pub hour: u32,
    /// 0–59.
    pub minute: u32,
    /// 0–59.
    pub second: u32,
    /// Fraction of the current second, `[0, 1)`.
    pub subsec: f32,
}

impl TimeSample {
    /// Whole-second sample. Out-of-range fields are wrapped into range.
    pub fn hms(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour: hour % 24, minute: minute % 60, second: second % 60, subsec: 0.0 }
    }

    pub fn with_subsec(mut self, subsec: f32) -> Self {
        self.subsec = subsec.clamp(0.0, 0.999_999);
        self
    }

    /// Hour on a 12-hour dial.
    ///
    /// Only hours past noon are folded, so 0 and 12 both keep their value;
    /// both land on the 12 o'clock mark.
    pub fn hour12(&self) -> u32 {
        if self.hour > 12 { self.hour - 12 } else { self.hour }
    }
}

impl From<NaiveTime> for TimeSample {
    fn from(t: NaiveTime) -> Self {
        // nanosecond() exceeds 1e9 during a leap second.
        let subsec = (t.nanosecond() % 1_000_000_000) as f32 / 1e9;
        TimeSample::hms(t.hour(), t.minute(), t.second()).with_subsec(subsec)
    }
}

/// Host-provided time of day.
pub trait TimeSource {
    fn now(&self) -> TimeSample;
}

/// Local time of the machine.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> TimeSample {
        Local::now().time().into()
    }
}

/// Always reports the same instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedClock(pub TimeSample);

impl TimeSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afternoon_hours_fold() {
        assert_eq!(TimeSample::hms(15, 0, 0).hour12(), 3);
        assert_eq!(TimeSample::hms(23, 59, 59).hour12(), 11);
    }

    #[test]
    fn noon_and_midnight_are_kept() {
        assert_eq!(TimeSample::hms(12, 0, 0).hour12(), 12);
        assert_eq!(TimeSample::hms(0, 0, 0).hour12(), 0);
    }

    #[test]
    fn from_naive_time() {
        let t = NaiveTime::from_hms_milli_opt(18, 30, 15, 250).unwrap();
        let s = TimeSample::from(t);
        assert_eq!((s.hour, s.minute, s.second), (18, 30, 15));
        assert!((s.subsec - 0.25).abs() < 1e-6);
    }

    #[test]
    fn leap_second_fraction_stays_below_one() {
        let t = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        assert!(TimeSample::from(t).subsec < 1.0);
    }

    #[test]
    fn fixed_clock_repeats() {
        let clock = FixedClock(TimeSample::hms(6, 30, 0));
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn local_clock_is_in_range() {
        let s = LocalClock.now();
        assert!(s.hour < 24 && s.minute < 60 && s.second < 60);
        assert!((0.0..1.0).contains(&s.subsec));
    }
}
