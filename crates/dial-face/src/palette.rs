use dial_engine::paint::Color;

/// Symbolic colors a face asks its host for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorRole {
    CircleFrame,
    HourHand,
    MinuteHand,
    SecondHand,
    Numerals,
    NumeralLines,
}

impl ColorRole {
    pub const ALL: [ColorRole; 6] = [
        ColorRole::CircleFrame,
        ColorRole::HourHand,
        ColorRole::MinuteHand,
        ColorRole::SecondHand,
        ColorRole::Numerals,
        ColorRole::NumeralLines,
    ];

    /// Key used for this role in the `palette` section of a style sheet.
    pub const fn key(self) -> &'static str {
        match self {
            ColorRole::CircleFrame => "circle_frame",
            ColorRole::HourHand => "hour_hand",
            ColorRole::MinuteHand => "minute_hand",
            ColorRole::SecondHand => "second_hand",
            ColorRole::Numerals => "numerals",
            ColorRole::NumeralLines => "numeral_lines",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }
}

/// Theme lookup supplied by the host.
pub trait ColorResolver {
    fn resolve(&self, role: ColorRole) -> Color;
}

/// Concrete color table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub circle_frame: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    pub numerals: Color,
    pub numeral_lines: Color,
}

impl Palette {
    /// Dark ink on a light face with a red second hand.
    pub fn light() -> Self {
        Self {
            circle_frame: Color::from_rgb_hex(0x263238),
            hour_hand: Color::from_rgb_hex(0x212121),
            minute_hand: Color::from_rgb_hex(0x424242),
            second_hand: Color::from_rgb_hex(0xe53935),
            numerals: Color::from_rgb_hex(0x212121),
            numeral_lines: Color::from_rgb_hex(0x607d8b),
        }
    }

    pub fn set(&mut self, role: ColorRole, color: Color) {
        *self.slot(role) = color;
    }

    fn slot(&mut self, role: ColorRole) -> &mut Color {
        match role {
            ColorRole::CircleFrame => &mut self.circle_frame,
            ColorRole::HourHand => &mut self.hour_hand,
            ColorRole::MinuteHand => &mut self.minute_hand,
            ColorRole::SecondHand => &mut self.second_hand,
            ColorRole::Numerals => &mut self.numerals,
            ColorRole::NumeralLines => &mut self.numeral_lines,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl ColorResolver for Palette {
    fn resolve(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::CircleFrame => self.circle_frame,
            ColorRole::HourHand => self.hour_hand,
            ColorRole::MinuteHand => self.minute_hand,
            ColorRole::SecondHand => self.second_hand,
            ColorRole::Numerals => self.numerals,
            ColorRole::NumeralLines => self.numeral_lines,
        }
    }
}
