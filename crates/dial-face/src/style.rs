//! Building a face from a `.dial` style sheet.
//!
//! ```text
//! face {
//!     preset: minimal          // classic | minimal, applied before other keys
//!     hour_hand_length: 50     // percent of the radius
//!     hour_hand_width: 10      // percent of half the radius
//!     ticks: minutes           // minutes | hours
//!     hands: rotate            // rotate | direct
//!     second_hand: sweep       // tick | sweep
//!     pivot_dot: true
//!     redraw_ms: 500
//! }
//! palette {
//!     second_hand: #e53935
//! }
//! ```

use std::time::Duration;

use dial_engine::paint::Color;
use dial_style::{parse_str, Prop, Section, StyleDocument, Value};

use crate::config::{FaceConfig, HandStrategy, SecondHandMotion, TickStyle};
use crate::error::ConfigError;
use crate::palette::{ColorRole, Palette};

/// Configuration and colors read from one style sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaceStyle {
    pub config: FaceConfig,
    pub palette: Palette,
}

/// Parses and applies a style sheet on top of the classic preset and the
/// light palette.
pub fn load_style(src: &str) -> Result<FaceStyle, ConfigError> {
    let doc = parse_str(src)?;
    build_style(&doc)
}

/// Applies an already parsed style sheet.
pub fn build_style(doc: &StyleDocument) -> Result<FaceStyle, ConfigError> {
    for section in &doc.sections {
        if section.name != "face" && section.name != "palette" {
            return Err(ConfigError::UnknownSection { name: section.name.clone(), line: section.line });
        }
    }

    let mut style = FaceStyle::default();

    // The last preset anywhere in the sheet picks the base; every other key
    // then overrides it regardless of order.
    if let Some(prop) = doc.sections_named("face").flat_map(|s| &s.props).filter(|p| p.key == "preset").last() {
        let name = ident(prop)?;
        style.config = FaceConfig::preset(name).ok_or_else(|| unknown_variant(prop, name))?;
    }

    for section in doc.sections_named("face") {
        for prop in section.props.iter().filter(|p| p.key != "preset") {
            apply_face_prop(&mut style.config, section, prop)?;
        }
    }
    for section in doc.sections_named("palette") {
        for prop in &section.props {
            let role = ColorRole::from_key(&prop.key).ok_or_else(|| unknown_key(section, prop))?;
            let [r, g, b, a] = color(prop)?;
            style.palette.set(role, Color::from_srgb_u8(r, g, b, a));
        }
    }

    style.config.validate()?;
    log::debug!("style applied: {} section(s)", doc.sections.len());
    Ok(style)
}

fn apply_face_prop(config: &mut FaceConfig, section: &Section, prop: &Prop) -> Result<(), ConfigError> {
    match prop.key.as_str() {
        "hour_hand_length" => config.hour_hand.length_pct = number(prop)?,
        "minute_hand_length" => config.minute_hand.length_pct = number(prop)?,
        "second_hand_length" => config.second_hand.length_pct = number(prop)?,
        "hour_hand_width" => config.hour_hand.width_pct = number(prop)?,
        "minute_hand_width" => config.minute_hand.width_pct = number(prop)?,
        "second_hand_width" => config.second_hand.width_pct = number(prop)?,
        "padding" => config.padding = number(prop)?.max(0.0).round() as u32,
        "outline_offset" => config.outline_offset = number(prop)?,
        "outline_width" => config.outline_width = number(prop)?,
        "pivot_dot" => {
            config.pivot_dot = if boolean(prop)? { config.pivot_dot.or(Some(16.0)) } else { None };
        }
        "pivot_radius" => config.pivot_dot = Some(number(prop)?),
        "numeral_inset" => config.numeral_inset = number(prop)?,
        "numeral_size" => config.numeral_size = number(prop)?,
        "numeral_stroke_width" => config.numeral_stroke_width = number(prop)?,
        "minute_hand_seconds" => config.minute_hand_seconds = boolean(prop)?,
        "redraw_ms" => {
            config.redraw_interval = Duration::from_millis(number(prop)?.max(0.0).round() as u64);
        }
        "ticks" => {
            config.ticks = match ident(prop)? {
                "minutes" => TickStyle::Minutes,
                "hours" => TickStyle::Hours,
                other => return Err(unknown_variant(prop, other)),
            };
        }
        "hands" => {
            config.hand_strategy = match ident(prop)? {
                "rotate" => HandStrategy::RotateFrame,
                "direct" => HandStrategy::Direct,
                other => return Err(unknown_variant(prop, other)),
            };
        }
        "second_hand" => {
            config.second_hand_motion = match ident(prop)? {
                "tick" => SecondHandMotion::Tick,
                "sweep" => SecondHandMotion::Sweep,
                other => return Err(unknown_variant(prop, other)),
            };
        }
        "minor_tick_outer" => config.minor_tick.outer_inset = number(prop)?,
        "minor_tick_inner" => config.minor_tick.inner_inset = number(prop)?,
        "minor_tick_width" => config.minor_tick.width = number(prop)?,
        "major_tick_outer" => config.major_tick.outer_inset = number(prop)?,
        "major_tick_inner" => config.major_tick.inner_inset = number(prop)?,
        "major_tick_width" => config.major_tick.width = number(prop)?,
        _ => return Err(unknown_key(section, prop)),
    }
    Ok(())
}

// ── value helpers ─────────────────────────────────────────────────────────

fn wrong_type(prop: &Prop, expected: &'static str) -> ConfigError {
    ConfigError::WrongType {
        key: prop.key.clone(),
        expected,
        found: prop.value.kind(),
        line: prop.line,
        col: prop.col,
    }
}

fn unknown_key(section: &Section, prop: &Prop) -> ConfigError {
    ConfigError::UnknownKey {
        section: section.name.clone(),
        key: prop.key.clone(),
        line: prop.line,
        col: prop.col,
    }
}

fn unknown_variant(prop: &Prop, value: &str) -> ConfigError {
    ConfigError::UnknownVariant {
        key: prop.key.clone(),
        value: value.to_string(),
        line: prop.line,
        col: prop.col,
    }
}

fn number(prop: &Prop) -> Result<f32, ConfigError> {
    prop.value.as_number().ok_or_else(|| wrong_type(prop, "number"))
}

fn color(prop: &Prop) -> Result<[u8; 4], ConfigError> {
    prop.value.as_color().ok_or_else(|| wrong_type(prop, "color"))
}

fn ident(prop: &Prop) -> Result<&str, ConfigError> {
    prop.value.as_ident().ok_or_else(|| wrong_type(prop, "identifier"))
}

fn boolean(prop: &Prop) -> Result<bool, ConfigError> {
    match &prop.value {
        Value::Ident(s) => prop.value.as_bool().ok_or_else(|| unknown_variant(prop, s)),
        _ => Err(wrong_type(prop, "boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HandSpec;

    #[test]
    fn empty_sheet_is_classic_light() {
        let style = load_style("").unwrap();
        assert_eq!(style.config, FaceConfig::classic());
        assert_eq!(style.palette, Palette::light());
    }

    #[test]
    fn preset_applies_before_overrides_wherever_it_appears() {
        let style = load_style("face { numeral_inset: 22  preset: minimal }").unwrap();
        assert_eq!(style.config.ticks, TickStyle::Hours);
        assert_eq!(style.config.numeral_inset, 22.0);
    }

    #[test]
    fn hand_percentages() {
        let style = load_style(
            "face {
                hour_hand_length: 40  minute_hand_length: 65  second_hand_length: 90
                hour_hand_width: 12   minute_hand_width: 7    second_hand_width: 1
            }",
        )
        .unwrap();
        assert_eq!(style.config.hour_hand, HandSpec::new(40.0, 12.0));
        assert_eq!(style.config.minute_hand, HandSpec::new(65.0, 7.0));
        assert_eq!(style.config.second_hand, HandSpec::new(90.0, 1.0));
    }

    #[test]
    fn enumerations_and_flags() {
        let style = load_style(
            "face { ticks: hours  hands: direct  second_hand: sweep  pivot_dot: false  redraw_ms: 250 }",
        )
        .unwrap();
        let c = &style.config;
        assert_eq!(c.ticks, TickStyle::Hours);
        assert_eq!(c.hand_strategy, HandStrategy::Direct);
        assert_eq!(c.second_hand_motion, SecondHandMotion::Sweep);
        assert_eq!(c.pivot_dot, None);
        assert_eq!(c.redraw_interval, Duration::from_millis(250));
    }

    #[test]
    fn pivot_dot_on_minimal_gets_default_radius() {
        let style = load_style("face { preset: minimal  pivot_dot: true }").unwrap();
        assert_eq!(style.config.pivot_dot, Some(16.0));
    }

    #[test]
    fn palette_overrides_single_roles() {
        let style = load_style("palette { second_hand: #00ff00  numerals: #00000080 }").unwrap();
        assert_eq!(style.palette.second_hand.to_srgb_u8(), [0, 255, 0, 255]);
        assert_eq!(style.palette.numerals.to_srgb_u8()[3], 128);
        assert_eq!(style.palette.hour_hand, Palette::light().hour_hand);
    }

    #[test]
    fn unknown_section() {
        let err = load_style("\nbezel { }").unwrap_err();
        assert_eq!(err, ConfigError::UnknownSection { name: "bezel".into(), line: 2 });
    }

    #[test]
    fn unknown_key_has_position() {
        let err = load_style("face {\n  hour_length: 4\n}").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey { line: 2, col: 3, .. }), "{err:?}");
    }

    #[test]
    fn wrong_type() {
        let err = load_style("face { ticks: 60 }").unwrap_err();
        assert!(matches!(err, ConfigError::WrongType { expected: "identifier", found: "number", .. }));
        let err = load_style("palette { numerals: black }").unwrap_err();
        assert!(matches!(err, ConfigError::WrongType { expected: "color", .. }));
    }

    #[test]
    fn unknown_variants() {
        assert!(matches!(load_style("face { preset: baroque }"), Err(ConfigError::UnknownVariant { .. })));
        assert!(matches!(load_style("face { ticks: weekly }"), Err(ConfigError::UnknownVariant { .. })));
        assert!(matches!(load_style("face { pivot_dot: maybe }"), Err(ConfigError::UnknownVariant { .. })));
    }

    #[test]
    fn out_of_range_is_caught_by_validation() {
        let err = load_style("face { hour_hand_width: 250 }").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "hour_hand_width", .. }));
    }

    #[test]
    fn huge_literals_never_reach_the_config() {
        let digits = "1".repeat(60);
        let err = load_style(&format!("face {{ outline_offset: {digits} }}")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err:?}");

        let err = load_style("face { padding: 4000000000 }").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "padding", .. }), "{err:?}");
        let err = load_style("face { major_tick_inner: 100000 }").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "tick_inner_inset", .. }), "{err:?}");
    }

    #[test]
    fn numeral_stroke_width() {
        assert_eq!(load_style("").unwrap().config.numeral_stroke_width, 4.0);
        let style = load_style("face { numeral_stroke_width: 0 }").unwrap();
        assert_eq!(style.config.numeral_stroke_width, 0.0);
    }

    #[test]
    fn syntax_errors_pass_through() {
        let err = load_style("face { ticks: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("style parse error"));
    }
}
