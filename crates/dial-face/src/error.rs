use std::fmt;

use dial_style::ParseError;

/// Error produced while turning a style sheet into a face configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The style sheet is not syntactically valid.
    Parse(ParseError),
    UnknownSection { name: String, line: usize },
    UnknownKey { section: String, key: String, line: usize, col: usize },
    WrongType { key: String, expected: &'static str, found: &'static str, line: usize, col: usize },
    /// An identifier value outside the key's vocabulary (e.g. `ticks: weekly`).
    UnknownVariant { key: String, value: String, line: usize, col: usize },
    /// A numeric setting outside its accepted range.
    OutOfRange { key: &'static str, value: f32, min: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "{e}"),
            ConfigError::UnknownSection { name, line } => {
                write!(f, "unknown section `{name}` at line {line}")
            }
            ConfigError::UnknownKey { section, key, line, col } => {
                write!(f, "unknown key `{key}` in `{section}` at {line}:{col}")
            }
            ConfigError::WrongType { key, expected, found, line, col } => {
                write!(f, "`{key}` at {line}:{col} expects a {expected}, got a {found}")
            }
            ConfigError::UnknownVariant { key, value, line, col } => {
                write!(f, "`{value}` is not a valid value for `{key}` at {line}:{col}")
            }
            ConfigError::OutOfRange { key, value, min, max } => {
                write!(f, "`{key}` = {value} is outside [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::Parse(e)
    }
}
