/// A parsed style sheet: an ordered list of named sections.
///
/// Section names may repeat; consumers decide whether later sections
/// override earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleDocument {
    pub sections: Vec<Section>,
}

impl StyleDocument {
    /// Iterates sections with the given name in source order.
    pub fn sections_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections.iter().filter(move |s| s.name == name)
    }
}

/// `name { key: value ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub props: Vec<Prop>,
    /// 1-based line of the section name.
    pub line: usize,
}

impl Section {
    /// Returns the last value bound to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }
}

/// A single `key: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based position of the key.
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f32),
    /// Straight-alpha `[r, g, b, a]` bytes from `#rrggbb` / `#rrggbbaa`.
    Color([u8; 4]),
    Ident(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<[u8; 4]> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Value::Ident(s) => Some(s),
            _ => None,
        }
    }

    /// `true` / `false` identifiers.
    pub fn as_bool(&self) -> Option<bool> {
        match self.as_ident()? {
            "true" | "on" | "yes" => Some(true),
            "false" | "off" | "no" => Some(false),
            _ => None,
        }
    }

    /// Short human-readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Ident(_) => "identifier",
        }
    }
}
