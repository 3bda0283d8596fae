//! Scene-description formatting for individual values.

use crate::{
    error::Error,
    value::{Value, Vector, VectorKind},
};

/// One indentation level in emitted scene text.
pub const INDENT: &str = "    ";

#[must_use]
pub fn tab(stops: usize) -> String {
    INDENT.repeat(stops)
}

/// Shortest text that round-trips the float; whole numbers lose the `.0`.
#[must_use]
pub fn float(f: f64) -> String {
    if f == 0.0 {
        // also folds -0.0
        return "0".to_string();
    }

    format!("{f}")
}

/// Double-quoted string literal.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');

    out
}

impl Vector {
    /// `<x, y, z>`, or `rgbft <r, g, b, f, t>` for colors.
    #[must_use]
    pub fn to_sdl(&self) -> String {
        let body = self
            .components()
            .iter()
            .map(|c| float(*c))
            .collect::<Vec<_>>()
            .join(", ");

        match self.kind() {
            VectorKind::Color => format!("rgbft <{body}>"),
            _ => format!("<{body}>"),
        }
    }
}

impl Value {
    /// Inline text for scalar values; nested nodes render as blocks at
    /// `stops`.
    pub fn to_sdl(&self, stops: usize) -> Result<String, Error> {
        let text = match self {
            Self::Bool(b) => b.to_string(),
            Self::Float(f) => float(*f),
            Self::Int(i) => i.to_string(),
            Self::List(items) => {
                let nested = items.iter().any(|item| matches!(item, Self::Node(_)));
                let parts = items
                    .iter()
                    .map(|item| item.to_sdl(stops))
                    .collect::<Result<Vec<_>, _>>()?;

                if nested {
                    parts.join("\n")
                } else {
                    parts.join(", ")
                }
            }
            Self::Node(node) => node.to_sdl(stops)?,
            Self::Sdl(expr) => expr.clone(),
            Self::Str(s) => quote(s),
            Self::Vector(v) => v.to_sdl(),
        };

        Ok(text)
    }
}

///
/// Keyword
///
/// Maps an option key accepted by an attribute to the scene-language keyword
/// it stands for.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Keyword {
    pub key: &'static str,
    pub sdl: &'static str,
}

impl Keyword {
    #[must_use]
    pub const fn new(key: &'static str, sdl: &'static str) -> Self {
        Self { key, sdl }
    }
}

/// Scene keyword for `key`, if the table has it.
#[must_use]
pub fn keyword(table: &[Keyword], key: &str) -> Option<&'static str> {
    table.iter().find(|kw| kw.key == key).map(|kw| kw.sdl)
}
