use phf::{Map, phf_map};
use rand::Rng;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque 8-bit RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

static NAMED_COLORS: Map<&'static str, Color> = phf_map! {
    "black" => Color { r: 0, g: 0, b: 0 },
    "white" => Color { r: 255, g: 255, b: 255 },
    "yellow" => Color { r: 242, g: 196, b: 89 },
    "blue" => Color { r: 9, g: 132, b: 189 },
    "red" => Color { r: 189, g: 9, b: 102 },
    "green" => Color { r: 9, g: 189, b: 90 },
};

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Looks up one of the built-in palette names (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Draws a uniformly random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.r#gen(),
            g: rng.r#gen(),
            b: rng.r#gen(),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid color '{0}': expected 'rgb(r, g, b)', '#rrggbb' or a palette name")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseColorError(s.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(err());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let channels = body
                .split(',')
                .map(|part| part.trim().parse::<u8>().map_err(|_| err()))
                .collect::<Result<Vec<_>, _>>()?;
            return match channels.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                _ => Err(err()),
            };
        }

        Self::named(trimmed).ok_or_else(err)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
