use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The single usage error this crate raises itself: a color value that is
/// neither an RGB triple, a known color name, a hex string, nor a greyscale
/// integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Unsupported color configuration: {0}")]
    Unsupported(String),
}

/// An RGB channel triple, one byte per channel.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    pub fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// The named-color table.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
];

/// A polymorphic color value as accepted by the document color setters:
/// an RGB triple, a single greyscale value, or a color name / hex string.
///
/// Anything that fails to resolve to an RGB triple is a usage error and
/// yields [`ColorError::Unsupported`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    Rgb(u8, u8, u8),
    Gray(u8),
    Named(String),
}

impl ColorSpec {
    /// Normalizes this specification to a channel triple.
    pub fn resolve(&self) -> Result<Color, ColorError> {
        match self {
            ColorSpec::Rgb(r, g, b) => Ok(Color::rgb(*r, *g, *b)),
            ColorSpec::Gray(value) => Ok(Color::gray(*value)),
            ColorSpec::Named(name) => {
                let lookup = name.to_lowercase();
                if let Some((_, color)) = NAMED_COLORS.iter().find(|(n, _)| *n == lookup) {
                    return Ok(*color);
                }
                if let Some(hex) = name.strip_prefix('#') {
                    return parse_hex(hex)
                        .ok_or_else(|| ColorError::Unsupported(name.clone()));
                }
                Err(ColorError::Unsupported(name.clone()))
            }
        }
    }
}

/// Parse the digits of a `#rgb` or `#rrggbb` string (without the `#`).
fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Rgb(color.r, color.g, color.b)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from([r, g, b]: [u8; 3]) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<u8> for ColorSpec {
    fn from(value: u8) -> Self {
        ColorSpec::Gray(value)
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Named(name.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        ColorSpec::Named(name)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Gray(u8),
            Triple([u8; 3]),
            Map { r: u8, g: u8, b: u8 },
        }

        let spec = match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => ColorSpec::Named(s),
            ColorDef::Gray(value) => ColorSpec::Gray(value),
            ColorDef::Triple(channels) => ColorSpec::from(channels),
            ColorDef::Map { r, g, b } => ColorSpec::Rgb(r, g, b),
        };
        spec.resolve().map_err(de::Error::custom)
    }
}
