//! Page geometry primitives and the symbolic page-setup vocabulary.
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

/// User-space measurement unit. Every coordinate handed to a document is
/// expressed in this unit and converted to points at the content-stream
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    Pt,
    #[default]
    Mm,
    Cm,
    In,
}

impl Unit {
    /// The scale factor from this unit to PostScript points.
    pub fn points_per_unit(self) -> f32 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => 72.0 / 25.4,
            Unit::Cm => 72.0 / 2.54,
            Unit::In => 72.0,
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pt" => Ok(Unit::Pt),
            "mm" => Ok(Unit::Mm),
            "cm" => Ok(Unit::Cm),
            "in" => Ok(Unit::In),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Unit::Pt => "pt",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
        }
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

/// Page orientation. Landscape swaps the format's dimension pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Applies this orientation to a portrait `(width, height)` pair.
    pub fn apply(self, (width, height): (f32, f32)) -> (f32, f32) {
        match self {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "p" | "portrait" => Ok(Orientation::Portrait),
            "l" | "landscape" => Ok(Orientation::Landscape),
            _ => Err(format!("Unknown orientation: {}", s)),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl Serialize for Orientation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

/// Page format: a named standard size or custom dimensions in points.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageFormat {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageFormat {
    /// Portrait dimensions of this format in points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageFormat::A3 => (841.89, 1190.55),
            PageFormat::A4 => (595.28, 841.89),
            PageFormat::A5 => (420.94, 595.28),
            PageFormat::Letter => (612.0, 792.0),
            PageFormat::Legal => (612.0, 1008.0),
            PageFormat::Custom { width, height } => (*width, *height),
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a3" => Ok(PageFormat::A3),
            "a4" => Ok(PageFormat::A4),
            "a5" => Ok(PageFormat::A5),
            "letter" => Ok(PageFormat::Letter),
            "legal" => Ok(PageFormat::Legal),
            _ => Err(format!("Unknown page format: {}", s)),
        }
    }
}

impl Serialize for PageFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageFormat::A3 => serializer.serialize_str("a3"),
            PageFormat::A4 => serializer.serialize_str("a4"),
            PageFormat::A5 => serializer.serialize_str("a5"),
            PageFormat::Letter => serializer.serialize_str("letter"),
            PageFormat::Legal => serializer.serialize_str("legal"),
            PageFormat::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageFormatDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageFormatDef::deserialize(deserializer)? {
            PageFormatDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageFormatDef::Map { width, height } => Ok(PageFormat::Custom { width, height }),
        }
    }
}

/// Page margins in user units.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_scale_factors() {
        assert_eq!(Unit::Pt.points_per_unit(), 1.0);
        assert!((Unit::Mm.points_per_unit() - 2.8346457).abs() < 1e-4);
        assert!((Unit::Cm.points_per_unit() - 28.346457).abs() < 1e-3);
        assert_eq!(Unit::In.points_per_unit(), 72.0);
    }

    #[test]
    fn test_symbolic_names_translate() {
        let unit: Unit = serde_json::from_str("\"mm\"").unwrap();
        assert_eq!(unit, Unit::Mm);

        let orientation: Orientation = serde_json::from_str("\"landscape\"").unwrap();
        assert_eq!(orientation, Orientation::Landscape);

        let short: Orientation = serde_json::from_str("\"P\"").unwrap();
        assert_eq!(short, Orientation::Portrait);

        let format: PageFormat = serde_json::from_str("\"A4\"").unwrap();
        assert_eq!(format, PageFormat::A4);
    }

    #[test]
    fn test_unknown_symbols_are_rejected() {
        assert!(serde_json::from_str::<Unit>("\"furlong\"").is_err());
        assert!(serde_json::from_str::<Orientation>("\"diagonal\"").is_err());
        assert!(serde_json::from_str::<PageFormat>("\"b5\"").is_err());
    }

    #[test]
    fn test_custom_format_from_map() {
        let format: PageFormat =
            serde_json::from_str(r#"{"width": 100.0, "height": 200.0}"#).unwrap();
        assert_eq!(format.dimensions_pt(), (100.0, 200.0));
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let portrait = PageFormat::A4.dimensions_pt();
        let (w, h) = Orientation::Landscape.apply(portrait);
        assert_eq!((w, h), (portrait.1, portrait.0));
    }
}
