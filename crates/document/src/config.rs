use pdflax_style::{Margins, Orientation, PageFormat, Unit};
use serde::{Deserialize, Serialize};

/// Page setup for a new document. The defaults are portrait A4 measured in
/// millimeters; a config deserialized from data only needs to name the
/// options it changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocumentConfig {
    pub orientation: Orientation,
    pub unit: Unit,
    pub size: PageFormat,
    /// Page margins in user units. When unset, the backend applies its own
    /// defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,
}

impl DocumentConfig {
    pub fn new(orientation: Orientation, unit: Unit, size: PageFormat) -> Self {
        Self {
            orientation,
            unit,
            size,
            margins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_portrait_a4_mm() {
        let config = DocumentConfig::default();
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.unit, Unit::Mm);
        assert_eq!(config.size, PageFormat::A4);
        assert!(config.margins.is_none());
    }

    #[test]
    fn test_partial_options_merge_over_defaults() {
        let config: DocumentConfig =
            serde_json::from_str(r#"{"orientation": "landscape"}"#).unwrap();
        assert_eq!(config.orientation, Orientation::Landscape);
        assert_eq!(config.unit, Unit::Mm);
        assert_eq!(config.size, PageFormat::A4);
    }

    #[test]
    fn test_symbolic_option_names_translate() {
        let config: DocumentConfig = serde_json::from_str(
            r#"{"orientation": "L", "unit": "pt", "size": "letter", "margins": {"left": 15.0}}"#,
        )
        .unwrap();
        assert_eq!(config.orientation, Orientation::Landscape);
        assert_eq!(config.unit, Unit::Pt);
        assert_eq!(config.size, PageFormat::Letter);
        assert_eq!(config.margins.unwrap().left, 15.0);
    }
}
