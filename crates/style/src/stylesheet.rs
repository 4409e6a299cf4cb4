//! The layered style table and its fixed-order cascade.
//!
//! Formatting options for a drawn element come from merging style layers in
//! a fixed static order: `DEFAULT`, `cell`, `block`, the element type's own
//! layer, any class layers, and finally the caller's overrides. Within the
//! merge the last writer wins, field by field.

use super::text::{CellAdvance, CellBorder, FontVariant, TextAlign};
use pdflax_types::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The element types with a dedicated layer in the stylesheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ElementKind {
    #[serde(rename = "p")]
    Paragraph,
    #[serde(rename = "h1")]
    Heading1,
    #[serde(rename = "h2")]
    Heading2,
}

/// One style layer. Every field is optional; unset fields defer to lower
/// layers of the cascade.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_variant: Option<FontVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<CellBorder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance: Option<CellAdvance>,
}

impl Style {
    /// Overlays `over` on top of `self`; fields set in `over` win.
    pub fn merged(&self, over: &Style) -> Style {
        Style {
            font_family: over.font_family.clone().or_else(|| self.font_family.clone()),
            font_variant: over.font_variant.or(self.font_variant),
            font_size: over.font_size.or(self.font_size),
            text_color: over.text_color.or(self.text_color),
            align: over.align.or(self.align),
            border: over.border.or(self.border),
            fill: over.fill.or(self.fill),
            link: over.link.clone().or_else(|| self.link.clone()),
            multiline: over.multiline.or(self.multiline),
            advance: over.advance.or(self.advance),
        }
    }

    /// Fills any remaining holes with the hard fallbacks and produces a
    /// fully-populated style.
    pub fn finalize(&self) -> ResolvedStyle {
        ResolvedStyle {
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| "helvetica".to_string()),
            font_variant: self.font_variant.unwrap_or_default(),
            font_size: self.font_size.unwrap_or(11.0),
            text_color: self.text_color.unwrap_or(Color::BLACK),
            align: self.align.unwrap_or_default(),
            border: self.border.unwrap_or_default(),
            fill: self.fill.unwrap_or(false),
            link: self.link.clone().filter(|l| !l.is_empty()),
            multiline: self.multiline.unwrap_or(false),
            advance: self.advance.unwrap_or_default(),
        }
    }
}

/// The result of a cascade: a concrete value for every style field.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_family: String,
    pub font_variant: FontVariant,
    pub font_size: f32,
    pub text_color: Color,
    pub align: TextAlign,
    pub border: CellBorder,
    pub fill: bool,
    pub link: Option<String>,
    pub multiline: bool,
    pub advance: CellAdvance,
}

impl ResolvedStyle {
    /// Re-expresses this resolved style as a layer with every field set,
    /// for handing back into a lower-level call without losing values.
    pub fn as_overrides(&self) -> Style {
        Style {
            font_family: Some(self.font_family.clone()),
            font_variant: Some(self.font_variant),
            font_size: Some(self.font_size),
            text_color: Some(self.text_color),
            align: Some(self.align),
            border: Some(self.border),
            fill: Some(self.fill),
            link: self.link.clone(),
            multiline: Some(self.multiline),
            advance: Some(self.advance),
        }
    }
}

/// The style table: the `DEFAULT`, `cell` and `block` layers plus the
/// per-element-type and class layers.
///
/// [`Stylesheet::default`] yields the built-in table. A table deserialized
/// from data keeps the built-in content for any layer it does not name;
/// values no layer supplies fall back to the hard defaults when a cascade
/// is finalized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Stylesheet {
    /// Inherited by everything that is drawn.
    pub default: Style,
    /// Applied to all cells, including the DOM-like elements.
    pub cell: Style,
    /// Applied to block-level elements only.
    pub block: Style,
    /// Per-element-type layers, keyed `p`, `h1`, `h2`.
    pub elements: HashMap<ElementKind, Style>,
    /// Named class layers, applied when a caller asks for them.
    pub classes: HashMap<String, Style>,
}

impl Default for Stylesheet {
    fn default() -> Self {
        let mut elements = HashMap::new();
        elements.insert(
            ElementKind::Paragraph,
            Style {
                align: Some(TextAlign::Left),
                advance: Some(CellAdvance::Below),
                multiline: Some(true),
                ..Style::default()
            },
        );
        elements.insert(
            ElementKind::Heading1,
            Style {
                font_variant: Some(FontVariant::Bold),
                font_size: Some(14.0),
                align: Some(TextAlign::Left),
                advance: Some(CellAdvance::Below),
                ..Style::default()
            },
        );
        elements.insert(
            ElementKind::Heading2,
            Style {
                font_variant: Some(FontVariant::Bold),
                font_size: Some(12.0),
                align: Some(TextAlign::Left),
                advance: Some(CellAdvance::Below),
                ..Style::default()
            },
        );

        let mut classes = HashMap::new();
        classes.insert(
            "align-right".to_string(),
            Style {
                align: Some(TextAlign::Right),
                ..Style::default()
            },
        );

        Stylesheet {
            default: Style {
                font_family: Some("helvetica".to_string()),
                font_variant: Some(FontVariant::Regular),
                font_size: Some(11.0),
                text_color: Some(Color::BLACK),
                ..Style::default()
            },
            cell: Style {
                align: Some(TextAlign::Left),
                border: Some(CellBorder::None),
                fill: Some(false),
                link: None,
                multiline: Some(false),
                advance: Some(CellAdvance::Right),
                ..Style::default()
            },
            block: Style::default(),
            elements,
            classes,
        }
    }
}

impl Stylesheet {
    /// Resolves the style for a plain cell: `DEFAULT`, `cell`, overrides.
    pub fn cell_style(&self, overrides: &Style) -> ResolvedStyle {
        self.default
            .merged(&self.cell)
            .merged(overrides)
            .finalize()
    }

    /// Resolves the style for a DOM-like element: `DEFAULT`, `cell`,
    /// `block`, the element type's layer, class layers, overrides.
    pub fn element_style(
        &self,
        kind: ElementKind,
        classes: &[&str],
        overrides: &Style,
    ) -> ResolvedStyle {
        let mut style = self.default.merged(&self.cell).merged(&self.block);
        if let Some(layer) = self.elements.get(&kind) {
            style = style.merged(layer);
        }
        for class in classes {
            if let Some(layer) = self.classes.get(*class) {
                style = style.merged(layer);
            }
        }
        style.merged(overrides).finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_style_carries_every_default_key() {
        let sheet = Stylesheet::default();
        let style = sheet.cell_style(&Style::default());

        assert_eq!(style.font_family, "helvetica");
        assert_eq!(style.font_variant, FontVariant::Regular);
        assert_eq!(style.font_size, 11.0);
        assert_eq!(style.text_color, Color::BLACK);
        assert_eq!(style.align, TextAlign::Left);
        assert_eq!(style.border, CellBorder::None);
        assert!(!style.fill);
        assert!(style.link.is_none());
        assert!(!style.multiline);
        assert_eq!(style.advance, CellAdvance::Right);
    }

    #[test]
    fn test_element_layer_overlays_defaults() {
        let sheet = Stylesheet::default();
        let h1 = sheet.element_style(ElementKind::Heading1, &[], &Style::default());

        // The type layer's keys win.
        assert_eq!(h1.font_variant, FontVariant::Bold);
        assert_eq!(h1.font_size, 14.0);
        assert_eq!(h1.advance, CellAdvance::Below);
        // Keys the layer does not set survive from DEFAULT.
        assert_eq!(h1.font_family, "helvetica");
        assert_eq!(h1.text_color, Color::BLACK);
    }

    #[test]
    fn test_paragraphs_are_multiline() {
        let sheet = Stylesheet::default();
        let p = sheet.element_style(ElementKind::Paragraph, &[], &Style::default());
        assert!(p.multiline);
        assert_eq!(p.advance, CellAdvance::Below);
    }

    #[test]
    fn test_caller_overrides_beat_every_layer() {
        let sheet = Stylesheet::default();
        let overrides = Style {
            align: Some(TextAlign::Center),
            font_size: Some(9.0),
            ..Style::default()
        };
        let style = sheet.element_style(ElementKind::Heading1, &[], &overrides);

        assert_eq!(style.align, TextAlign::Center);
        assert_eq!(style.font_size, 9.0);
        // Untouched keys still come from the lower layers.
        assert_eq!(style.font_variant, FontVariant::Bold);
    }

    #[test]
    fn test_class_layer_sits_between_type_and_overrides() {
        let sheet = Stylesheet::default();

        let classed =
            sheet.element_style(ElementKind::Paragraph, &["align-right"], &Style::default());
        assert_eq!(classed.align, TextAlign::Right);

        let overridden = sheet.element_style(
            ElementKind::Paragraph,
            &["align-right"],
            &Style {
                align: Some(TextAlign::Center),
                ..Style::default()
            },
        );
        assert_eq!(overridden.align, TextAlign::Center);
    }

    #[test]
    fn test_unknown_class_is_ignored() {
        let sheet = Stylesheet::default();
        let style = sheet.element_style(ElementKind::Paragraph, &["no-such-class"], &Style::default());
        assert_eq!(style.align, TextAlign::Left);
    }

    #[test]
    fn test_empty_link_resolves_to_none() {
        let sheet = Stylesheet::default();
        let style = sheet.cell_style(&Style {
            link: Some(String::new()),
            ..Style::default()
        });
        assert!(style.link.is_none());
    }

    #[test]
    fn test_stylesheet_deserializes_from_json() {
        let json = r#"{
            "default": { "font-family": "times", "font-size": 10 },
            "elements": {
                "h1": { "font-size": 18, "text-color": "red" }
            },
            "classes": {
                "highlight": { "fill": true }
            }
        }"#;
        let sheet: Stylesheet = serde_json::from_str(json).unwrap();

        let h1 = sheet.element_style(ElementKind::Heading1, &[], &Style::default());
        assert_eq!(h1.font_family, "times");
        assert_eq!(h1.font_size, 18.0);
        assert_eq!(h1.text_color, Color::RED);

        let highlighted = sheet.element_style(
            ElementKind::Paragraph,
            &["highlight"],
            &Style::default(),
        );
        assert!(highlighted.fill);
    }
}
