//! Styled DOM-like element helpers.
//!
//! These are convenience methods layered on the core [`PdfDocument`]
//! interface: each resolves the element's cascade, applies the resulting
//! font and text color, and draws a cell carrying the fully-resolved
//! formatting.

use crate::error::DocumentError;
use crate::traits::PdfDocument;
use pdflax_style::{ElementKind, Style};
use pdflax_types::ColorSpec;

/// Factor applied to the font size to get a comfortable cell height for
/// line-based elements.
const LINE_SPACING: f32 = 1.25;

pub trait PdfDocumentExt: PdfDocument {
    /// Draws a styled element: paragraph, heading, etc. Class names select
    /// additional stylesheet layers; `overrides` wins over everything.
    fn element(
        &mut self,
        kind: ElementKind,
        classes: &[&str],
        text: &str,
        overrides: &Style,
    ) -> Result<(), DocumentError> {
        let style = self.stylesheet().element_style(kind, classes, overrides);
        self.set_font(&style.font_family, style.font_variant, Some(style.font_size))?;
        self.set_text_color(ColorSpec::from(style.text_color))?;

        let height = style.font_size * LINE_SPACING / self.unit().points_per_unit();
        self.cell(0.0, height, text, &style.as_overrides())
    }

    fn p(&mut self, text: &str) -> Result<(), DocumentError> {
        self.element(ElementKind::Paragraph, &[], text, &Style::default())
    }

    fn h1(&mut self, text: &str) -> Result<(), DocumentError> {
        self.element(ElementKind::Heading1, &[], text, &Style::default())
    }

    fn h2(&mut self, text: &str) -> Result<(), DocumentError> {
        self.element(ElementKind::Heading2, &[], text, &Style::default())
    }
}

impl<T: PdfDocument + ?Sized> PdfDocumentExt for T {}
