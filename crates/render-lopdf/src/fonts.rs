//! Metrics for the standard Type1 core fonts.
//!
//! Advance widths are the standard PostScript values in 1/1000 em for the
//! printable ASCII range. They drive string measurement and the word-wrap
//! used by multiline cells; the fonts themselves are never embedded.

use pdflax_document::DocumentError;
use pdflax_style::FontVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreFamily {
    Helvetica,
    Times,
    Courier,
}

/// One of the built-in core fonts: a family plus a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoreFont {
    pub family: CoreFamily,
    pub variant: FontVariant,
}

impl CoreFont {
    /// Maps a family name from the style DSL onto a core font. `arial` is
    /// accepted as an alias for Helvetica.
    pub fn select(family: &str, variant: FontVariant) -> Result<Self, DocumentError> {
        let family = match family.to_lowercase().as_str() {
            "helvetica" | "arial" => CoreFamily::Helvetica,
            "times" | "times-roman" | "times new roman" => CoreFamily::Times,
            "courier" => CoreFamily::Courier,
            other => return Err(DocumentError::UnknownFont(other.to_string())),
        };
        Ok(Self { family, variant })
    }

    /// The PostScript base font name.
    pub fn base_name(&self) -> &'static str {
        match (self.family, self.variant) {
            (CoreFamily::Helvetica, FontVariant::Regular) => "Helvetica",
            (CoreFamily::Helvetica, FontVariant::Bold) => "Helvetica-Bold",
            (CoreFamily::Helvetica, FontVariant::Italic) => "Helvetica-Oblique",
            (CoreFamily::Helvetica, FontVariant::BoldItalic) => "Helvetica-BoldOblique",
            (CoreFamily::Times, FontVariant::Regular) => "Times-Roman",
            (CoreFamily::Times, FontVariant::Bold) => "Times-Bold",
            (CoreFamily::Times, FontVariant::Italic) => "Times-Italic",
            (CoreFamily::Times, FontVariant::BoldItalic) => "Times-BoldItalic",
            (CoreFamily::Courier, FontVariant::Regular) => "Courier",
            (CoreFamily::Courier, FontVariant::Bold) => "Courier-Bold",
            (CoreFamily::Courier, FontVariant::Italic) => "Courier-Oblique",
            (CoreFamily::Courier, FontVariant::BoldItalic) => "Courier-BoldOblique",
        }
    }

    /// Advance width of one character in 1/1000 em.
    pub fn char_width_units(&self, ch: char) -> u16 {
        let widths = match (self.family, self.variant) {
            (CoreFamily::Courier, _) => return 600,
            (CoreFamily::Helvetica, FontVariant::Regular | FontVariant::Italic) => &HELVETICA,
            (CoreFamily::Helvetica, FontVariant::Bold | FontVariant::BoldItalic) => {
                &HELVETICA_BOLD
            }
            (CoreFamily::Times, FontVariant::Regular | FontVariant::Italic) => &TIMES,
            (CoreFamily::Times, FontVariant::Bold | FontVariant::BoldItalic) => &TIMES_BOLD,
        };
        let code = ch as usize;
        if (0x20..=0x7e).contains(&code) {
            widths[code - 0x20]
        } else {
            // Characters outside the table get a middling default.
            match self.family {
                CoreFamily::Helvetica => 556,
                _ => 500,
            }
        }
    }

    /// Width of `text` in 1/1000 em units.
    pub fn text_width_units(&self, text: &str) -> u32 {
        text.chars().map(|ch| self.char_width_units(ch) as u32).sum()
    }

    /// Width of `text` in points at the given font size.
    pub fn text_width_pt(&self, text: &str, size: f32) -> f32 {
        self.text_width_units(text) as f32 * size / 1000.0
    }
}

/// Greedy word-wrap of `text` into lines no wider than `max_width_pt`.
/// Explicit newlines are honored; a single word wider than the limit gets a
/// line of its own.
pub fn wrap_text(font: CoreFont, size: f32, text: &str, max_width_pt: f32) -> Vec<String> {
    let space_width = font.char_width_units(' ') as f32 * size / 1000.0;
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in segment.split_whitespace() {
            let word_width = font.text_width_pt(word, size);
            if current.is_empty() {
                current = word.to_string();
                current_width = word_width;
            } else if current_width + space_width + word_width <= max_width_pt {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
            } else {
                lines.push(current);
                current = word.to_string();
                current_width = word_width;
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// Advance widths for ASCII 0x20..=0x7E, standard Adobe core font metrics.
#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
static TIMES: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
static TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn helvetica() -> CoreFont {
        CoreFont::select("helvetica", FontVariant::Regular).unwrap()
    }

    #[test]
    fn test_arial_aliases_helvetica() {
        let font = CoreFont::select("Arial", FontVariant::Bold).unwrap();
        assert_eq!(font.family, CoreFamily::Helvetica);
        assert_eq!(font.base_name(), "Helvetica-Bold");
    }

    #[test]
    fn test_unknown_family_errors() {
        let err = CoreFont::select("comic sans", FontVariant::Regular).unwrap_err();
        assert!(matches!(err, DocumentError::UnknownFont(_)));
    }

    #[test]
    fn test_courier_is_monospaced() {
        let font = CoreFont::select("courier", FontVariant::Regular).unwrap();
        assert_eq!(font.char_width_units('i'), font.char_width_units('W'));
        assert_eq!(font.char_width_units('m'), 600);
    }

    #[test]
    fn test_proportional_widths_vary() {
        let font = helvetica();
        assert!(font.char_width_units('i') < font.char_width_units('W'));
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let font = helvetica();
        let at_10 = font.text_width_pt("Hello", 10.0);
        let at_20 = font.text_width_pt("Hello", 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_splits_long_text() {
        let font = helvetica();
        let lines = wrap_text(font, 12.0, "the quick brown fox jumps over the lazy dog", 100.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(font.text_width_pt(line, 12.0) <= 100.0 + 1e-3);
        }
    }

    #[test]
    fn test_wrap_honors_explicit_newlines() {
        let font = helvetica();
        let lines = wrap_text(font, 12.0, "one\ntwo", 10_000.0);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_wrap_of_empty_text_yields_one_line() {
        let font = helvetica();
        assert_eq!(wrap_text(font, 12.0, "", 100.0), vec![String::new()]);
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let font = helvetica();
        let lines = wrap_text(font, 12.0, "a incomprehensibilities b", 30.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "incomprehensibilities");
    }
}
