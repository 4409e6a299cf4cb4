use crate::error::DocumentError;
use pdflax_style::{FontVariant, Orientation, PageFormat, Style, Stylesheet, Unit};
use pdflax_types::ColorSpec;
use std::io::Write;

/// The uniform document-building interface.
///
/// A document is a cursor-driven page builder: coordinates are in the
/// document's user unit with the origin at the top-left corner of the page.
/// All layout and byte-stream generation is delegated to the backing PDF
/// library; implementations of this trait only translate.
pub trait PdfDocument {
    /// The style table used to resolve cell and element formatting.
    fn stylesheet(&self) -> &Stylesheet;

    /// The measurement unit this document was set up with.
    fn unit(&self) -> Unit;

    /// Selects the current font. `size` is in points; `None` keeps the
    /// current size.
    fn set_font(
        &mut self,
        family: &str,
        variant: FontVariant,
        size: Option<f32>,
    ) -> Result<(), DocumentError>;

    /// Changes the size of the current font, in points.
    fn set_font_size(&mut self, size: f32);

    /// Current font size in points.
    fn font_size(&self) -> f32;

    fn set_text_color(&mut self, color: ColorSpec) -> Result<(), DocumentError>;
    fn set_draw_color(&mut self, color: ColorSpec) -> Result<(), DocumentError>;
    fn set_fill_color(&mut self, color: ColorSpec) -> Result<(), DocumentError>;

    /// Width of `text` in user units when set in the current font. Zero
    /// when no font has been selected yet.
    fn text_width(&self, text: &str) -> f32;

    /// Starts a new page. `None` arguments reuse the document's own
    /// orientation and format.
    fn add_page(
        &mut self,
        orientation: Option<Orientation>,
        format: Option<PageFormat>,
    ) -> Result<(), DocumentError>;

    /// Enables or disables the automatic page break, with the bottom
    /// trigger margin in user units.
    fn set_auto_page_break(&mut self, auto: bool, margin: f32);

    /// Current page number, starting at 1; zero before the first page.
    fn page(&self) -> usize;

    /// Page width in user units.
    fn width(&self) -> f32;

    /// Page height in user units.
    fn height(&self) -> f32;

    fn left_margin(&self) -> f32;
    fn right_margin(&self) -> f32;
    fn set_left_margin(&mut self, margin: f32);
    fn set_right_margin(&mut self, margin: f32);

    fn cursor_x(&self) -> f32;
    fn cursor_y(&self) -> f32;
    fn set_cursor_x(&mut self, x: f32);
    fn set_cursor_y(&mut self, y: f32);
    fn set_cursor_xy(&mut self, x: f32, y: f32);

    /// Moves the cursor to the beginning of the next line. `None` reuses
    /// the height of the last drawn cell.
    fn newline(&mut self, height: Option<f32>);

    /// Draws one cell: optional fill and border, aligned text, optional
    /// link annotation. A width of zero extends the cell to the right
    /// margin. The formatting options come from the `cell` cascade overlaid
    /// with `overrides`; a multiline style word-wraps the text over stacked
    /// cells. The cursor moves according to the resolved advance mode.
    fn cell(&mut self, w: f32, h: f32, text: &str, overrides: &Style)
        -> Result<(), DocumentError>;

    /// Finalizes the document and writes the PDF byte stream.
    fn output(self: Box<Self>, writer: &mut dyn Write) -> Result<(), DocumentError>;

    /// Finalizes the document into an in-memory buffer.
    fn to_bytes(self: Box<Self>) -> Result<Vec<u8>, DocumentError> {
        let mut buffer = Vec::new();
        self.output(&mut buffer)?;
        Ok(buffer)
    }
}
