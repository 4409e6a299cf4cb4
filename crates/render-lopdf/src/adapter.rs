//! The lopdf-backed document adapter.
//!
//! Builds the document's object graph in memory and writes it out in one go
//! when the document is finalized. Coordinates arrive in user units with a
//! top-left origin; the scale factor and the PDF y-axis flip are applied at
//! the content-stream boundary.

use crate::encoding::encode_win_ansi;
use crate::fonts::{wrap_text, CoreFont};
use chrono::Utc;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use pdflax_document::{DocumentConfig, DocumentError, PdfCreator, PdfDocument};
use pdflax_style::{
    CellAdvance, Edges, FontVariant, Orientation, PageFormat, ResolvedStyle, Style, Stylesheet,
    TextAlign, Unit,
};
use pdflax_types::{Color, ColorSpec};
use std::collections::HashMap;
use std::io::Write;

// Layout defaults in points, scaled into the document unit at construction.
const DEFAULT_MARGIN_PT: f32 = 28.35; // 1 cm
const CELL_PADDING_PT: f32 = 2.835; // 1 mm
const PAGE_BREAK_MARGIN_PT: f32 = 56.7; // 2 cm
const LINE_WIDTH_PT: f32 = 0.567; // 0.2 mm

/// Graphics state already emitted into the current content stream. Ops are
/// only pushed when the wanted state differs.
#[derive(Default)]
struct ContentState {
    font: Option<(String, f32)>,
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f32>,
}

/// A PDF document built on `lopdf`.
pub struct LopdfDocumentAdapter {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    /// Base font name -> (resource name, font object).
    fonts: HashMap<&'static str, (String, ObjectId)>,
    stylesheet: Stylesheet,

    content: Content,
    annotations: Vec<ObjectId>,
    state: ContentState,
    page_open: bool,

    unit: Unit,
    k: f32,
    orientation: Orientation,
    format: PageFormat,
    page_width: f32,
    page_height: f32,

    l_margin: f32,
    t_margin: f32,
    r_margin: f32,
    c_margin: f32,
    auto_page_break: bool,
    b_margin: f32,
    page_break_trigger: f32,

    x: f32,
    y: f32,
    last_height: f32,
    font: Option<CoreFont>,
    font_size_pt: f32,
    text_color: Color,
    draw_color: Color,
    fill_color: Color,
}

impl LopdfDocumentAdapter {
    pub fn new(config: &DocumentConfig) -> Result<Self, DocumentError> {
        Self::with_stylesheet(config, Stylesheet::default())
    }

    pub fn with_stylesheet(
        config: &DocumentConfig,
        stylesheet: Stylesheet,
    ) -> Result<Self, DocumentError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        // Pages placeholder; Kids and Count are patched at output time.
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![],
                "Count" => 0,
            }),
        );
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let k = config.unit.points_per_unit();
        let (width_pt, height_pt) = config.orientation.apply(config.size.dimensions_pt());
        let page_width = width_pt / k;
        let page_height = height_pt / k;

        let default_margin = DEFAULT_MARGIN_PT / k;
        let (l_margin, t_margin, r_margin, explicit_bottom) = match config.margins {
            Some(margins) => (margins.left, margins.top, margins.right, margins.bottom),
            None => (default_margin, default_margin, default_margin, 0.0),
        };
        let b_margin = if explicit_bottom > 0.0 {
            explicit_bottom
        } else {
            PAGE_BREAK_MARGIN_PT / k
        };

        log::debug!(
            "document set up: {:.2}x{:.2} {:?} ({:?})",
            page_width,
            page_height,
            config.unit,
            config.orientation
        );

        Ok(Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            fonts: HashMap::new(),
            stylesheet,
            content: Content { operations: vec![] },
            annotations: Vec::new(),
            state: ContentState::default(),
            page_open: false,
            unit: config.unit,
            k,
            orientation: config.orientation,
            format: config.size.clone(),
            page_width,
            page_height,
            l_margin,
            t_margin,
            r_margin,
            c_margin: CELL_PADDING_PT / k,
            auto_page_break: true,
            b_margin,
            page_break_trigger: page_height - b_margin,
            x: l_margin,
            y: t_margin,
            last_height: 0.0,
            font: None,
            font_size_pt: 12.0,
            text_color: Color::BLACK,
            draw_color: Color::BLACK,
            fill_color: Color::BLACK,
        })
    }

    fn require_page(&self) -> Result<(), DocumentError> {
        if !self.page_open {
            return Err(DocumentError::InvalidOperation(
                "no page has been started".to_string(),
            ));
        }
        Ok(())
    }

    fn current_font(&self) -> Result<CoreFont, DocumentError> {
        self.font.ok_or_else(|| {
            DocumentError::InvalidOperation("no font has been selected".to_string())
        })
    }

    /// Resource name for `font`, registering the font object on first use.
    fn font_resource(&mut self, font: CoreFont) -> String {
        let base = font.base_name();
        if let Some((name, _)) = self.fonts.get(base) {
            return name.clone();
        }
        let resource_name = format!("F{}", self.fonts.len() + 1);
        let font_id = self.document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base,
            "Encoding" => "WinAnsiEncoding",
        });
        log::debug!("registered core font {} as /{}", base, resource_name);
        self.fonts.insert(base, (resource_name.clone(), font_id));
        resource_name
    }

    fn ensure_font(&mut self) -> Result<(), DocumentError> {
        let font = self.current_font()?;
        let resource = self.font_resource(font);
        let size = self.font_size_pt;
        if self.state.font.as_ref() != Some(&(resource.clone(), size)) {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(resource.as_bytes().to_vec()), size.into()],
            ));
            self.state.font = Some((resource, size));
        }
        Ok(())
    }

    fn ensure_fill(&mut self, color: Color) {
        if self.state.fill != Some(color) {
            self.content.operations.push(Operation::new(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            ));
            self.state.fill = Some(color);
        }
    }

    fn ensure_stroke(&mut self, color: Color) {
        if self.state.stroke != Some(color) {
            self.content.operations.push(Operation::new(
                "RG",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            ));
            self.state.stroke = Some(color);
        }
    }

    fn ensure_line_width(&mut self) {
        if self.state.line_width != Some(LINE_WIDTH_PT) {
            self.content
                .operations
                .push(Operation::new("w", vec![LINE_WIDTH_PT.into()]));
            self.state.line_width = Some(LINE_WIDTH_PT);
        }
    }

    /// Closes the open page: compresses its content stream and writes the
    /// page object.
    fn flush_page(&mut self) -> Result<(), DocumentError> {
        let content = std::mem::replace(&mut self.content, Content { operations: vec![] });
        let encoded = content
            .encode()
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&encoded)?;
        let compressed = encoder.finish()?;
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed));

        let width_pt = self.page_width * self.k;
        let height_pt = self.page_height * self.k;
        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width_pt.into(), height_pt.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        if !self.annotations.is_empty() {
            page_dict.set(
                "Annots",
                Object::Array(
                    self.annotations
                        .drain(..)
                        .map(Object::Reference)
                        .collect(),
                ),
            );
        }
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        self.page_open = false;
        Ok(())
    }

    /// Draws one single-line cell with an explicit edge set and advance
    /// mode. Both the plain and the multiline path end up here.
    fn draw_cell(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        style: &ResolvedStyle,
        edges: Edges,
        advance: CellAdvance,
    ) -> Result<(), DocumentError> {
        self.require_page()?;

        // The automatic page break keeps the x position.
        if self.auto_page_break && self.y + h > self.page_break_trigger {
            let x = self.x;
            self.add_page(None, None)?;
            self.x = x;
        }

        let w = if w <= 0.0 {
            self.page_width - self.r_margin - self.x
        } else {
            w
        };
        let k = self.k;
        let x_pt = self.x * k;
        let w_pt = w * k;
        let h_pt = h * k;
        let top_pt = (self.page_height - self.y) * k;
        let bottom_pt = (self.page_height - (self.y + h)) * k;

        if style.fill {
            self.ensure_fill(self.fill_color);
            self.content.operations.push(Operation::new(
                "re",
                vec![x_pt.into(), bottom_pt.into(), w_pt.into(), h_pt.into()],
            ));
            self.content.operations.push(Operation::new("f", vec![]));
        }

        if edges.any() {
            self.ensure_line_width();
            self.ensure_stroke(self.draw_color);
            if edges == Edges::ALL {
                self.content.operations.push(Operation::new(
                    "re",
                    vec![x_pt.into(), bottom_pt.into(), w_pt.into(), h_pt.into()],
                ));
            } else {
                let mut line = |(x1, y1): (f32, f32), (x2, y2): (f32, f32)| {
                    self.content
                        .operations
                        .push(Operation::new("m", vec![x1.into(), y1.into()]));
                    self.content
                        .operations
                        .push(Operation::new("l", vec![x2.into(), y2.into()]));
                };
                if edges.left {
                    line((x_pt, top_pt), (x_pt, bottom_pt));
                }
                if edges.top {
                    line((x_pt, top_pt), (x_pt + w_pt, top_pt));
                }
                if edges.right {
                    line((x_pt + w_pt, top_pt), (x_pt + w_pt, bottom_pt));
                }
                if edges.bottom {
                    line((x_pt, bottom_pt), (x_pt + w_pt, bottom_pt));
                }
            }
            self.content.operations.push(Operation::new("S", vec![]));
        }

        if !text.is_empty() {
            let font = self.current_font()?;
            let text_width = font.text_width_pt(text, self.font_size_pt) / k;
            let dx = match style.align {
                TextAlign::Left | TextAlign::Justify => self.c_margin,
                TextAlign::Center => (w - text_width) / 2.0,
                TextAlign::Right => w - self.c_margin - text_width,
            };
            let baseline = self.y + 0.5 * h + 0.3 * (self.font_size_pt / k);
            let baseline_pt = (self.page_height - baseline) * k;

            self.content.operations.push(Operation::new("BT", vec![]));
            self.ensure_font()?;
            self.ensure_fill(self.text_color);
            self.content.operations.push(Operation::new(
                "Td",
                vec![(x_pt + dx * k).into(), baseline_pt.into()],
            ));
            self.content.operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(text))],
            ));
            self.content.operations.push(Operation::new("ET", vec![]));
        }

        if let Some(link) = &style.link {
            let action_id = self.document.add_object(dictionary! {
                "Type" => "Action",
                "S" => "URI",
                "URI" => Object::string_literal(link.clone()),
            });
            let annotation_id = self.document.add_object(dictionary! {
                "Type" => "Annot",
                "Subtype" => "Link",
                "Rect" => vec![
                    x_pt.into(),
                    bottom_pt.into(),
                    (x_pt + w_pt).into(),
                    top_pt.into(),
                ],
                "Border" => vec![0.into(), 0.into(), 0.into()],
                "A" => action_id,
            });
            self.annotations.push(annotation_id);
        }

        self.last_height = h;
        match advance {
            CellAdvance::Right => self.x += w,
            CellAdvance::NextLine => {
                self.y += h;
                self.x = self.l_margin;
            }
            CellAdvance::Below => self.y += h,
        }
        Ok(())
    }

    /// Word-wraps `text` into a column of stacked cells of height `h`.
    fn draw_multi_cell(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        style: &ResolvedStyle,
    ) -> Result<(), DocumentError> {
        self.require_page()?;
        let font = self.current_font()?;

        let w = if w <= 0.0 {
            self.page_width - self.r_margin - self.x
        } else {
            w
        };
        let inner_pt = (w - 2.0 * self.c_margin) * self.k;
        let lines = wrap_text(font, self.font_size_pt, text, inner_pt);
        if lines.len() > 1 {
            log::debug!("wrapped text into {} lines", lines.len());
        }

        let edges = style.border.edges();
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            let row_edges = Edges {
                left: edges.left,
                right: edges.right,
                top: edges.top && i == 0,
                bottom: edges.bottom && i == last,
            };
            self.draw_cell(w, h, line, style, row_edges, CellAdvance::Below)?;
        }

        // A wrapped block always finishes at the left margin.
        self.x = self.l_margin;
        Ok(())
    }
}

impl PdfDocument for LopdfDocumentAdapter {
    fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    fn unit(&self) -> Unit {
        self.unit
    }

    fn set_font(
        &mut self,
        family: &str,
        variant: FontVariant,
        size: Option<f32>,
    ) -> Result<(), DocumentError> {
        self.font = Some(CoreFont::select(family, variant)?);
        if let Some(size) = size {
            if size > 0.0 {
                self.font_size_pt = size;
            }
        }
        Ok(())
    }

    fn set_font_size(&mut self, size: f32) {
        if size > 0.0 {
            self.font_size_pt = size;
        }
    }

    fn font_size(&self) -> f32 {
        self.font_size_pt
    }

    fn set_text_color(&mut self, color: ColorSpec) -> Result<(), DocumentError> {
        self.text_color = color.resolve()?;
        Ok(())
    }

    fn set_draw_color(&mut self, color: ColorSpec) -> Result<(), DocumentError> {
        self.draw_color = color.resolve()?;
        Ok(())
    }

    fn set_fill_color(&mut self, color: ColorSpec) -> Result<(), DocumentError> {
        self.fill_color = color.resolve()?;
        Ok(())
    }

    fn text_width(&self, text: &str) -> f32 {
        match self.font {
            Some(font) => font.text_width_pt(text, self.font_size_pt) / self.k,
            None => 0.0,
        }
    }

    fn add_page(
        &mut self,
        orientation: Option<Orientation>,
        format: Option<PageFormat>,
    ) -> Result<(), DocumentError> {
        if self.page_open {
            self.flush_page()?;
        }
        let orientation = orientation.unwrap_or(self.orientation);
        let format = format.unwrap_or_else(|| self.format.clone());
        let (width_pt, height_pt) = orientation.apply(format.dimensions_pt());
        self.page_width = width_pt / self.k;
        self.page_height = height_pt / self.k;
        self.page_break_trigger = self.page_height - self.b_margin;

        self.state = ContentState::default();
        self.page_open = true;
        self.x = self.l_margin;
        self.y = self.t_margin;
        log::debug!("page {} started", self.page_ids.len() + 1);
        Ok(())
    }

    fn set_auto_page_break(&mut self, auto: bool, margin: f32) {
        self.auto_page_break = auto;
        self.b_margin = margin;
        self.page_break_trigger = self.page_height - margin;
    }

    fn page(&self) -> usize {
        self.page_ids.len() + usize::from(self.page_open)
    }

    fn width(&self) -> f32 {
        self.page_width
    }

    fn height(&self) -> f32 {
        self.page_height
    }

    fn left_margin(&self) -> f32 {
        self.l_margin
    }

    fn right_margin(&self) -> f32 {
        self.r_margin
    }

    fn set_left_margin(&mut self, margin: f32) {
        self.l_margin = margin;
        if self.page_open && self.x < margin {
            self.x = margin;
        }
    }

    fn set_right_margin(&mut self, margin: f32) {
        self.r_margin = margin;
    }

    fn cursor_x(&self) -> f32 {
        self.x
    }

    fn cursor_y(&self) -> f32 {
        self.y
    }

    fn set_cursor_x(&mut self, x: f32) {
        self.x = x;
    }

    fn set_cursor_y(&mut self, y: f32) {
        self.y = y;
    }

    fn set_cursor_xy(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn newline(&mut self, height: Option<f32>) {
        self.x = self.l_margin;
        self.y += height.unwrap_or(self.last_height);
    }

    fn cell(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        overrides: &Style,
    ) -> Result<(), DocumentError> {
        let style = self.stylesheet.cell_style(overrides);
        if style.multiline {
            self.draw_multi_cell(w, h, text, &style)
        } else {
            let edges = style.border.edges();
            let advance = style.advance;
            self.draw_cell(w, h, text, &style, edges, advance)
        }
    }

    fn output(mut self: Box<Self>, mut writer: &mut dyn Write) -> Result<(), DocumentError> {
        // An untouched document still yields one valid empty page.
        if self.page_ids.is_empty() && !self.page_open {
            self.add_page(None, None)?;
        }
        if self.page_open {
            self.flush_page()?;
        }

        let mut font_dict = Dictionary::new();
        for (resource_name, font_id) in self.fonts.values() {
            font_dict.set(resource_name.as_bytes(), Object::Reference(*font_id));
        }
        self.document.objects.insert(
            self.resources_id,
            Object::Dictionary(dictionary! { "Font" => font_dict }),
        );

        if let Some(Object::Dictionary(pages)) = self.document.objects.get_mut(&self.pages_id) {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
            pages.set("Kids", kids);
            pages.set("Count", self.page_ids.len() as i64);
        }

        let info_id = self.document.add_object(dictionary! {
            "Producer" => Object::string_literal(format!("pdflax {}", env!("CARGO_PKG_VERSION"))),
            "CreationDate" => Object::string_literal(
                Utc::now().format("D:%Y%m%d%H%M%S").to_string(),
            ),
        });
        self.document.trailer.set("Info", info_id);

        log::debug!("writing document with {} page(s)", self.page_ids.len());
        self.document
            .save_to(&mut writer)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        Ok(())
    }
}

/// Creator for the lopdf-backed implementation.
pub struct LopdfCreator;

impl PdfCreator for LopdfCreator {
    fn create(&self, config: &DocumentConfig) -> Result<Box<dyn PdfDocument>, DocumentError> {
        Ok(Box::new(LopdfDocumentAdapter::new(config)?))
    }

    fn name(&self) -> &'static str {
        "lopdf"
    }
}
