use lopdf::{Dictionary, Document as LopdfDocument, Object};

/// Extract all text content from a PDF document.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Resolve an object that may be a reference or a direct value.
fn resolve_dict<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Dictionary> {
    match object.as_reference() {
        Ok(id) => doc.get_object(id).ok()?.as_dict().ok(),
        Err(_) => object.as_dict().ok(),
    }
}

/// Extract the BaseFont names referenced by any page.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::HashSet::new();

    for (_page_num, page_id) in doc.get_pages() {
        let Some(page_dict) = doc.get_object(page_id).ok().and_then(|o| o.as_dict().ok()) else {
            continue;
        };
        let Some(resources) = page_dict.get(b"Resources").ok().and_then(|r| resolve_dict(doc, r))
        else {
            continue;
        };
        let Some(font_dict) = resources.get(b"Font").ok().and_then(|f| resolve_dict(doc, f))
        else {
            continue;
        };
        for (_name, value) in font_dict.iter() {
            if let Some(font) = resolve_dict(doc, value) {
                if let Ok(base_font) = font.get(b"BaseFont").and_then(|b| b.as_name()) {
                    fonts.insert(String::from_utf8_lossy(base_font).to_string());
                }
            }
        }
    }

    fonts.into_iter().collect()
}

/// MediaBox dimensions of a page (1-based), in points.
pub fn get_page_dimensions(doc: &LopdfDocument, page: usize) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&(page as u32))?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let media_box = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let x0 = media_box[0].as_float().unwrap_or(0.0);
    let y0 = media_box[1].as_float().unwrap_or(0.0);
    let x1 = media_box[2].as_float().unwrap_or(0.0);
    let y1 = media_box[3].as_float().unwrap_or(0.0);
    Some((x1 - x0, y1 - y0))
}

/// Count the external (URI action) link annotations across all pages.
pub fn count_uri_links(doc: &LopdfDocument) -> usize {
    let mut count = 0;

    for (_page_num, page_id) in doc.get_pages() {
        let Some(page_dict) = doc.get_object(page_id).ok().and_then(|o| o.as_dict().ok()) else {
            continue;
        };
        let Ok(annotations) = page_dict.get(b"Annots").and_then(|a| a.as_array()) else {
            continue;
        };
        for annotation in annotations {
            let Some(annotation) = resolve_dict(doc, annotation) else {
                continue;
            };
            let is_link = annotation
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .map(|s| s == b"Link")
                .unwrap_or(false);
            if !is_link {
                continue;
            }
            let is_uri = annotation
                .get(b"A")
                .ok()
                .and_then(|a| resolve_dict(doc, a))
                .and_then(|action| action.get(b"S").and_then(|s| s.as_name()).ok())
                .map(|s| s == b"URI")
                .unwrap_or(false);
            if is_uri {
                count += 1;
            }
        }
    }

    count
}

// ============================================================================
// Assertion macros
// ============================================================================

/// Assert that PDF contains specific text.
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF.
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages.
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF references a font matching a pattern.
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance.
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}

/// Assert the number of external link annotations.
#[macro_export]
macro_rules! assert_pdf_uri_link_count {
    ($pdf:expr, $count:expr) => {
        let links = $crate::common::pdf_assertions::count_uri_links(&$pdf.doc);
        assert_eq!(
            links, $count,
            "Expected {} external links, got {}",
            $count, links
        );
    };
}
