#![allow(dead_code)]

pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use pdflax::{DocumentConfig, PdfDocument, PdflaxFactory};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging.
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Finalizes a document and reparses the emitted bytes.
pub fn finish(doc: Box<dyn PdfDocument>) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = doc.to_bytes()?;
    GeneratedPdf::from_bytes(bytes)
}

/// A default-configured document (portrait A4, millimeters).
pub fn new_default_document() -> Result<Box<dyn PdfDocument>, Box<dyn std::error::Error>> {
    Ok(PdflaxFactory::new().create(&DocumentConfig::default())?)
}
