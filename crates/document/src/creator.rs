use crate::config::DocumentConfig;
use crate::error::DocumentError;
use crate::traits::PdfDocument;

/// Construction seam for PDF backends. Each implementation knows how to
/// turn a [`DocumentConfig`] into a ready document wrapping its own
/// rendering library.
pub trait PdfCreator: Send + Sync {
    fn create(&self, config: &DocumentConfig) -> Result<Box<dyn PdfDocument>, DocumentError>;

    /// The backend name this creator registers under.
    fn name(&self) -> &'static str;
}
