use pdflax_document::{DocumentConfig, DocumentError, PdfCreator, PdfDocument};
use pdflax_render_lopdf::LopdfDocumentAdapter;

/// The simple document factory: one fixed backend, options merged over the
/// defaults table (portrait / mm / A4).
///
/// This is the first-generation construction path; applications that need
/// several named backends resolve through
/// [`PdfCreatorRegistry`](crate::PdfCreatorRegistry) instead.
#[derive(Debug, Default)]
pub struct PdflaxFactory;

impl PdflaxFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates a document with the given page setup.
    pub fn create(&self, config: &DocumentConfig) -> Result<Box<dyn PdfDocument>, DocumentError> {
        log::debug!("creating lopdf-backed document");
        Ok(Box::new(LopdfDocumentAdapter::new(config)?))
    }

    /// Creates a document with the defaults table untouched.
    pub fn create_default(&self) -> Result<Box<dyn PdfDocument>, DocumentError> {
        self.create(&DocumentConfig::default())
    }

    /// Creates a document from a JSON option payload, as handed over by a
    /// host application. Symbolic option names (`"landscape"`, `"mm"`,
    /// `"a4"`, ...) are translated; omitted options keep their defaults.
    pub fn create_from_value(
        &self,
        options: &serde_json::Value,
    ) -> Result<Box<dyn PdfDocument>, DocumentError> {
        let config: DocumentConfig = serde_json::from_value(options.clone())
            .map_err(|e| DocumentError::Config(e.to_string()))?;
        self.create(&config)
    }
}

impl PdfCreator for PdflaxFactory {
    fn create(&self, config: &DocumentConfig) -> Result<Box<dyn PdfDocument>, DocumentError> {
        PdflaxFactory::create(self, config)
    }

    fn name(&self) -> &'static str {
        "pdflax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_creates_a_document_with_defaults() {
        let factory = PdflaxFactory::new();
        let doc = factory.create_default().unwrap();
        // A4 portrait in millimeters.
        assert!((doc.width() - 210.0).abs() < 0.1);
        assert!((doc.height() - 297.0).abs() < 0.1);
    }

    #[test]
    fn test_symbolic_options_are_translated() {
        let factory = PdflaxFactory::new();
        let doc = factory
            .create_from_value(&json!({"orientation": "landscape", "size": "letter"}))
            .unwrap();
        assert!(doc.width() > doc.height());
    }

    #[test]
    fn test_unknown_option_values_are_config_errors() {
        let factory = PdflaxFactory::new();
        let err = factory
            .create_from_value(&json!({"size": "tabloid"}))
            .err()
            .unwrap();
        assert!(matches!(err, DocumentError::Config(_)));
    }
}
