use crate::error::PdflaxError;
use pdflax_document::{DocumentConfig, PdfCreator, PdfDocument};
use pdflax_registry::{RegistryError, RegistryWithDefault};
use std::sync::Arc;

/// A backend implementation as held by the registry.
pub type SharedPdfCreator = Arc<dyn PdfCreator>;

/// Facade over the shared creator registry: resolves a backend by name (or
/// the designated default) and hands back ready documents.
///
/// Every facade built from the same registry sees the same backends; the
/// registry itself is typically a container singleton.
#[derive(Clone)]
pub struct PdfCreatorRegistry {
    registry: Arc<RegistryWithDefault<SharedPdfCreator>>,
}

impl PdfCreatorRegistry {
    pub fn new(registry: Arc<RegistryWithDefault<SharedPdfCreator>>) -> Self {
        Self { registry }
    }

    /// Registers a backend, optionally designating it as the default.
    pub fn register(
        &self,
        name: impl Into<String>,
        creator: SharedPdfCreator,
        make_default: bool,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        log::debug!("registering PDF backend '{}'", name);
        self.registry.register(name, creator, make_default)
    }

    /// Creates a document with the default backend.
    pub fn create(&self, config: &DocumentConfig) -> Result<Box<dyn PdfDocument>, PdflaxError> {
        let creator = self.registry.default_entry()?;
        Ok(creator.create(config)?)
    }

    /// Creates a document with the named backend.
    pub fn create_with(
        &self,
        name: &str,
        config: &DocumentConfig,
    ) -> Result<Box<dyn PdfDocument>, PdflaxError> {
        let creator = self.registry.get(name)?;
        Ok(creator.create(config)?)
    }

    /// The shared registry this facade resolves through.
    pub fn registry(&self) -> &Arc<RegistryWithDefault<SharedPdfCreator>> {
        &self.registry
    }
}
