use super::container::{ProviderError, ServiceContainer};
use super::{ServiceProvider, PDFLAX, PDFLAX_REGISTRY};
use crate::creator::{PdfCreatorRegistry, SharedPdfCreator};
use pdflax_registry::RegistryWithDefault;
use pdflax_render_lopdf::LopdfCreator;
use std::sync::Arc;

/// Second-generation bootstrap: a process-wide registry of named PDF
/// backends under `pdflax-registry`, and a creator facade under `pdflax`
/// that resolves through it. Booting registers the bundled lopdf backend
/// as the default implementation.
#[derive(Debug, Default)]
pub struct PdflaxRegistryServiceProvider;

impl ServiceProvider for PdflaxRegistryServiceProvider {
    fn register(&self, app: &mut ServiceContainer) -> Result<(), ProviderError> {
        // One registry shared by every facade.
        app.singleton(PDFLAX_REGISTRY, |_| {
            Ok(RegistryWithDefault::<SharedPdfCreator>::new())
        })?;

        app.bind(PDFLAX, |app| {
            let registry = app.make::<RegistryWithDefault<SharedPdfCreator>>(PDFLAX_REGISTRY)?;
            Ok(PdfCreatorRegistry::new(registry))
        })
    }

    fn boot(&self, app: &ServiceContainer) -> Result<(), ProviderError> {
        // The lopdf backend ships with this crate and is the default.
        let registry = app.make::<RegistryWithDefault<SharedPdfCreator>>(PDFLAX_REGISTRY)?;
        registry.register("lopdf", Arc::new(LopdfCreator) as SharedPdfCreator, true)?;
        log::debug!("registered lopdf as the default PDF backend");
        Ok(())
    }

    fn provides(&self) -> &[&str] {
        &[PDFLAX_REGISTRY, PDFLAX]
    }
}
