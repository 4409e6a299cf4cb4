use super::container::{ProviderError, ServiceContainer};
use super::{ServiceProvider, PDFLAX};
use crate::factory::PdflaxFactory;

/// First-generation bootstrap: one shared document factory under the
/// `pdflax` binding.
#[derive(Debug, Default)]
pub struct PdflaxServiceProvider;

impl ServiceProvider for PdflaxServiceProvider {
    fn register(&self, app: &mut ServiceContainer) -> Result<(), ProviderError> {
        app.singleton(PDFLAX, |_| Ok(PdflaxFactory::new()))
    }

    fn provides(&self) -> &[&str] {
        &[PDFLAX]
    }
}
