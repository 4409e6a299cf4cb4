use crate::provider::ProviderError;
use pdflax_document::DocumentError;
use pdflax_registry::RegistryError;
use thiserror::Error;

/// Umbrella error for the integration layer.
#[derive(Error, Debug)]
pub enum PdflaxError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Service container error: {0}")]
    Provider(#[from] ProviderError),
}
