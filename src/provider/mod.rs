//! Service-provider glue.
//!
//! [`ServiceContainer`] is the minimal named-binding seam the providers
//! bind into; [`ServiceProvider`] is the two-phase bootstrap contract
//! (`register` declares bindings, `boot` runs once everything is bound).
//! Two provider generations ship with the crate:
//!
//! - [`PdflaxServiceProvider`] binds a plain document factory under
//!   [`PDFLAX`],
//! - [`PdflaxRegistryServiceProvider`] binds the backend registry under
//!   [`PDFLAX_REGISTRY`] plus a creator facade under [`PDFLAX`], and boots
//!   the lopdf backend in as the default.

mod container;
mod factory;
mod registry;

pub use container::{ProviderError, ServiceContainer};
pub use factory::PdflaxServiceProvider;
pub use registry::PdflaxRegistryServiceProvider;

/// Binding name of the document factory / creator facade.
pub const PDFLAX: &str = "pdflax";

/// Binding name of the shared backend registry.
pub const PDFLAX_REGISTRY: &str = "pdflax-registry";

/// A two-phase service bootstrap: `register` installs bindings into the
/// container, `boot` runs after every provider has registered.
pub trait ServiceProvider {
    fn register(&self, app: &mut ServiceContainer) -> Result<(), ProviderError>;

    fn boot(&self, app: &ServiceContainer) -> Result<(), ProviderError> {
        let _ = app;
        Ok(())
    }

    /// The binding names this provider installs.
    fn provides(&self) -> &[&str];

    /// Whether resolution of the provided bindings may be deferred until
    /// first use.
    fn deferred(&self) -> bool {
        true
    }
}
