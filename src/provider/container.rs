use pdflax_registry::RegistryError;
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("A binding named '{0}' is already registered")]
    DuplicateBinding(String),

    #[error("No binding named '{0}'")]
    UnknownBinding(String),

    #[error("Binding '{name}' does not resolve to a {expected}")]
    BindingType { name: String, expected: &'static str },

    #[error("Container lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

type SharedService = Arc<dyn Any + Send + Sync>;
type ServiceFactory =
    Arc<dyn Fn(&ServiceContainer) -> Result<SharedService, ProviderError> + Send + Sync>;

enum Binding {
    /// Built once on first resolution, then shared.
    Singleton(ServiceFactory),
    /// Built fresh on every resolution.
    Transient(ServiceFactory),
}

/// A minimal service container: named bindings registered up front,
/// resolved by name and type. Singleton instances are cached; transient
/// bindings yield a new instance per [`ServiceContainer::make`] call.
#[derive(Default)]
pub struct ServiceContainer {
    bindings: HashMap<String, Binding>,
    instances: RwLock<HashMap<String, SharedService>>,
}

impl ServiceContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a shared (singleton) binding. Duplicate names are
    /// rejected.
    pub fn singleton<T, F>(&mut self, name: &str, factory: F) -> Result<(), ProviderError>
    where
        T: Any + Send + Sync,
        F: Fn(&ServiceContainer) -> Result<T, ProviderError> + Send + Sync + 'static,
    {
        self.insert(name, Binding::Singleton(Self::wrap(factory)))
    }

    /// Registers a transient binding. Duplicate names are rejected.
    pub fn bind<T, F>(&mut self, name: &str, factory: F) -> Result<(), ProviderError>
    where
        T: Any + Send + Sync,
        F: Fn(&ServiceContainer) -> Result<T, ProviderError> + Send + Sync + 'static,
    {
        self.insert(name, Binding::Transient(Self::wrap(factory)))
    }

    /// Resolves the binding registered under `name` as a `T`.
    pub fn make<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>, ProviderError> {
        let binding = self
            .bindings
            .get(name)
            .ok_or_else(|| ProviderError::UnknownBinding(name.to_string()))?;

        let service = match binding {
            Binding::Transient(factory) => factory(self)?,
            Binding::Singleton(factory) => {
                let cached = {
                    let instances =
                        self.instances.read().map_err(|_| ProviderError::Poisoned)?;
                    instances.get(name).cloned()
                };
                match cached {
                    Some(service) => service,
                    // Built without holding the lock: the factory may
                    // resolve other bindings through this container.
                    None => {
                        let service = factory(self)?;
                        let mut instances =
                            self.instances.write().map_err(|_| ProviderError::Poisoned)?;
                        instances
                            .entry(name.to_string())
                            .or_insert(service)
                            .clone()
                    }
                }
            }
        };

        service
            .downcast::<T>()
            .map_err(|_| ProviderError::BindingType {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// All registered binding names.
    pub fn binding_names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    fn insert(&mut self, name: &str, binding: Binding) -> Result<(), ProviderError> {
        if self.bindings.contains_key(name) {
            return Err(ProviderError::DuplicateBinding(name.to_string()));
        }
        self.bindings.insert(name.to_string(), binding);
        Ok(())
    }

    fn wrap<T, F>(factory: F) -> ServiceFactory
    where
        T: Any + Send + Sync,
        F: Fn(&ServiceContainer) -> Result<T, ProviderError> + Send + Sync + 'static,
    {
        Arc::new(move |container| Ok(Arc::new(factory(container)?) as SharedService))
    }
}
