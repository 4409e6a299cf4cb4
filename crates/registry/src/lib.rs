//! A named-implementation lookup table with one entry designated as the
//! fallback when no name is given.
//!
//! The registry is shared process-wide (typically through a container
//! singleton), so it carries its own interior mutability and is `Send +
//! Sync` when its values are.

use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No implementation registered under '{0}'")]
    NotRegistered(String),

    #[error("An implementation is already registered under '{0}'")]
    AlreadyRegistered(String),

    #[error("No default implementation has been designated")]
    NoDefault,

    #[error("Registry lock poisoned")]
    Poisoned,
}

#[derive(Debug, Default)]
struct Inner<T> {
    entries: HashMap<String, T>,
    default_name: Option<String>,
}

/// Registry-with-default: unique keys, O(1) lookup, at most one entry
/// marked as the default.
#[derive(Debug)]
pub struct RegistryWithDefault<T> {
    inner: RwLock<Inner<T>>,
}

impl<T> Default for RegistryWithDefault<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RegistryWithDefault<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                default_name: None,
            }),
        }
    }
}

impl<T: Clone> RegistryWithDefault<T> {
    /// Registers `value` under `name`, optionally designating it as the
    /// default. Names are unique; re-registering one is an error.
    pub fn register(
        &self,
        name: impl Into<String>,
        value: T,
        make_default: bool,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut inner = self.inner.write().map_err(|_| RegistryError::Poisoned)?;
        if inner.entries.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        if make_default {
            inner.default_name = Some(name.clone());
        }
        inner.entries.insert(name, value);
        Ok(())
    }

    /// Looks up the implementation registered under `name`.
    pub fn get(&self, name: &str) -> Result<T, RegistryError> {
        let inner = self.inner.read().map_err(|_| RegistryError::Poisoned)?;
        inner
            .entries
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotRegistered(name.to_string()))
    }

    /// The implementation designated as the default.
    pub fn default_entry(&self) -> Result<T, RegistryError> {
        let inner = self.inner.read().map_err(|_| RegistryError::Poisoned)?;
        let name = inner.default_name.as_ref().ok_or(RegistryError::NoDefault)?;
        inner
            .entries
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotRegistered(name.clone()))
    }

    /// `get(name)` when a name is given, the default otherwise.
    pub fn resolve(&self, name: Option<&str>) -> Result<T, RegistryError> {
        match name {
            Some(name) => self.get(name),
            None => self.default_entry(),
        }
    }

    /// Re-designates the default. The name must already be registered.
    pub fn set_default(&self, name: &str) -> Result<(), RegistryError> {
        let mut inner = self.inner.write().map_err(|_| RegistryError::Poisoned)?;
        if !inner.entries.contains_key(name) {
            return Err(RegistryError::NotRegistered(name.to_string()));
        }
        inner.default_name = Some(name.to_string());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner
            .read()
            .map(|inner| inner.entries.contains_key(name))
            .unwrap_or(false)
    }

    /// Name of the current default, if one has been designated.
    pub fn default_name(&self) -> Option<String> {
        self.inner.read().ok()?.default_name.clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_name_is_retrievable() {
        let registry = RegistryWithDefault::new();
        registry.register("alpha", 1, false).unwrap();

        assert_eq!(registry.get("alpha").unwrap(), 1);
        assert!(registry.contains("alpha"));
    }

    #[test]
    fn test_unknown_name_errors() {
        let registry: RegistryWithDefault<i32> = RegistryWithDefault::new();
        assert_eq!(
            registry.get("missing"),
            Err(RegistryError::NotRegistered("missing".to_string()))
        );
    }

    #[test]
    fn test_default_is_returned_when_no_name_given() {
        let registry = RegistryWithDefault::new();
        registry.register("alpha", 1, false).unwrap();
        registry.register("beta", 2, true).unwrap();

        assert_eq!(registry.resolve(None).unwrap(), 2);
        assert_eq!(registry.resolve(Some("alpha")).unwrap(), 1);
        assert_eq!(registry.default_name().as_deref(), Some("beta"));
    }

    #[test]
    fn test_no_default_designated_errors() {
        let registry = RegistryWithDefault::new();
        registry.register("alpha", 1, false).unwrap();

        assert_eq!(registry.default_entry(), Err(RegistryError::NoDefault));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let registry = RegistryWithDefault::new();
        registry.register("alpha", 1, false).unwrap();

        assert_eq!(
            registry.register("alpha", 2, false),
            Err(RegistryError::AlreadyRegistered("alpha".to_string()))
        );
        // The original entry survives.
        assert_eq!(registry.get("alpha").unwrap(), 1);
    }

    #[test]
    fn test_set_default_requires_registered_name() {
        let registry = RegistryWithDefault::new();
        registry.register("alpha", 1, true).unwrap();
        registry.register("beta", 2, false).unwrap();

        registry.set_default("beta").unwrap();
        assert_eq!(registry.default_entry().unwrap(), 2);

        assert_eq!(
            registry.set_default("gamma"),
            Err(RegistryError::NotRegistered("gamma".to_string()))
        );
    }

    #[test]
    fn test_len_and_names() {
        let registry = RegistryWithDefault::new();
        assert!(registry.is_empty());

        registry.register("alpha", 1, false).unwrap();
        registry.register("beta", 2, false).unwrap();

        assert_eq!(registry.len(), 2);
        let mut names = registry.names();
        names.sort();
        assert_eq!(names, vec!["alpha", "beta"]);
    }
}
