use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindingsError {
    #[error("binding keys must not be empty")]
    EmptyKey,
    #[error("no binding registered for key {0:?}")]
    Missing(String),
    #[error("binding {0:?} holds a different type than requested")]
    TypeMismatch(String),
}

/// Side table for passing arbitrary host objects to modes. Owned
/// explicitly by the host and handed to whichever component needs it; no
/// ambient global state.
#[derive(Default)]
pub struct Bindings {
    values: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a non-empty key, replacing any previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Box<dyn Any + Send + Sync>,
    ) -> Result<(), BindingsError> {
        let key = key.into();
        if key.is_empty() {
            return Err(BindingsError::EmptyKey);
        }
        self.values.insert(key, value);
        Ok(())
    }

    /// Fetch a binding by key, downcast to the requested type.
    pub fn get<T: Any>(&self, key: &str) -> Result<&T, BindingsError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| BindingsError::Missing(key.to_string()))?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| BindingsError::TypeMismatch(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bindings")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}
