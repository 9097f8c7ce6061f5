use std::collections::HashMap;

use crate::error::PropertyReadError;

/// Read access to the properties of an in-progress authentication session.
///
/// Implemented by the host's session type. `Ok(None)` means the property was
/// never set; `Err` means the session itself could not be read.
pub trait SessionProperties: Send + Sync {
    fn get_property(&self, name: &str) -> Result<Option<String>, PropertyReadError>;
}

impl<S: SessionProperties + ?Sized> SessionProperties for &S {
    fn get_property(&self, name: &str) -> Result<Option<String>, PropertyReadError> {
        (**self).get_property(name)
    }
}

/// In-memory session used by hosts without a session store and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    properties: HashMap<String, String>,
    failing: HashMap<String, String>,
    invalidated: bool,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_property`](Self::set_property).
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.remove(name)
    }

    /// Make every subsequent read fail with [`PropertyReadError::InvalidSession`].
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Make reads of `name` fail with [`PropertyReadError::Store`].
    pub fn fail_property(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.failing.insert(name.into(), message.into());
    }

    /// Snapshot of the stored properties.
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }
}

impl SessionProperties for MemorySession {
    fn get_property(&self, name: &str) -> Result<Option<String>, PropertyReadError> {
        if self.invalidated {
            return Err(PropertyReadError::InvalidSession);
        }
        if let Some(message) = self.failing.get(name) {
            return Err(PropertyReadError::Store(message.clone()));
        }
        Ok(self.properties.get(name).cloned())
    }
}
