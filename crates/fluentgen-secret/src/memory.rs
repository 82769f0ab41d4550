//! In-memory secret loader.

use std::collections::HashMap;

use fluentgen_core::{ResolveError, SecretLoader, SecretRef};

/// Secret loader backed by an in-memory map, keyed `name/key`.
///
/// Intended for tests and for embedding callers that already hold their
/// secrets in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySecretLoader {
    entries: HashMap<String, String>,
}

impl MemorySecretLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one secret entry.
    pub fn with_secret(
        mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.entries
            .insert(format!("{}/{}", name.into(), key.into()), value.into());
        self
    }
}

impl SecretLoader for MemorySecretLoader {
    fn load(&self, secret_ref: &SecretRef) -> Result<String, ResolveError> {
        self.entries
            .get(&secret_ref.to_string())
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(secret_ref.to_string()))
    }
}
