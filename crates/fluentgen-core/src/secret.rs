//! Secret references and the resolver boundary.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Points at one entry of a named secret in a secret store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{name}/{key}")]
pub struct SecretRef {
    /// Secret name (e.g. a Kubernetes Secret object name).
    pub name: String,
    /// Entry key within the secret.
    pub key: String,
}

impl SecretRef {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

/// A configuration value that is either an inline literal or a reference
/// into a secret store.
///
/// Deserializes untagged: a bare string is a literal, a `{name, key}`
/// map is a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecretValue {
    Literal(String),
    Reference(SecretRef),
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        SecretValue::Literal(value.to_string())
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        SecretValue::Literal(value)
    }
}

impl From<SecretRef> for SecretValue {
    fn from(secret_ref: SecretRef) -> Self {
        SecretValue::Reference(secret_ref)
    }
}

/// Trait for secret resolution backends.
///
/// Implementations must be safe for concurrent use: independent plugin
/// trees are compiled in parallel against a shared loader.
pub trait SecretLoader: Send + Sync {
    /// Look up the literal value behind a reference.
    fn load(&self, secret_ref: &SecretRef) -> Result<String, ResolveError>;

    /// Resolve a value to its inline literal form.
    ///
    /// Literals pass through unchanged; references dispatch to
    /// [`SecretLoader::load`]. An unresolvable reference is an error,
    /// never an empty or placeholder string.
    fn resolve(&self, value: &SecretValue) -> Result<String, ResolveError> {
        match value {
            SecretValue::Literal(s) => Ok(s.clone()),
            SecretValue::Reference(secret_ref) => self.load(secret_ref),
        }
    }
}
