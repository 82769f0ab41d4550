//! Environment-variable secret loader.

use fluentgen_core::{ResolveError, SecretLoader, SecretRef};
use tracing::debug;

/// Resolves secret references from process environment variables.
///
/// A reference `name/key` maps to the variable `{prefix}NAME_KEY`:
/// upper-cased, with every character outside `[A-Za-z0-9]` replaced by
/// an underscore. A reference to `gelf-tls/ca.pem` with prefix
/// `SECRET_` reads `SECRET_GELF_TLS_CA_PEM`.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretLoader {
    prefix: String,
}

impl EnvSecretLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn var_name(&self, secret_ref: &SecretRef) -> String {
        let sanitize = |s: &str| {
            s.chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() {
                        c.to_ascii_uppercase()
                    } else {
                        '_'
                    }
                })
                .collect::<String>()
        };
        format!(
            "{}{}_{}",
            self.prefix,
            sanitize(&secret_ref.name),
            sanitize(&secret_ref.key)
        )
    }
}

impl SecretLoader for EnvSecretLoader {
    fn load(&self, secret_ref: &SecretRef) -> Result<String, ResolveError> {
        let var = self.var_name(secret_ref);
        debug!(var = %var, "looking up secret in environment");
        std::env::var(&var).map_err(|_| ResolveError::NotFound(secret_ref.to_string()))
    }
}
