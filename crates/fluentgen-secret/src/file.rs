//! Mounted-file secret loader.

use std::path::PathBuf;

use fluentgen_core::{ResolveError, SecretLoader, SecretRef};
use tracing::debug;

/// Resolves secret references from files laid out as
/// `{root}/{name}/{key}`, the layout a Kubernetes secret volume mounts.
///
/// One trailing newline is trimmed from file contents, since secrets
/// written by shell tooling commonly carry one.
#[derive(Debug, Clone)]
pub struct FileSecretLoader {
    root: PathBuf,
}

impl FileSecretLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, secret_ref: &SecretRef) -> Result<PathBuf, ResolveError> {
        // Reference components are plain names, never path fragments.
        for part in [secret_ref.name.as_str(), secret_ref.key.as_str()] {
            if part.is_empty() || part == ".." || part.contains('/') || part.contains('\\') {
                return Err(ResolveError::Malformed(secret_ref.to_string()));
            }
        }
        Ok(self.root.join(&secret_ref.name).join(&secret_ref.key))
    }
}

impl SecretLoader for FileSecretLoader {
    fn load(&self, secret_ref: &SecretRef) -> Result<String, ResolveError> {
        let path = self.path_for(secret_ref)?;
        debug!(path = %path.display(), "reading mounted secret");
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(contents
                .strip_suffix('\n')
                .unwrap_or(&contents)
                .to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ResolveError::NotFound(secret_ref.to_string()))
            }
            Err(e) => Err(ResolveError::Backend(e.to_string())),
        }
    }
}
