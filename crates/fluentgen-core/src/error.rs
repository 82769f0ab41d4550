//! Compilation and secret-resolution errors.

use thiserror::Error;

/// Failure to turn a secret reference into its literal value.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("secret `{0}` not found")]
    NotFound(String),

    #[error("malformed secret reference: {0}")]
    Malformed(String),

    #[error("secret backend error: {0}")]
    Backend(String),
}

/// Failure while compiling a configuration object into a directive.
///
/// All variants are fail-fast: the compiler never retries and never
/// returns a partial directive tree.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to resolve secret for field `{field}`: {source}")]
    SecretResolution {
        field: String,
        #[source]
        source: ResolveError,
    },

    #[error("cannot map field `{field}`: {message}")]
    Mapping { field: String, message: String },

    #[error("failed to compile nested `{kind}` configuration: {source}")]
    Nested {
        kind: String,
        #[source]
        source: Box<CompileError>,
    },
}

impl CompileError {
    /// Wrap a failure from compiling a nested configuration kind.
    pub fn nested(kind: impl Into<String>, source: CompileError) -> Self {
        CompileError::Nested {
            kind: kind.into(),
            source: Box::new(source),
        }
    }
}

pub type CompileResult<T> = std::result::Result<T, CompileError>;
