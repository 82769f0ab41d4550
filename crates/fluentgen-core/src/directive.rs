//! The compiled directive tree.

use serde::Serialize;

use crate::error::CompileResult;
use crate::params::Params;
use crate::secret::SecretLoader;

/// Identity of one plugin instance within a compiled tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginMeta {
    /// Plugin kind (the `@type` value, e.g. "gelf").
    pub kind: String,
    /// Structural keyword (e.g. "match", "buffer").
    pub directive: String,
    /// Selector tag (e.g. "**"); buffer sections carry chunk keys here.
    pub tag: Option<String>,
    /// Caller-supplied instance id, unique within a compiled tree.
    pub id: String,
}

/// One node of the compiled configuration tree: a plugin instance, its
/// resolved parameters, and its nested directives.
///
/// A directive is constructed once by a compiler call and is immutable
/// afterwards; children are owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub meta: PluginMeta,
    pub params: Params,
    pub children: Vec<Directive>,
}

impl Directive {
    pub fn new(meta: PluginMeta, params: Params) -> Self {
        Self {
            meta,
            params,
            children: Vec::new(),
        }
    }

    /// Append a nested directive, preserving compilation order.
    pub fn push_child(&mut self, child: Directive) {
        self.children.push(child);
    }
}

/// Compiles one configuration kind into a directive node.
pub trait ToDirective {
    /// Build the complete directive for this configuration, resolving
    /// secret references through `secrets` and stamping `id` into the
    /// node identity.
    ///
    /// Fail-fast: on any error no partial directive is returned.
    fn to_directive(&self, secrets: &dyn SecretLoader, id: &str) -> CompileResult<Directive>;
}
