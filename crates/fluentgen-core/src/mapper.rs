//! Field descriptors and the field mapper.
//!
//! Each configuration kind describes its fields as a static table in
//! declaration order. The mapper walks that table and produces the
//! ordered parameter mapping, applying optionality, secret-resolution,
//! and flattening rules. Nested configuration objects never appear
//! here; the per-kind compiler turns those into child directives.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CompileError, CompileResult};
use crate::params::Params;
use crate::secret::{SecretLoader, SecretValue};

/// One field of a configuration object.
#[derive(Debug, Clone)]
pub struct Field {
    /// Parameter name to emit under.
    pub name: &'static str,
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: &'static str, value: FieldValue) -> Self {
        Self { name, value }
    }
}

/// The value a field contributes to the parameter mapping.
///
/// `Absent` is distinct from every zero value: an absent field emits no
/// parameter at all.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Absent,
    Str(String),
    Int(i64),
    Bool(bool),
    /// A value that may be a secret reference; passes through the loader.
    Secret(SecretValue),
    /// Auxiliary options mapping. Each entry emits one parameter named
    /// `{field}.{key}`, and each value passes through the loader.
    SecretMap(BTreeMap<String, SecretValue>),
}

impl FieldValue {
    pub fn opt_str(value: Option<&String>) -> Self {
        value.map_or(FieldValue::Absent, |v| FieldValue::Str(v.clone()))
    }

    pub fn opt_int(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Int)
    }

    pub fn opt_bool(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Bool)
    }

    pub fn opt_map(value: Option<&BTreeMap<String, SecretValue>>) -> Self {
        value.map_or(FieldValue::Absent, |m| FieldValue::SecretMap(m.clone()))
    }
}

/// Walk `fields` in declaration order and build the parameter mapping.
///
/// All-or-nothing: the first failure aborts the whole mapping and no
/// partial result escapes.
pub fn map_fields(fields: Vec<Field>, secrets: &dyn SecretLoader) -> CompileResult<Params> {
    let mut params = Params::new();
    for field in fields {
        match field.value {
            FieldValue::Absent => {}
            FieldValue::Str(v) => params.insert(field.name, v),
            FieldValue::Int(v) => params.insert(field.name, v.to_string()),
            FieldValue::Bool(v) => params.insert(field.name, v.to_string()),
            FieldValue::Secret(value) => {
                let resolved = secrets.resolve(&value).map_err(|source| {
                    CompileError::SecretResolution {
                        field: field.name.to_string(),
                        source,
                    }
                })?;
                params.insert(field.name, resolved);
            }
            FieldValue::SecretMap(entries) => {
                for (key, value) in entries {
                    if key.is_empty() {
                        return Err(CompileError::Mapping {
                            field: field.name.to_string(),
                            message: "option key must not be empty".to_string(),
                        });
                    }
                    let name = format!("{}.{}", field.name, key);
                    let resolved = secrets.resolve(&value).map_err(|source| {
                        CompileError::SecretResolution {
                            field: name.clone(),
                            source,
                        }
                    })?;
                    params.insert(name, resolved);
                }
            }
        }
    }
    debug!(count = params.len(), "mapped configuration fields");
    Ok(params)
}
