//! Buffering policy configuration.

use fluentgen_core::{
    CompileResult, Directive, Field, FieldValue, PluginMeta, SecretLoader, ToDirective, map_fields,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Buffering policy for an output directive.
///
/// Every compiled output tree carries exactly one buffer section; an
/// omitted policy compiles as this type's zero value, with the buffer
/// kind, chunk keys, and chunk path filled in by the compiler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Buffer plugin kind (default: "file").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Chunk keys of the buffer section (default: "tag,time").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Chunk file path (default: "/buffers/{id}.*.buffer").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_thread_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_limit_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_limit_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_forever: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_max_interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timekey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timekey_wait: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow_action: Option<String>,
}

impl ToDirective for BufferConfig {
    fn to_directive(&self, secrets: &dyn SecretLoader, id: &str) -> CompileResult<Directive> {
        let meta = PluginMeta {
            kind: self.kind.clone().unwrap_or_else(|| "file".to_string()),
            directive: "buffer".to_string(),
            tag: Some(self.tag.clone().unwrap_or_else(|| "tag,time".to_string())),
            id: id.to_string(),
        };

        // `type` and `tag` shape the section identity, never the params.
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| format!("/buffers/{id}.*.buffer"));
        let fields = vec![
            Field::new("path", FieldValue::Str(path)),
            Field::new("flush_mode", FieldValue::opt_str(self.flush_mode.as_ref())),
            Field::new(
                "flush_interval",
                FieldValue::opt_str(self.flush_interval.as_ref()),
            ),
            Field::new(
                "flush_thread_count",
                FieldValue::opt_int(self.flush_thread_count),
            ),
            Field::new(
                "chunk_limit_size",
                FieldValue::opt_str(self.chunk_limit_size.as_ref()),
            ),
            Field::new(
                "queue_limit_length",
                FieldValue::opt_int(self.queue_limit_length),
            ),
            Field::new("retry_forever", FieldValue::opt_bool(self.retry_forever)),
            Field::new(
                "retry_max_interval",
                FieldValue::opt_int(self.retry_max_interval),
            ),
            Field::new("timekey", FieldValue::opt_str(self.timekey.as_ref())),
            Field::new(
                "timekey_wait",
                FieldValue::opt_str(self.timekey_wait.as_ref()),
            ),
            Field::new(
                "overflow_action",
                FieldValue::opt_str(self.overflow_action.as_ref()),
            ),
        ];
        let params = map_fields(fields, secrets)?;

        debug!(kind = %meta.kind, id = %id, "compiled buffer section");
        Ok(Directive::new(meta, params))
    }
}
