//! GELF output plugin configuration.
//!
//! Compiles to a `<match **>` directive writing events to a Graylog
//! endpoint, always carrying exactly one nested buffer section.

use std::collections::BTreeMap;

use fluentgen_core::{
    CompileError, CompileResult, Directive, Field, FieldValue, PluginMeta, SecretLoader,
    SecretValue, ToDirective, map_fields,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::BufferConfig;

/// Configuration for the GELF output plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GelfOutputConfig {
    /// Destination host.
    pub host: String,
    /// Destination host port.
    pub port: u16,
    /// Transport protocol (default: "udp").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Enable TLS (default: false).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    /// TLS transport options; values may reference secrets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_options: Option<BTreeMap<String, SecretValue>>,
    /// Buffering policy, compiled as a nested section. Omitting it still
    /// produces a buffer section with defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<BufferConfig>,
}

impl GelfOutputConfig {
    /// Field descriptors in declaration order. The nested buffer is not
    /// a field: it compiles into a child directive.
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("host", FieldValue::Str(self.host.clone())),
            Field::new("port", FieldValue::Int(i64::from(self.port))),
            Field::new("protocol", FieldValue::opt_str(self.protocol.as_ref())),
            Field::new("tls", FieldValue::opt_bool(self.tls)),
            Field::new(
                "tls_options",
                FieldValue::opt_map(self.tls_options.as_ref()),
            ),
        ]
    }
}

impl ToDirective for GelfOutputConfig {
    fn to_directive(&self, secrets: &dyn SecretLoader, id: &str) -> CompileResult<Directive> {
        let meta = PluginMeta {
            kind: "gelf".to_string(),
            directive: "match".to_string(),
            tag: Some("**".to_string()),
            id: id.to_string(),
        };
        let params = map_fields(self.fields(), secrets)?;
        let mut directive = Directive::new(meta, params);

        // An omitted buffering policy still compiles: every gelf tree
        // carries exactly one buffer section.
        let buffer = self.buffer.clone().unwrap_or_default();
        let child = buffer
            .to_directive(secrets, id)
            .map_err(|source| CompileError::nested("buffer", source))?;
        directive.push_child(child);

        debug!(kind = "gelf", id = %id, "compiled output directive");
        Ok(directive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluentgen_core::SecretRef;
    use fluentgen_secret::MemorySecretLoader;

    fn minimal() -> GelfOutputConfig {
        GelfOutputConfig {
            host: "gelf-host".to_string(),
            port: 12201,
            protocol: None,
            tls: None,
            tls_options: None,
            buffer: None,
        }
    }

    #[test]
    fn test_minimal_config_maps_required_fields_in_order() {
        let directive = minimal()
            .to_directive(&MemorySecretLoader::new(), "test_gelf")
            .unwrap();

        assert_eq!(directive.meta.kind, "gelf");
        assert_eq!(directive.meta.directive, "match");
        assert_eq!(directive.meta.tag.as_deref(), Some("**"));
        assert_eq!(directive.meta.id, "test_gelf");

        let entries: Vec<(&str, &str)> = directive.params.iter().collect();
        assert_eq!(entries, vec![("host", "gelf-host"), ("port", "12201")]);
    }

    #[test]
    fn test_omitted_buffer_still_compiles_exactly_one_child() {
        let directive = minimal()
            .to_directive(&MemorySecretLoader::new(), "test_gelf")
            .unwrap();

        assert_eq!(directive.children.len(), 1);
        let buffer = &directive.children[0];
        assert_eq!(buffer.meta.kind, "file");
        assert_eq!(buffer.meta.directive, "buffer");
        assert_eq!(
            buffer.params.get("path"),
            Some("/buffers/test_gelf.*.buffer")
        );
    }

    #[test]
    fn test_supplied_buffer_compiles_exactly_one_child() {
        let config = GelfOutputConfig {
            buffer: Some(BufferConfig {
                flush_interval: Some("5s".to_string()),
                ..Default::default()
            }),
            ..minimal()
        };
        let directive = config
            .to_directive(&MemorySecretLoader::new(), "test_gelf")
            .unwrap();

        assert_eq!(directive.children.len(), 1);
        assert_eq!(directive.children[0].params.get("flush_interval"), Some("5s"));
    }

    #[test]
    fn test_optional_scalars_emit_when_present() {
        let config = GelfOutputConfig {
            protocol: Some("tcp".to_string()),
            tls: Some(true),
            ..minimal()
        };
        let directive = config
            .to_directive(&MemorySecretLoader::new(), "test_gelf")
            .unwrap();

        let names: Vec<&str> = directive.params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["host", "port", "protocol", "tls"]);
        assert_eq!(directive.params.get("tls"), Some("true"));
    }

    #[test]
    fn test_tls_option_secret_resolves_to_literal() {
        let loader =
            MemorySecretLoader::new().with_secret("gelf-tls", "ca", "/etc/certs/ca.pem");
        let mut tls_options = BTreeMap::new();
        tls_options.insert(
            "ca_file".to_string(),
            SecretValue::Reference(SecretRef::new("gelf-tls", "ca")),
        );
        let config = GelfOutputConfig {
            tls: Some(true),
            tls_options: Some(tls_options),
            ..minimal()
        };
        let directive = config.to_directive(&loader, "test_gelf").unwrap();

        assert_eq!(
            directive.params.get("tls_options.ca_file"),
            Some("/etc/certs/ca.pem")
        );
    }

    #[test]
    fn test_unresolvable_secret_fails_the_whole_compile() {
        let mut tls_options = BTreeMap::new();
        tls_options.insert(
            "ca_file".to_string(),
            SecretValue::Reference(SecretRef::new("missing", "ca")),
        );
        let config = GelfOutputConfig {
            tls_options: Some(tls_options),
            ..minimal()
        };
        let err = config
            .to_directive(&MemorySecretLoader::new(), "test_gelf")
            .unwrap_err();

        match err {
            CompileError::SecretResolution { field, .. } => {
                assert_eq!(field, "tls_options.ca_file");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_compiles_are_identical() {
        let loader =
            MemorySecretLoader::new().with_secret("gelf-tls", "ca", "/etc/certs/ca.pem");
        let mut tls_options = BTreeMap::new();
        tls_options.insert(
            "ca_file".to_string(),
            SecretValue::Reference(SecretRef::new("gelf-tls", "ca")),
        );
        let config = GelfOutputConfig {
            tls_options: Some(tls_options),
            ..minimal()
        };

        let first = config.to_directive(&loader, "test_gelf").unwrap();
        let second = config.to_directive(&loader, "test_gelf").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_deserializes_documented_yaml_example() {
        let yaml = r#"
host: gelf-host
port: 12201
buffer:
  flush_thread_count: 8
  flush_interval: 5s
  chunk_limit_size: 8M
  queue_limit_length: 512
  retry_max_interval: 30
  retry_forever: true
"#;
        let config: GelfOutputConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.host, "gelf-host");
        assert_eq!(config.port, 12201);

        let buffer = config.buffer.as_ref().unwrap();
        assert_eq!(buffer.flush_thread_count, Some(8));
        assert_eq!(buffer.chunk_limit_size.as_deref(), Some("8M"));
        assert_eq!(buffer.retry_forever, Some(true));
    }
}
