//! Ordered parameter mappings.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An ordered mapping from parameter name to resolved string value.
///
/// Iteration order is insertion order, which the field mapper guarantees
/// matches the declaration order of the originating configuration
/// object. Renderers that care about human-readable diffs rely on this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter. Keys are unique within a mapping; inserting a
    /// duplicate is a descriptor-table bug, not a runtime condition.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        debug_assert!(
            self.get(&name).is_none(),
            "duplicate parameter `{name}` in mapping"
        );
        self.0.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut params = Params::new();
        params.insert("host", "gelf-host");
        params.insert("port", "12201");
        params.insert("protocol", "tcp");

        let names: Vec<&str> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["host", "port", "protocol"]);
    }

    #[test]
    fn test_get_by_name() {
        let mut params = Params::new();
        params.insert("port", "12201");

        assert_eq!(params.get("port"), Some("12201"));
        assert_eq!(params.get("host"), None);
    }

    #[test]
    fn test_serializes_in_order() {
        let mut params = Params::new();
        params.insert("b", "2");
        params.insert("a", "1");

        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }
}
