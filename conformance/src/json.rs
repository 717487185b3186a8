//! OSLC JSON rendering helpers.
//!
//! OSLC 2.0 servers may render resources as JSON objects keyed by prefixed
//! names (`"dcterms:title"`, `"oslc:serviceProvider"`) with links written as
//! `{"rdf:resource": "..."}` objects.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while parsing JSON.
#[derive(Debug, Error)]
#[error("malformed JSON: {0}")]
pub struct JsonError(#[from] serde_json::Error);

/// A parsed OSLC JSON document.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    root: Value,
}

impl JsonDocument {
    /// Parses a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError`] if the body is not valid JSON.
    pub fn parse(body: &str) -> Result<Self, JsonError> {
        Ok(Self {
            root: serde_json::from_str(body)?,
        })
    }

    /// The root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Every value stored under `key` anywhere in the document. Arrays are
    /// flattened, so a single link and a list of links read the same way.
    pub fn values(&self, key: &str) -> Vec<&Value> {
        let mut found = Vec::new();
        collect(&self.root, key, &mut found);
        found
    }

    /// Number of values stored under `key`.
    pub fn count(&self, key: &str) -> usize {
        self.values(key).len()
    }

    /// URLs of the resources linked under `key`: `rdf:resource` or
    /// `rdf:about` members of object values, or bare strings.
    pub fn resource_urls(&self, key: &str) -> Vec<String> {
        self.values(key)
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Object(map) => map
                    .get("rdf:resource")
                    .or_else(|| map.get("rdf:about"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            })
            .collect()
    }

    /// The top-level `rdf:about`, if present.
    pub fn about(&self) -> Option<&str> {
        self.root.get("rdf:about").and_then(Value::as_str)
    }
}

fn collect<'v>(value: &'v Value, key: &str, found: &mut Vec<&'v Value>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                if k == key {
                    match v {
                        Value::Array(items) => found.extend(items.iter()),
                        other => found.push(other),
                    }
                }
                collect(v, key, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, key, found);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[test]
    fn extracts_service_provider_links() {
        let doc = JsonDocument::parse(fixtures::CATALOG_JSON).expect("parses");
        assert_eq!(doc.about(), Some(fixtures::CATALOG_URL));
        assert_eq!(doc.count("oslc:serviceProvider"), 2);
        assert_eq!(
            doc.resource_urls("oslc:serviceProvider"),
            vec![
                fixtures::SERVICE_PROVIDER_URL.to_string(),
                fixtures::SECOND_PROVIDER_URL.to_string(),
            ]
        );
    }

    #[test]
    fn single_values_and_nested_keys_are_found() {
        let doc = JsonDocument::parse(
            r#"{"dcterms:title": "x", "oslc:service": {"oslc:domain": {"rdf:resource": "d"}}}"#,
        )
        .expect("parses");
        assert_eq!(doc.count("dcterms:title"), 1);
        assert_eq!(doc.resource_urls("oslc:domain"), vec!["d".to_string()]);
        assert_eq!(doc.count("oslc:missing"), 0);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(JsonDocument::parse("{").is_err());
    }
}
