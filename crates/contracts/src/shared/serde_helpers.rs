//! Lenient deserializers for backend payloads.
//!
//! Several endpoints disagree on scalar types (ids and prices arrive either as
//! strings or as numbers) and on how file lists are encoded (a JSON array, or
//! a JSON array serialized into a string column). These helpers normalize all
//! of those shapes at the edge so the rest of the client sees one type.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// String or number, required.
pub fn string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value).unwrap_or_default())
}

/// String, number or null.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(scalar_to_string)
        .filter(|s| !s.trim().is_empty()))
}

/// Array of strings, array of `{ url }` objects, a JSON-encoded array inside a
/// string, or null.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(flatten_list).unwrap_or_default())
}

fn flatten_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(mut map) => map.remove("url").and_then(scalar_to_string),
                other => scalar_to_string(other),
            })
            .collect(),
        Value::String(s) if s.trim_start().starts_with('[') => serde_json::from_str::<Value>(&s)
            .map(flatten_list)
            .unwrap_or_default(),
        Value::String(s) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "string_id")]
        id: String,
        #[serde(default, deserialize_with = "opt_string")]
        price: Option<String>,
        #[serde(default, deserialize_with = "string_list")]
        docs: Vec<String>,
    }

    #[test]
    fn numeric_scalars_become_strings() {
        let p: Probe = serde_json::from_str(r#"{"id": 42, "price": 19.5}"#).unwrap();
        assert_eq!(p.id, "42");
        assert_eq!(p.price.as_deref(), Some("19.5"));
        assert!(p.docs.is_empty());
    }

    #[test]
    fn blank_optional_strings_are_none() {
        let p: Probe = serde_json::from_str(r#"{"id": "a", "price": "  ", "docs": null}"#).unwrap();
        assert_eq!(p.price, None);
        assert!(p.docs.is_empty());
    }

    #[test]
    fn docs_encoded_as_json_string_are_unpacked() {
        let p: Probe =
            serde_json::from_str(r#"{"id": "a", "docs": "[\"https://x/1.png\",\"https://x/2.png\"]"}"#)
                .unwrap();
        assert_eq!(p.docs, vec!["https://x/1.png", "https://x/2.png"]);
    }

    #[test]
    fn docs_as_url_objects_are_flattened() {
        let p: Probe =
            serde_json::from_str(r#"{"id": "a", "docs": [{"url": "u1"}, {"name": "no-url"}, "u2"]}"#)
                .unwrap();
        assert_eq!(p.docs, vec!["u1", "u2"]);
    }

    #[test]
    fn malformed_encoded_docs_yield_empty_list() {
        let p: Probe = serde_json::from_str(r#"{"id": "a", "docs": "[not json"}"#).unwrap();
        assert!(p.docs.is_empty());
    }
}
