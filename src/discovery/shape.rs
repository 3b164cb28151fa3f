//! Shape checks over untyped package metadata.
//!
//! Manifests written by the package manager cannot tell an empty list from an
//! empty mapping, so an empty list is accepted where a mapping is expected and
//! vice versa. Anything non-empty must have exactly the expected shape.

use serde_json::{Map, Value};

/// Borrowed view of a value that has the shape of a mapping.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Section<'a> {
    Empty,
    Entries(&'a Map<String, Value>),
}

impl<'a> Section<'a> {
    pub(crate) fn get(self, key: &str) -> Option<&'a Value> {
        match self {
            Section::Empty => None,
            Section::Entries(map) => map.get(key),
        }
    }

    pub(crate) fn iter(self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        let entries = match self {
            Section::Empty => None,
            Section::Entries(map) => Some(map.iter()),
        };
        entries.into_iter().flatten()
    }
}

/// View `value` as a mapping, if it has that shape.
pub(crate) fn as_section(value: &Value) -> Option<Section<'_>> {
    match value {
        Value::Object(map) => Some(Section::Entries(map)),
        Value::Array(items) if items.is_empty() => Some(Section::Empty),
        _ => None,
    }
}

/// View `value` as an ordered sequence, if it has that shape.
pub(crate) fn as_sequence(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => Some(items.as_slice()),
        Value::Object(map) if map.is_empty() => Some(&[][..]),
        _ => None,
    }
}

/// Human-readable name of the value's type, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_sequence_is_an_empty_section() {
        let value = json!([]);
        let section = as_section(&value).unwrap();
        assert!(section.get("bundles").is_none());
        assert_eq!(section.iter().count(), 0);
    }

    #[test]
    fn test_non_empty_sequence_is_not_a_section() {
        assert!(as_section(&json!([{ "path": "/" }])).is_none());
        assert!(as_section(&json!("foo")).is_none());
        assert!(as_section(&json!(null)).is_none());
    }

    #[test]
    fn test_empty_mapping_is_an_empty_sequence() {
        assert_eq!(as_sequence(&json!({})), Some(&[][..]));
        assert!(as_sequence(&json!({ "a": "b" })).is_none());
    }

    #[test]
    fn test_kind_distinguishes_numbers() {
        assert_eq!(kind(&json!(42)), "integer");
        assert_eq!(kind(&json!(3.14159)), "float");
        assert_eq!(kind(&json!(true)), "boolean");
    }
}
