//! Contextual key-value fields attached to log entries
//!
//! This module provides:
//! - `FieldValue`: JSON-shaped values, including nested arrays and objects
//! - `Fields`: the per-logger field set, copied on derivation

use serde::ser::{Error as SerError, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Value type for structured logging fields
///
/// Covers every shape JSON can carry. Non-finite floats (`NaN`, `±∞`) are
/// representable in the enum but fail serialization, since JSON has no
/// encoding for them.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Array(Vec<FieldValue>),
    Object(HashMap<String, FieldValue>),
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Int(i) => serializer.serialize_i64(*i),
            FieldValue::UInt(u) => serializer.serialize_u64(*u),
            FieldValue::Float(f) => {
                if f.is_finite() {
                    serializer.serialize_f64(*f)
                } else {
                    Err(S::Error::custom(format!(
                        "json: unsupported value: {}",
                        f
                    )))
                }
            }
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Array(items) => items.serialize(serializer),
            FieldValue::Object(map) => map.serialize(serializer),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Array(_) | FieldValue::Object(_) => {
                match serde_json::to_string(self) {
                    Ok(json) => write!(f, "{}", json),
                    Err(_) => write!(f, "<unserializable>"),
                }
            }
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(items: Vec<FieldValue>) -> Self {
        FieldValue::Array(items)
    }
}

impl From<HashMap<String, FieldValue>> for FieldValue {
    fn from(map: HashMap<String, FieldValue>) -> Self {
        FieldValue::Object(map)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(FieldValue::Null, Into::into)
    }
}

/// Set of contextual fields carried by a logger instance
///
/// Keys are unique; inserting an existing key overwrites its value.
/// Insertion order is irrelevant and not reflected in the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: HashMap<String, FieldValue>,
}

impl Fields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add a field, consuming and returning the set for chaining
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Insert a field in place, overwriting an existing key
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entries.insert(key.into(), value.into());
    }

    /// Merge another field set into this one
    ///
    /// Keys from `other` overwrite keys already present.
    pub fn merge(&mut self, other: Fields) {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
    }

    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all fields
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.entries.iter()
    }

    /// Format fields as key=value pairs
    pub fn format_pairs(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_pairs())
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_creation() {
        let fields = Fields::new();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_fields_with_values() {
        let fields = Fields::new()
            .with_field("user_id", 123)
            .with_field("username", "john_doe")
            .with_field("active", true);

        assert_eq!(fields.len(), 3);
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut fields = Fields::new();
        fields.insert("key", "first");
        fields.insert("key", "second");

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("key"), Some(&FieldValue::from("second")));
    }

    #[test]
    fn test_merge_overwrite_semantics() {
        let mut base = Fields::new()
            .with_field("shared", "old")
            .with_field("kept", 1);
        let incoming = Fields::new()
            .with_field("shared", "new")
            .with_field("added", 2);

        base.merge(incoming);

        assert_eq!(base.len(), 3);
        assert_eq!(base.get("shared"), Some(&FieldValue::from("new")));
        assert_eq!(base.get("kept"), Some(&FieldValue::Int(1)));
        assert_eq!(base.get("added"), Some(&FieldValue::Int(2)));
    }

    #[test]
    fn test_format_pairs() {
        let fields = Fields::new()
            .with_field("key1", "value1")
            .with_field("key2", 42);

        let formatted = fields.format_pairs();
        assert!(formatted.contains("key1=value1"));
        assert!(formatted.contains("key2=42"));
    }

    #[test]
    fn test_nested_values_serialize() {
        let nested = FieldValue::Object(
            [("inner".to_string(), FieldValue::Int(7))].into_iter().collect(),
        );
        let json = serde_json::to_string(&nested).expect("serialize nested object");
        assert_eq!(json, r#"{"inner":7}"#);

        let array = FieldValue::Array(vec![FieldValue::Bool(true), FieldValue::Null]);
        let json = serde_json::to_string(&array).expect("serialize array");
        assert_eq!(json, "[true,null]");
    }

    #[test]
    fn test_non_finite_float_fails_serialization() {
        let nan = FieldValue::Float(f64::NAN);
        assert!(serde_json::to_string(&nan).is_err());

        let inf = FieldValue::Float(f64::INFINITY);
        assert!(serde_json::to_string(&inf).is_err());

        let finite = FieldValue::Float(1.5);
        assert_eq!(serde_json::to_string(&finite).unwrap(), "1.5");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(FieldValue::from(Some("x")), FieldValue::from("x"));
        assert_eq!(FieldValue::from(None::<&str>), FieldValue::Null);
    }

    #[test]
    fn test_fields_equality() {
        let a = Fields::new().with_field("k", 1).with_field("j", "v");
        let b = Fields::new().with_field("j", "v").with_field("k", 1);
        assert_eq!(a, b);
    }
}
