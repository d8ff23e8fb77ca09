//! Log entry assembly and JSON serialization

use super::error::Result;
use super::fields::Fields;
use super::log_level::LogLevel;
use serde_json::{Map, Value};

/// One log entry, assembled at emission time and serialized immediately
///
/// Entries are not retained: the logger builds one, turns it into a JSON
/// line, writes it, and drops it.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub time: String,
    pub fields: Fields,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String, time: String, fields: Fields) -> Self {
        Self {
            level,
            message,
            time,
            fields,
        }
    }

    /// Serialize the entry as a single-line JSON object
    ///
    /// The reserved keys `level`, `message`, and `time` are written first,
    /// then every contextual field is overlaid. A field that happens to use
    /// a reserved key overwrites it; last write wins, no collision check.
    pub fn to_json(&self) -> Result<String> {
        let mut object = Map::with_capacity(3 + self.fields.len());
        object.insert(
            "level".to_string(),
            Value::String(self.level.to_str().to_string()),
        );
        object.insert("message".to_string(), Value::String(self.message.clone()));
        object.insert("time".to_string(), Value::String(self.time.clone()));

        for (key, value) in self.fields.iter() {
            object.insert(key.clone(), serde_json::to_value(value)?);
        }

        Ok(serde_json::to_string(&Value::Object(object))?)
    }
}

/// Build the fixed fallback line emitted when entry serialization fails
///
/// Hand-assembled text rather than output of the general serializer, so it
/// cannot itself fail to serialize. The whitespace convention intentionally
/// differs from the normal path; only the key set and values matter.
pub fn fallback_line(error_text: &str, time: &str) -> String {
    format!(
        r#"{{"level": "ERROR","message": "Failed to marshal log entry","error": "{}","time": "{}"}}"#,
        escape_json_text(error_text),
        escape_json_text(time)
    )
}

/// Minimal JSON string escaping for the fallback line
fn escape_json_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fields::FieldValue;

    fn entry_with_fields(fields: Fields) -> LogEntry {
        LogEntry::new(
            LogLevel::Info,
            "hello".to_string(),
            "2024-01-02 15:04:05".to_string(),
            fields,
        )
    }

    #[test]
    fn test_entry_serializes_reserved_keys() {
        let json = entry_with_fields(Fields::new()).to_json().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["message"], "hello");
        assert_eq!(parsed["time"], "2024-01-02 15:04:05");
        assert_eq!(parsed.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_entry_includes_fields() {
        let fields = Fields::new()
            .with_field("req_id", "abc123")
            .with_field("attempt", 2);
        let json = entry_with_fields(fields).to_json().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["req_id"], "abc123");
        assert_eq!(parsed["attempt"], 2);
        assert_eq!(parsed.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_fields_overwrite_reserved_keys() {
        let fields = Fields::new().with_field("level", "overridden");
        let json = entry_with_fields(fields).to_json().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["level"], "overridden");
    }

    #[test]
    fn test_non_serializable_field_errors() {
        let fields = Fields::new().with_field("broken", f64::NAN);
        assert!(entry_with_fields(fields).to_json().is_err());
    }

    #[test]
    fn test_message_with_newline_stays_single_line() {
        let entry = LogEntry::new(
            LogLevel::Warn,
            "line one\nline two".to_string(),
            "t".to_string(),
            Fields::new(),
        );
        let json = entry.to_json().unwrap();
        assert!(!json.contains('\n'));

        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["message"], "line one\nline two");
    }

    #[test]
    fn test_fallback_line_shape() {
        let line = fallback_line("json: unsupported value: NaN", "2024-01-02 15:04:05");
        let parsed: Value = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["message"], "Failed to marshal log entry");
        assert_eq!(parsed["error"], "json: unsupported value: NaN");
        assert_eq!(parsed["time"], "2024-01-02 15:04:05");
    }

    #[test]
    fn test_fallback_line_escapes_error_text() {
        let line = fallback_line("quote \" and backslash \\", "t");
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["error"], "quote \" and backslash \\");
    }

    #[test]
    fn test_null_field_roundtrip() {
        let fields = Fields::new().with_field("maybe", FieldValue::Null);
        let json = entry_with_fields(fields).to_json().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["maybe"].is_null());
    }
}
