//! Hook input from Claude Code (stdin JSON)
//!
//! Claude Code pipes one JSON object to `Notification` hooks:
//! - `session_id`: Unique session identifier
//! - `transcript_path`: Path to .jsonl conversation file
//! - `message`: Text Claude Code wants to surface
//! - `title`: Optional heading (defaults to "Claude Code")
//!
//! Only syntax is validated. Absent or `null` string fields become empty
//! strings so a partial payload still produces a notification.

use crate::errors::HookResult;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Title used when the payload does not carry one
pub const DEFAULT_TITLE: &str = "Claude Code";

/// Parsed notification request, built once from stdin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub session_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transcript_path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default = "default_title", deserialize_with = "null_as_default_title")]
    pub title: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_default_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|t| t.unwrap_or_else(default_title))
}

impl NotificationRequest {
    /// Parse a request from raw bytes
    ///
    /// Invalid UTF-8, empty input, malformed JSON and non-object values all
    /// surface as `HookError::Parse`.
    pub fn from_slice(bytes: &[u8]) -> HookResult<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            let err: serde_json::Error = serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            ));
            return Err(err.into());
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Read the whole stream and parse it as a notification request
pub fn read_request<R: Read>(mut reader: R) -> HookResult<NotificationRequest> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    tracing::debug!(input_len = buffer.len(), "Read hook input");
    NotificationRequest::from_slice(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HookError;
    use std::io::Cursor;

    #[test]
    fn test_parse_valid_input() {
        let input = r#"{
            "session_id": "test-session-123",
            "transcript_path": "/path/to/transcript.md",
            "message": "Test notification message",
            "title": "Test Title"
        }"#;

        let request = read_request(Cursor::new(input)).unwrap();
        assert_eq!(request.session_id, "test-session-123");
        assert_eq!(request.transcript_path, "/path/to/transcript.md");
        assert_eq!(request.message, "Test notification message");
        assert_eq!(request.title, "Test Title");
    }

    #[test]
    fn test_missing_title_defaults() {
        let input = r#"{"session_id":"s","transcript_path":"/t.md","message":"Hi"}"#;
        let request = read_request(Cursor::new(input)).unwrap();
        assert_eq!(request.title, "Claude Code");
        assert_eq!(request.message, "Hi");
    }

    #[test]
    fn test_null_title_defaults() {
        let input = r#"{"message":"Hi","title":null}"#;
        let request = read_request(Cursor::new(input)).unwrap();
        assert_eq!(request.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_missing_ids_are_empty() {
        let request = read_request(Cursor::new(r#"{"message":"only"}"#)).unwrap();
        assert!(request.session_id.is_empty());
        assert!(request.transcript_path.is_empty());
        assert_eq!(request.message, "only");

        let request = read_request(Cursor::new("{}")).unwrap();
        assert!(request.message.is_empty());
        assert_eq!(request.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_null_fields_are_empty() {
        let input = r#"{"session_id":null,"transcript_path":null,"message":null}"#;
        let request = read_request(Cursor::new(input)).unwrap();
        assert!(request.session_id.is_empty());
        assert!(request.message.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let input = r#"{"message":"Hi","hook_event_name":"Notification","cwd":"/tmp"}"#;
        let request = read_request(Cursor::new(input)).unwrap();
        assert_eq!(request.message, "Hi");
    }

    #[test]
    fn test_special_characters_preserved() {
        let input = r#"{
            "message": "Message with \"quotes\" and special chars",
            "title": "Title with \"quotes\""
        }"#;
        let request = read_request(Cursor::new(input)).unwrap();
        assert_eq!(request.message, "Message with \"quotes\" and special chars");
        assert_eq!(request.title, "Title with \"quotes\"");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = read_request(Cursor::new("{invalid}")).unwrap_err();
        assert!(matches!(err, HookError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let err = read_request(Cursor::new("")).unwrap_err();
        assert!(matches!(err, HookError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let bytes: &[u8] = b"{\"message\":\"\xff\xfe\"}";
        let err = read_request(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, HookError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_non_object_is_parse_error() {
        for input in [r#"["s","/t.md","Hi"]"#, "\"Hi\"", "42", "null"] {
            let err = read_request(Cursor::new(input)).unwrap_err();
            assert!(matches!(err, HookError::Parse(_)), "{input}: got {err:?}");
        }
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        let err = read_request(Cursor::new(r#"{"message": 7}"#)).unwrap_err();
        assert!(matches!(err, HookError::Parse(_)));
    }
}
