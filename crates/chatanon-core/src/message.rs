use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single record as it appears in a chat export.
///
/// Fields with an unexpected JSON type deserialize to `None` instead of
/// failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawMessage {
    #[serde(default, deserialize_with = "string_or_none")]
    pub sender_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "integer_or_none")]
    pub timestamp_ms: Option<i64>,
}

impl RawMessage {
    pub fn new(sender_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender_name: Some(sender_name.into()),
            content: Some(content.into()),
            timestamp_ms: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Sender name with surrounding whitespace removed
    pub fn sender(&self) -> Option<&str> {
        self.sender_name.as_deref().map(str::trim)
    }

    /// Message text, if present and non-empty
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|t| !t.is_empty())
    }
}

/// An anonymized message ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedMessage {
    pub speaker: String,
    pub text: String,
    pub timestamp_ms: Option<i64>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn integer_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_i64())
}
