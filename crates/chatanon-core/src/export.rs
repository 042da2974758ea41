//! Reading chat exports and writing anonymized output

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::message::RawMessage;

/// Top-level shapes accepted for an export document
#[derive(Deserialize)]
#[serde(untagged)]
enum ExportDocument {
    Bare(Vec<Value>),
    Wrapped { messages: Vec<Value> },
}

/// Load message records from an export file.
pub fn load_messages(path: &Path) -> Result<Vec<RawMessage>> {
    let content = std::fs::read_to_string(path)?;
    parse_messages(&content)
}

/// Parse message records from export JSON.
///
/// The document must be an array of records or an object with a
/// `messages` array. Records that are not JSON objects are skipped.
pub fn parse_messages(content: &str) -> Result<Vec<RawMessage>> {
    let value: Value = serde_json::from_str(content)?;
    let document: ExportDocument = serde_json::from_value(value).map_err(|_| {
        Error::InvalidExport(
            "expected an array of messages or an object with a `messages` array".to_string(),
        )
    })?;

    let records = match document {
        ExportDocument::Bare(records) => records,
        ExportDocument::Wrapped { messages } => messages,
    };

    let total = records.len();
    let messages: Vec<RawMessage> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            if !record.is_object() {
                tracing::debug!(index, "Skipping record that is not an object");
                return None;
            }
            serde_json::from_value(record).ok()
        })
        .collect();

    tracing::debug!(total, parsed = messages.len(), "Parsed export records");
    Ok(messages)
}

/// Write `value` as pretty-printed JSON, keeping non-ASCII text literal.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}
