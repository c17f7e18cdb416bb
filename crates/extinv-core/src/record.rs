//! Normalized extension records

use serde_json::Value;

/// Placeholder for metadata fields missing from the source entry.
pub const NOT_AVAILABLE: &str = "N/A";

/// One installed extension, normalized from its inventory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRecord {
    /// Key of the entry in the inventory file.
    pub id: String,
    pub name: String,
    pub publisher: String,
    pub version: String,
    pub enabled: bool,
}

impl ExtensionRecord {
    /// Build a record from an inventory entry.
    ///
    /// Returns `None` when the entry's value is not a JSON object; such
    /// entries are not extensions and are skipped.
    pub fn from_entry(id: &str, value: &Value) -> Option<Self> {
        let meta = value.as_object()?;

        Some(Self {
            id: id.to_string(),
            name: text_field(meta.get("name")),
            publisher: text_field(meta.get("publisher")),
            version: text_field(meta.get("version")),
            enabled: meta.get("enabled").is_none_or(truthy),
        })
    }

    /// Key under which records count as duplicates of each other.
    pub fn duplicate_key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Lowercase a display name and strip its spaces.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

// Present-but-odd values follow JSON truthiness: null, false, 0 and empty
// strings or containers are falsy.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

// Non-string scalars keep their JSON text so a numeric version still shows.
fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(other) => other.to_string(),
    }
}
