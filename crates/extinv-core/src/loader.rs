//! Loader for the editor's extension inventory file
//!
//! The inventory is a single JSON object keyed by extension identifier:
//!
//! ```json
//! {
//!   "esbenp.prettier-vscode": {
//!     "name": "Prettier",
//!     "publisher": "esbenp",
//!     "version": "10.1.0",
//!     "enabled": true
//!   }
//! }
//! ```
//!
//! Key order is kept as written so later stable sorts can fall back to it.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{Error, Result, io};

/// Raw inventory as read from disk, before normalization.
#[derive(Debug, Clone)]
pub struct LoadedInventory {
    /// Path the inventory was read from.
    pub path: PathBuf,
    /// Size of the file in bytes.
    pub size_bytes: u64,
    /// Top-level entries in file order.
    pub entries: Map<String, Value>,
}

/// Read and parse the inventory file at `path`.
///
/// # Errors
///
/// - [`Error::InputNotFound`] if nothing exists at `path` (checked before reading)
/// - [`Error::InputParse`] if the content is not valid JSON
/// - [`Error::InvalidInput`] if the top-level value is not an object
/// - [`Error::Io`] for any other read failure
pub fn load_inventory(path: &Path) -> Result<LoadedInventory> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = io::read_text(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|source| Error::InputParse {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = match value {
        Value::Object(entries) => entries,
        other => {
            return Err(Error::InvalidInput {
                path: path.to_path_buf(),
                message: format!("expected a JSON object at the top level, found {}", kind(&other)),
            });
        }
    };

    tracing::debug!(path = %path.display(), entries = entries.len(), "parsed inventory");

    Ok(LoadedInventory {
        path: path.to_path_buf(),
        size_bytes: content.len() as u64,
        entries,
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
