//! Error types for extinv-core

use std::path::PathBuf;

/// Result type for extinv-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, classifying or reporting
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The extensions file does not exist at the configured path.
    #[error("Extensions file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The extensions file is not valid JSON.
    #[error("Failed to parse extensions file at {}: {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The extensions file parsed but is not shaped like an inventory.
    #[error("Invalid extensions file at {}: {message}", path.display())]
    InvalidInput { path: PathBuf, message: String },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {}", path.display())]
    LockFailed { path: PathBuf },

    /// An explicitly requested config file is missing.
    #[error("Configuration not found at {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse TOML config at {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
