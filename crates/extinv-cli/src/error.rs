//! Error types for extinv-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from extinv-core
    #[error(transparent)]
    Core(#[from] extinv_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_io_error_converts() {
        let result: Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout closed",
        )
        .into());

        let error = result.unwrap_err();
        assert!(matches!(error, CliError::Io(_)));
        assert_eq!(error.to_string(), "stdout closed");
    }
}
