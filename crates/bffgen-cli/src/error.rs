//! Error types for bffgen-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from bffgen-core
    #[error(transparent)]
    Core(#[from] bffgen_core::Error),

    /// Error from bffgen-fs
    #[error(transparent)]
    Fs(#[from] bffgen_fs::Error),

    /// Error from bffgen-content
    #[error(transparent)]
    Content(#[from] bffgen_content::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

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
