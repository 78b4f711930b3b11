//! Error types for bffgen-content

/// Result type for bffgen-content operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no conflict recorded at line {line}")]
    ConflictNotFound { line: usize },
}
