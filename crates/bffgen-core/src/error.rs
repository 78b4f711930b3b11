//! Error types for bffgen-core

use std::path::PathBuf;

/// Result type for bffgen-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Marker structure or section bounds error
    #[error(transparent)]
    Blocks(#[from] bffgen_blocks::Error),

    /// Filesystem error, carrying the path and operation
    #[error(transparent)]
    Fs(#[from] bffgen_fs::Error),

    /// Merge error
    #[error(transparent)]
    Content(#[from] bffgen_content::Error),

    /// One or more targets of a multi-file run failed
    #[error("failed to generate files:\n{}", render_failures(.failures))]
    Aggregate { failures: Vec<FileFailure> },
}

/// A single failed target in a multi-file run.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: Error,
}

fn render_failures(failures: &[FileFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.path.display(), f.error))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Error {
    /// Failures of a multi-file run, empty for any other error.
    pub fn failures(&self) -> &[FileFailure] {
        match self {
            Self::Aggregate { failures } => failures,
            _ => &[],
        }
    }
}
