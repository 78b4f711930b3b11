//! Error types for bffgen-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("nested begin marker found at line {line}")]
    NestedMarker { line: usize },

    #[error("end marker without begin marker found at line {line}")]
    UnmatchedEnd { line: usize },

    #[error("unclosed section starting at line {begin_line}")]
    UnclosedSection { begin_line: usize },

    #[error(
        "section boundaries {begin_line}-{end_line} out of range for content with {line_count} lines"
    )]
    Bounds {
        begin_line: usize,
        end_line: usize,
        line_count: usize,
    },

    #[error("insert position {after_line} out of range for content with {line_count} lines")]
    InsertPosition { after_line: usize, line_count: usize },

    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Whether the error describes malformed marker structure in the content.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::NestedMarker { .. } | Self::UnmatchedEnd { .. } | Self::UnclosedSection { .. }
        )
    }
}
