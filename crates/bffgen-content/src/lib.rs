//! Line diffing and three-way merging for bffgen regeneration
//!
//! Both engines compare content line by line at equal indices. They never
//! interpret the text beyond splitting it on `\n`.

pub mod diff;
pub mod error;
pub mod merge;

pub use diff::{DiffKind, DiffResult, DiffStrategy, LineDiff, compute_diff, compute_diff_with};
pub use error::{Error, Result};
pub use merge::{Conflict, MergeResult, ThreeWayMerge};
