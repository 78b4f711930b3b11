//! Marker-delimited section parsing and editing for bffgen regeneration.
//!
//! A generated file may contain machine-owned regions fenced by a pair of
//! marker lines:
//!
//! ```text
//! // bffgen:begin
//! generated code
//! // bffgen:end
//! ```
//!
//! A line counts as a marker only when, after trimming surrounding whitespace,
//! it equals the token exactly. Identifier-scoped markers
//! (`// bffgen:begin:routes`) let several independent regions share a file.
//!
//! - [`marker`]: token pairs and their compiled line patterns
//! - [`parser`]: locating sections, with structural validation
//! - [`writer`]: replacing, inserting and removing sections by line range
//!
//! All line numbers are 1-based and refer to the marker lines themselves.

pub mod error;
pub mod marker;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use marker::{Marker, MarkerPattern};
pub use parser::{Section, find_first_section, find_sections};
pub use writer::{
    insert_section, remove_section, replace_section, summarize_markers, validate_markers,
};
