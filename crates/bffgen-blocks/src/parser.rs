//! Section discovery for marker-delimited regions.
//!
//! Scans content top to bottom with at most one open section. A second begin
//! marker before the matching end, an end marker with nothing open, or a
//! section still open at end of input aborts the scan with no partial result.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::marker::Marker;

/// One begin/end-delimited region found in content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 1-based line of the begin marker.
    pub begin_line: usize,
    /// 1-based line of the end marker.
    pub end_line: usize,
    /// Lines strictly between the markers, joined with `\n`.
    pub body: String,
    /// The marker pair that delimits this section.
    pub marker: Marker,
}

impl Section {
    /// Number of lines between the two marker lines.
    ///
    /// Zero for a malformed range where `end_line` does not follow `begin_line`.
    pub fn body_line_count(&self) -> usize {
        self.end_line.saturating_sub(self.begin_line).saturating_sub(1)
    }
}

struct OpenSection<'a> {
    begin_line: usize,
    body: Vec<&'a str>,
}

/// Finds all sections delimited by `marker`, in source order.
///
/// # Errors
/// - [`Error::NestedMarker`] for a begin marker while a section is open
/// - [`Error::UnmatchedEnd`] for an end marker with no open section
/// - [`Error::UnclosedSection`] when input ends inside a section
///
/// # Example
/// ```
/// use bffgen_blocks::{Marker, find_sections};
///
/// let content = "package main\n// bffgen:begin\nfunc a() {}\n// bffgen:end";
/// let sections = find_sections(content, &Marker::default()).unwrap();
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].begin_line, 2);
/// assert_eq!(sections[0].end_line, 4);
/// assert_eq!(sections[0].body, "func a() {}");
/// ```
pub fn find_sections(content: &str, marker: &Marker) -> Result<Vec<Section>> {
    let pattern = marker.compile()?;
    let mut sections = Vec::new();
    let mut open: Option<OpenSection<'_>> = None;

    for (idx, line) in content.split('\n').enumerate() {
        let line_no = idx + 1;

        if pattern.is_begin(line) {
            if open.is_some() {
                return Err(Error::NestedMarker { line: line_no });
            }
            open = Some(OpenSection {
                begin_line: line_no,
                body: Vec::new(),
            });
            continue;
        }

        if pattern.is_end(line) {
            let Some(current) = open.take() else {
                return Err(Error::UnmatchedEnd { line: line_no });
            };
            sections.push(Section {
                begin_line: current.begin_line,
                end_line: line_no,
                body: current.body.join("\n"),
                marker: marker.clone(),
            });
            continue;
        }

        if let Some(current) = open.as_mut() {
            current.body.push(line);
        }
    }

    if let Some(current) = open {
        return Err(Error::UnclosedSection {
            begin_line: current.begin_line,
        });
    }

    tracing::trace!(count = sections.len(), begin = %marker.begin, "found sections");
    Ok(sections)
}

/// Finds the first section delimited by `marker`.
///
/// The whole content is still validated; a structural error after the first
/// section is reported.
pub fn find_first_section(content: &str, marker: &Marker) -> Result<Option<Section>> {
    Ok(find_sections(content, marker)?.into_iter().next())
}
