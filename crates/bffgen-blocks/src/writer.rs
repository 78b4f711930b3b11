//! Section editing by line range.
//!
//! Every function here works on the same `\n`-split, 1-based line contract as
//! [`find_sections`](crate::parser::find_sections), so a [`Section`] found in
//! a snapshot can be edited in that same snapshot.

use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::parser::{Section, find_sections};

fn check_bounds(section: &Section, line_count: usize) -> Result<()> {
    if section.begin_line < 1
        || section.end_line > line_count
        || section.begin_line >= section.end_line
    {
        return Err(Error::Bounds {
            begin_line: section.begin_line,
            end_line: section.end_line,
            line_count,
        });
    }
    Ok(())
}

fn push_body<'a>(lines: &mut Vec<&'a str>, body: &'a str) {
    if !body.is_empty() {
        lines.extend(body.split('\n'));
    }
}

/// Replaces the body of `section` with `new_body`.
///
/// The marker lines are rewritten with the section's own tokens, so any
/// indentation they carried is normalized away. An empty body leaves the
/// markers adjacent.
///
/// # Errors
/// Returns [`Error::Bounds`] if the section's range does not fit `content`.
///
/// # Example
/// ```
/// use bffgen_blocks::{Marker, find_sections, replace_section};
///
/// let content = "A\n// bffgen:begin\nold\n// bffgen:end\nB";
/// let section = &find_sections(content, &Marker::default()).unwrap()[0];
/// let updated = replace_section(content, section, "new").unwrap();
/// assert_eq!(updated, "A\n// bffgen:begin\nnew\n// bffgen:end\nB");
/// ```
pub fn replace_section(content: &str, section: &Section, new_body: &str) -> Result<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    check_bounds(section, lines.len())?;

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..section.begin_line - 1]);
    out.push(&section.marker.begin);
    push_body(&mut out, new_body);
    out.push(&section.marker.end);
    out.extend_from_slice(&lines[section.end_line..]);

    Ok(out.join("\n"))
}

/// Inserts a complete `marker`-fenced block after the first `after_line` lines.
///
/// `after_line == 0` inserts at the very top.
///
/// # Errors
/// Returns [`Error::InsertPosition`] if `after_line` exceeds the line count.
pub fn insert_section(
    content: &str,
    marker: &Marker,
    new_body: &str,
    after_line: usize,
) -> Result<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    if after_line > lines.len() {
        return Err(Error::InsertPosition {
            after_line,
            line_count: lines.len(),
        });
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2);
    out.extend_from_slice(&lines[..after_line]);
    out.push(&marker.begin);
    push_body(&mut out, new_body);
    out.push(&marker.end);
    out.extend_from_slice(&lines[after_line..]);

    Ok(out.join("\n"))
}

/// Deletes `section` including both marker lines.
///
/// # Errors
/// Returns [`Error::Bounds`] if the section's range does not fit `content`.
pub fn remove_section(content: &str, section: &Section) -> Result<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    check_bounds(section, lines.len())?;

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..section.begin_line - 1]);
    out.extend_from_slice(&lines[section.end_line..]);

    Ok(out.join("\n"))
}

/// Succeeds iff every `marker` begin/end in `content` is properly paired.
pub fn validate_markers(content: &str, marker: &Marker) -> Result<()> {
    find_sections(content, marker).map(|_| ())
}

/// One human-readable line per section: `Section at lines B-E (N lines)`.
pub fn summarize_markers(content: &str, marker: &Marker) -> Result<Vec<String>> {
    Ok(find_sections(content, marker)?
        .iter()
        .map(|section| {
            format!(
                "Section at lines {}-{} ({} lines)",
                section.begin_line,
                section.end_line,
                section.body_line_count()
            )
        })
        .collect())
}
