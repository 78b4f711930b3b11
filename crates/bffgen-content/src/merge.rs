//! Three-way merge of a baseline, a locally edited copy and a freshly
//! generated copy.
//!
//! Lines are compared at equal indices. Where local and remote both diverge
//! from base and from each other the line is recorded as a [`Conflict`] and
//! the merged output takes the remote line until a resolution is applied.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The three inputs of a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeWayMerge<'a> {
    /// Content as originally generated.
    pub base: &'a str,
    /// Content as edited by the user.
    pub local: &'a str,
    /// Content as generated now.
    pub remote: &'a str,
}

/// A line where local and remote disagree with base and with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// 1-based line number in the merged content.
    pub line: usize,
    pub base: String,
    pub local: String,
    pub remote: String,
    /// Caller-supplied replacement for the merged line.
    pub resolved: Option<String>,
}

/// Outcome of a three-way merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    pub content: String,
    pub conflicts: Vec<Conflict>,
    pub has_conflicts: bool,
    pub summary: String,
}

impl<'a> ThreeWayMerge<'a> {
    pub fn new(base: &'a str, local: &'a str, remote: &'a str) -> Self {
        Self {
            base,
            local,
            remote,
        }
    }

    /// Merge the three inputs.
    ///
    /// # Example
    /// ```
    /// use bffgen_content::ThreeWayMerge;
    ///
    /// let result = ThreeWayMerge::new("x", "y", "z").merge();
    /// assert!(result.has_conflicts);
    /// assert_eq!(result.conflicts[0].line, 1);
    /// assert_eq!(result.content, "z");
    /// ```
    pub fn merge(&self) -> MergeResult {
        let base: Vec<&str> = self.base.split('\n').collect();
        let local: Vec<&str> = self.local.split('\n').collect();
        let remote: Vec<&str> = self.remote.split('\n').collect();

        let max = base.len().max(local.len()).max(remote.len());
        let mut merged: Vec<&str> = Vec::with_capacity(max);
        let mut conflicts = Vec::new();

        for i in 0..max {
            let b = base.get(i).copied().unwrap_or("");
            let l = local.get(i).copied().unwrap_or("");
            let r = remote.get(i).copied().unwrap_or("");

            if l != b && r != b && l != r {
                conflicts.push(Conflict {
                    line: i + 1,
                    base: b.to_string(),
                    local: l.to_string(),
                    remote: r.to_string(),
                    resolved: None,
                });
                merged.push(r);
            } else if l != b {
                merged.push(l);
            } else {
                merged.push(r);
            }
        }

        let mut summary = format!("Merged {} lines", merged.len());
        if !conflicts.is_empty() {
            summary.push_str(&format!(", {} conflicts", conflicts.len()));
        }
        tracing::debug!(lines = merged.len(), conflicts = conflicts.len(), "three-way merge");

        MergeResult {
            content: merged.join("\n"),
            has_conflicts: !conflicts.is_empty(),
            conflicts,
            summary,
        }
    }
}

impl MergeResult {
    /// Record `resolution` for the conflict at `line`.
    ///
    /// A later call for the same line replaces the earlier resolution.
    ///
    /// # Errors
    /// Returns [`Error::ConflictNotFound`] if no conflict sits at `line`.
    pub fn resolve_conflict(&mut self, line: usize, resolution: impl Into<String>) -> Result<()> {
        let conflict = self
            .conflicts
            .iter_mut()
            .find(|c| c.line == line)
            .ok_or(Error::ConflictNotFound { line })?;
        conflict.resolved = Some(resolution.into());
        Ok(())
    }

    /// Conflicts that have no resolution yet.
    pub fn unresolved(&self) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter().filter(|c| c.resolved.is_none())
    }

    /// Merged content with every recorded resolution written over its line.
    ///
    /// Resolutions whose line lies past the end of the content are skipped.
    pub fn apply_resolutions(&self) -> String {
        if !self.has_conflicts {
            return self.content.clone();
        }

        let mut lines: Vec<&str> = self.content.split('\n').collect();
        for conflict in &self.conflicts {
            let Some(resolved) = conflict.resolved.as_deref() else {
                continue;
            };
            match lines.get_mut(conflict.line.wrapping_sub(1)) {
                Some(slot) => *slot = resolved,
                None => tracing::warn!(
                    line = conflict.line,
                    line_count = lines.len(),
                    "resolution outside merged content, skipped"
                ),
            }
        }
        lines.join("\n")
    }

    /// Render the conflicts for a terminal.
    pub fn format_conflicts(&self) -> String {
        if !self.has_conflicts {
            return "No conflicts".to_string();
        }

        let mut out = format!("Merge Conflicts ({}):\n", self.conflicts.len());
        out.push_str(&"=".repeat(50));
        out.push('\n');
        for conflict in &self.conflicts {
            out.push_str(&format!("Line {}:\n", conflict.line));
            out.push_str(&format!("  Base:   {}\n", conflict.base));
            out.push_str(&format!("  Local:  {}\n", conflict.local));
            out.push_str(&format!("  Remote: {}\n", conflict.remote));
            out.push('\n');
        }
        out
    }
}
