//! Line difference between two content snapshots

use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffOp, capture_diff_slices};

/// How a line differs between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Added,
    Removed,
    Modified,
}

impl DiffKind {
    /// Single-character marker used in rendered diffs.
    pub fn symbol(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Modified => '~',
        }
    }
}

/// One differing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    pub kind: DiffKind,
    /// 1-based line number.
    pub line: usize,
    /// The line text; `"old -> new"` for modifications.
    pub detail: String,
}

/// Algorithm used to line up the two snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStrategy {
    /// Compare line `i` of old with line `i` of new. An inserted line shifts
    /// every later index and shows up as a run of modifications.
    #[default]
    Positional,
    /// Minimal edit script over whole lines. Added lines carry new line
    /// numbers, removed lines carry old line numbers.
    Aligned,
}

/// Outcome of comparing two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub has_changes: bool,
    pub diffs: Vec<LineDiff>,
    pub summary: String,
}

impl DiffResult {
    /// A result reporting no differences.
    pub fn unchanged() -> Self {
        Self::from_diffs(Vec::new())
    }

    /// Build a result (and its summary) from a list of entries.
    pub fn from_diffs(diffs: Vec<LineDiff>) -> Self {
        let summary = summarize(&diffs);
        Self {
            has_changes: !diffs.is_empty(),
            diffs,
            summary,
        }
    }

    /// Number of entries of the given kind.
    pub fn count(&self, kind: DiffKind) -> usize {
        self.diffs.iter().filter(|d| d.kind == kind).count()
    }

    /// Render the result for a terminal.
    ///
    /// ```text
    /// Changes: 1 added, 1 modified
    /// --------------------------------------------------
    /// ~ 2: line 2 -> line 2 modified
    /// + 4: line 4
    /// ```
    pub fn format(&self) -> String {
        if !self.has_changes {
            return "No changes detected".to_string();
        }

        let mut out = format!("Changes: {}\n", self.summary);
        out.push_str(&"-".repeat(50));
        out.push('\n');
        for diff in &self.diffs {
            out.push_str(&format!(
                "{} {}: {}\n",
                diff.kind.symbol(),
                diff.line,
                diff.detail
            ));
        }
        out
    }
}

impl Default for DiffResult {
    fn default() -> Self {
        Self::unchanged()
    }
}

fn summarize(diffs: &[LineDiff]) -> String {
    if diffs.is_empty() {
        return "0 changes".to_string();
    }

    let count = |kind| diffs.iter().filter(|d| d.kind == kind).count();
    [
        (count(DiffKind::Added), "added"),
        (count(DiffKind::Removed), "removed"),
        (count(DiffKind::Modified), "modified"),
    ]
    .into_iter()
    .filter(|(n, _)| *n > 0)
    .map(|(n, label)| format!("{n} {label}"))
    .collect::<Vec<_>>()
    .join(", ")
}

/// Positional diff of two snapshots.
///
/// # Example
/// ```
/// use bffgen_content::{DiffKind, compute_diff};
///
/// let result = compute_diff("line 1\nline 2\nline 3", "line 1\nline 2 modified\nline 3\nline 4");
/// assert_eq!(result.diffs.len(), 2);
/// assert_eq!(result.diffs[0].kind, DiffKind::Modified);
/// assert_eq!(result.diffs[1].kind, DiffKind::Added);
/// assert_eq!(result.summary, "1 added, 1 modified");
/// ```
pub fn compute_diff(old: &str, new: &str) -> DiffResult {
    compute_diff_with(old, new, DiffStrategy::Positional)
}

/// Diff two snapshots with the chosen strategy.
pub fn compute_diff_with(old: &str, new: &str, strategy: DiffStrategy) -> DiffResult {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();

    let diffs = match strategy {
        DiffStrategy::Positional => positional(&old_lines, &new_lines),
        DiffStrategy::Aligned => aligned(&old_lines, &new_lines),
    };
    DiffResult::from_diffs(diffs)
}

fn modified(line: usize, old: &str, new: &str) -> LineDiff {
    LineDiff {
        kind: DiffKind::Modified,
        line,
        detail: format!("{old} -> {new}"),
    }
}

fn positional(old: &[&str], new: &[&str]) -> Vec<LineDiff> {
    let max = old.len().max(new.len());
    let mut diffs = Vec::new();

    for i in 0..max {
        match (old.get(i), new.get(i)) {
            (None, Some(n)) => diffs.push(LineDiff {
                kind: DiffKind::Added,
                line: i + 1,
                detail: n.to_string(),
            }),
            (Some(o), None) => diffs.push(LineDiff {
                kind: DiffKind::Removed,
                line: i + 1,
                detail: o.to_string(),
            }),
            (Some(o), Some(n)) if o != n => diffs.push(modified(i + 1, o, n)),
            _ => {}
        }
    }

    diffs
}

fn aligned(old: &[&str], new: &[&str]) -> Vec<LineDiff> {
    let mut diffs = Vec::new();

    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        match op {
            DiffOp::Equal { .. } => {}
            DiffOp::Delete {
                old_index, old_len, ..
            } => removed_run(&mut diffs, old, old_index, old_len),
            DiffOp::Insert {
                new_index, new_len, ..
            } => added_run(&mut diffs, new, new_index, new_len),
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                let paired = old_len.min(new_len);
                for k in 0..paired {
                    diffs.push(modified(new_index + k + 1, old[old_index + k], new[new_index + k]));
                }
                removed_run(&mut diffs, old, old_index + paired, old_len - paired);
                added_run(&mut diffs, new, new_index + paired, new_len - paired);
            }
        }
    }

    diffs
}

fn removed_run(diffs: &mut Vec<LineDiff>, old: &[&str], start: usize, len: usize) {
    for idx in start..start + len {
        diffs.push(LineDiff {
            kind: DiffKind::Removed,
            line: idx + 1,
            detail: old[idx].to_string(),
        });
    }
}

fn added_run(diffs: &mut Vec<LineDiff>, new: &[&str], start: usize, len: usize) {
    for idx in start..start + len {
        diffs.push(LineDiff {
            kind: DiffKind::Added,
            line: idx + 1,
            detail: new[idx].to_string(),
        });
    }
}
