//! Regeneration-safe generator for single files
//!
//! Each call reads the target, decides how to fold the new content in, diffs
//! the result against what was there, and then either reports (check and
//! dry-run modes) or backs up and writes.

use std::path::{Path, PathBuf};

use bffgen_blocks::{find_first_section, replace_section, summarize_markers, validate_markers};
use bffgen_content::{DiffResult, compute_diff_with};
use bffgen_fs::{NormalizedPath, io};
use serde::{Deserialize, Serialize};

use crate::backup::BackupStore;
use crate::config::{GeneratorConfig, RunMode};
use crate::error::{Error, FileFailure, Result};

/// How new content was folded into the existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// The file was empty or missing; content is wrapped in a fresh block.
    Create,
    /// The file had no block; a wrapped block is appended after a blank line.
    Append,
    /// The body of the first block is replaced.
    Replace,
}

/// Planned content for one target, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub strategy: UpdateStrategy,
    pub content: String,
    pub diff: DiffResult,
}

/// What a single `generate_file` call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub strategy: UpdateStrategy,
    pub mode: RunMode,
    pub diff: DiffResult,
    /// Whether the target was written.
    pub written: bool,
    /// Backup of the prior content, if one was made.
    pub backup: Option<PathBuf>,
}

/// Generator with an immutable configuration.
///
/// Holds no mutable state, so one instance can serve any number of sequential
/// or concurrent calls on distinct targets.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fold `new_content` into `existing` without touching the filesystem.
    ///
    /// Only the first section for the configured marker is ever replaced.
    /// Further sections need separate calls with their own scoped markers.
    pub fn plan(&self, existing: &str, new_content: &str) -> Result<Update> {
        let marker = &self.config.marker;

        let (strategy, content) = if existing.is_empty() {
            (UpdateStrategy::Create, marker.wrap(new_content))
        } else {
            match find_first_section(existing, marker)? {
                None => {
                    let separator = if existing.ends_with('\n') { "\n" } else { "\n\n" };
                    let content = format!("{existing}{separator}{}", marker.wrap(new_content));
                    (UpdateStrategy::Append, content)
                }
                Some(section) => (
                    UpdateStrategy::Replace,
                    replace_section(existing, &section, new_content)?,
                ),
            }
        };

        let diff = compute_diff_with(existing, &content, self.config.diff_strategy);
        tracing::debug!(?strategy, summary = %diff.summary, "planned update");

        Ok(Update {
            strategy,
            content,
            diff,
        })
    }

    /// Generate or update `path` with `new_content` as the block body.
    ///
    /// # Errors
    /// Marker structure and bounds errors from the existing content, and any
    /// read, backup or write failure. Nothing is written when an error is
    /// returned before the final write.
    pub fn generate_file(&self, path: impl AsRef<Path>, new_content: &str) -> Result<FileReport> {
        let target = NormalizedPath::new(path.as_ref());
        let mode = self.config.run_mode();
        tracing::debug!(path = %target, ?mode, "generating file");

        let existing = io::read_optional(&target)?.unwrap_or_default();
        let update = self.plan(&existing, new_content)?;

        let mut report = FileReport {
            path: target.to_native(),
            strategy: update.strategy,
            mode,
            diff: update.diff,
            written: false,
            backup: None,
        };

        if !mode.writes() {
            tracing::info!(
                path = %target,
                ?mode,
                changes = report.diff.has_changes,
                summary = %report.diff.summary,
                "not writing"
            );
            return Ok(report);
        }

        if let Some(store) = self.backup_store()
            && !existing.is_empty()
        {
            report.backup = Some(store.save(&target, &existing)?.to_native());
        }

        io::write_text(&target, &update.content)?;
        report.written = true;
        tracing::info!(path = %target, summary = %report.diff.summary, "updated file");

        Ok(report)
    }

    /// Run [`generate_file`](Self::generate_file) for every entry.
    ///
    /// Every entry is attempted. If any fail, the result is
    /// [`Error::Aggregate`] listing each failed path in input order.
    pub fn generate_files<I, P, S>(&self, files: I) -> Result<Vec<FileReport>>
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let mut reports = Vec::new();
        let mut failures = Vec::new();

        for (path, content) in files {
            let path = path.as_ref();
            match self.generate_file(path, content.as_ref()) {
                Ok(report) => reports.push(report),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "generation failed");
                    failures.push(FileFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            }
        }

        if failures.is_empty() {
            Ok(reports)
        } else {
            Err(Error::Aggregate { failures })
        }
    }

    /// Check that `path` has well-formed markers. Read-only.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = io::read_text(&NormalizedPath::new(path.as_ref()))?;
        validate_markers(&content, &self.config.marker)?;
        Ok(())
    }

    /// Describe every section in `path`. Read-only.
    pub fn file_summary(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let content = io::read_text(&NormalizedPath::new(path.as_ref()))?;
        Ok(summarize_markers(&content, &self.config.marker)?)
    }

    /// Remove the backup directory, if one is configured.
    pub fn cleanup_backups(&self) -> Result<bool> {
        match self.backup_store() {
            Some(store) => store.clear(),
            None => Ok(false),
        }
    }

    fn backup_store(&self) -> Option<BackupStore> {
        self.config
            .backup_dir
            .as_deref()
            .map(|dir| BackupStore::new(dir, self.config.backup_naming))
    }
}
