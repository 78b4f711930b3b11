//! Generator configuration
//!
//! A configuration is fixed for the lifetime of a [`Generator`](crate::Generator).
//! It can be built in code with the `with_*` methods or loaded from a TOML or
//! JSON file:
//!
//! ```toml
//! check_mode = false
//! backup_dir = ".bffgen/backups"
//! backup_naming = "full_path"
//!
//! [marker]
//! id = "routes"
//! ```

use std::path::{Path, PathBuf};

use bffgen_blocks::Marker;
use bffgen_content::DiffStrategy;
use bffgen_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;

/// How backup files are named inside the backup directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupNaming {
    /// `<basename>.backup`, overwritten on every run.
    #[default]
    Basename,
    /// The target's full path flattened into one name, so targets that share
    /// a base name in different directories never collide.
    FullPath,
    /// `<basename>.<UTC timestamp>.backup`, one file per run.
    Timestamped,
}

/// What a generation run does with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Back up and write the target.
    Write,
    /// Report the full diff, write nothing.
    Check,
    /// Report the summary, write nothing.
    DryRun,
}

impl RunMode {
    pub fn writes(self) -> bool {
        matches!(self, Self::Write)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Marker pair fencing the generated region.
    pub marker: Marker,
    pub dry_run: bool,
    /// Takes precedence over `dry_run`.
    pub check_mode: bool,
    /// Prior content is copied here before each write when set.
    pub backup_dir: Option<PathBuf>,
    pub verbose: bool,
    pub backup_naming: BackupNaming,
    pub diff_strategy: DiffStrategy,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration file; the format follows the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = NormalizedPath::new(path);
        Ok(ConfigStore::new().load(&path)?)
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    pub fn with_backup_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backup_dir = Some(dir.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_backup_naming(mut self, naming: BackupNaming) -> Self {
        self.backup_naming = naming;
        self
    }

    pub fn with_diff_strategy(mut self, strategy: DiffStrategy) -> Self {
        self.diff_strategy = strategy;
        self
    }

    pub fn run_mode(&self) -> RunMode {
        if self.check_mode {
            RunMode::Check
        } else if self.dry_run {
            RunMode::DryRun
        } else {
            RunMode::Write
        }
    }
}
