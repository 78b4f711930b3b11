//! Shared test fixtures for the bffgen regeneration workspace.
//!
//! A dev-dependency only. [`TestProject`] wraps a temporary directory with
//! helpers for seeding generated files and asserting on what ended up on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory.
///
/// # Example
///
/// ```rust,no_run
/// use bffgen_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write("internal/routes/routes.go", "package routes\n");
/// project.assert_file_contains("internal/routes/routes.go", "package routes");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `relative` as text, panicking with the path if it is missing.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.exists(relative),
            "expected {} to exist",
            self.path(relative).display()
        );
    }

    pub fn assert_file_missing(&self, relative: &str) {
        assert!(
            !self.exists(relative),
            "expected {} not to exist",
            self.path(relative).display()
        );
    }

    pub fn assert_file_contains(&self, relative: &str, needle: &str) {
        let content = self.read(relative);
        assert!(
            content.contains(needle),
            "expected {relative} to contain {needle:?}, got:\n{content}"
        );
    }
}
