//! Backups of prior file content
//!
//! Before a target is overwritten its previous content is copied into the
//! backup directory. The file name follows the configured [`BackupNaming`].

use std::path::Path;

use bffgen_fs::{NormalizedPath, io};
use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::Result;
use crate::config::BackupNaming;

/// Longest file name most filesystems accept, in bytes.
const MAX_NAME_BYTES: usize = 255;

/// `<flattened>.backup`, shortened when it would exceed [`MAX_NAME_BYTES`].
///
/// A shortened name keeps the tail of the flattened path (so it still ends
/// in the base name) behind a digest of the whole path, which keeps
/// distinct targets apart.
fn full_path_name(flattened: &str) -> String {
    let name = format!("{flattened}.backup");
    if name.len() <= MAX_NAME_BYTES {
        return name;
    }

    let mut hasher = Sha256::new();
    hasher.update(flattened.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    let digest = &digest[..16];

    let budget = MAX_NAME_BYTES - digest.len() - ".".len() - ".backup".len();
    let mut start = flattened.len() - budget;
    while !flattened.is_char_boundary(start) {
        start += 1;
    }
    format!("{digest}.{}.backup", &flattened[start..])
}

/// A backup directory plus a naming policy.
#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: NormalizedPath,
    naming: BackupNaming,
}

impl BackupStore {
    pub fn new(dir: impl AsRef<Path>, naming: BackupNaming) -> Self {
        Self {
            dir: NormalizedPath::new(dir),
            naming,
        }
    }

    /// Where the backup of `target` goes.
    pub fn backup_path(&self, target: &NormalizedPath) -> NormalizedPath {
        let base = target.file_name().unwrap_or("unnamed");
        let name = match self.naming {
            BackupNaming::Basename => format!("{base}.backup"),
            BackupNaming::FullPath => {
                let absolute = std::path::absolute(target.to_native())
                    .map(NormalizedPath::new)
                    .unwrap_or_else(|_| target.clone());
                full_path_name(&absolute.flattened())
            }
            BackupNaming::Timestamped => {
                let stamp = Utc::now().format("%Y%m%dT%H%M%S%.6fZ");
                format!("{base}.{stamp}.backup")
            }
        };
        self.dir.join(&name)
    }

    /// Copy `content`, the prior state of `target`, into the store.
    pub fn save(&self, target: &NormalizedPath, content: &str) -> Result<NormalizedPath> {
        let path = self.backup_path(target);
        io::write_text(&path, content)?;
        tracing::info!(target = %target, backup = %path, "created backup");
        Ok(path)
    }

    /// Remove the whole backup directory. Returns whether anything was removed.
    pub fn clear(&self) -> Result<bool> {
        let removed = io::remove_dir_all(&self.dir)?;
        if removed {
            tracing::info!(dir = %self.dir, "removed backups");
        }
        Ok(removed)
    }
}
