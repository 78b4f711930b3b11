//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use fs2::FileExt;

use crate::{Error, IoOp, NormalizedPath, Result};

/// Write content atomically to a file.
///
/// The content goes to a uniquely named temporary sibling which is then
/// renamed over the target, so a reader never observes a partial write.
/// A symlinked target is written through to the file it points at, and an
/// existing target keeps its permissions. Parent directories are created as
/// needed.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = resolve_symlink(path)?;
    let native_path = target.to_native();

    if let Some(parent) = target.parent() {
        let parent = parent.to_native();
        fs::create_dir_all(&parent).map_err(|e| Error::io(IoOp::CreateDir, &parent, e))?;
    }

    // Concurrent writers of one existing target take turns
    let existing = lock_existing(&native_path)?;
    let permissions = existing
        .as_ref()
        .map(|file| file.metadata().map(|m| m.permissions()))
        .transpose()
        .map_err(|e| Error::io(IoOp::Read, &native_path, e))?;

    let temp = TempSibling::create(&target)?;
    temp.write(content)?;
    if let Some(permissions) = permissions {
        fs::set_permissions(&temp.path, permissions)
            .map_err(|e| Error::io(IoOp::Write, &temp.path, e))?;
    }
    temp.persist(&native_path)?;

    if let Some(file) = existing {
        file.unlock()
            .map_err(|e| Error::io(IoOp::Lock, &native_path, e))?;
    }

    tracing::debug!(path = %target, bytes = content.len(), "wrote file");
    Ok(())
}

/// Follow a symlinked target to the path that should actually be replaced.
fn resolve_symlink(path: &NormalizedPath) -> Result<NormalizedPath> {
    let native_path = path.to_native();
    let is_link = fs::symlink_metadata(&native_path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return Ok(path.clone());
    }

    match dunce::canonicalize(&native_path) {
        Ok(resolved) => Ok(NormalizedPath::new(resolved)),
        // Dangling link: create the file it names
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let link = fs::read_link(&native_path)
                .map_err(|e| Error::io(IoOp::Read, &native_path, e))?;
            let resolved = match native_path.parent() {
                Some(dir) => dir.join(link),
                None => link,
            };
            Ok(NormalizedPath::new(resolved))
        }
        Err(e) => Err(Error::io(IoOp::Read, &native_path, e)),
    }
}

fn lock_existing(native_path: &Path) -> Result<Option<File>> {
    let file = match File::open(native_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(IoOp::Read, native_path, e)),
    };
    if file.metadata().map(|m| m.is_file()).unwrap_or(false) {
        file.lock_exclusive()
            .map_err(|e| Error::io(IoOp::Lock, native_path, e))?;
        Ok(Some(file))
    } else {
        // Directories and special files fail at the rename instead
        Ok(None)
    }
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary file next to the target, removed on drop unless persisted.
struct TempSibling {
    path: PathBuf,
    file: Option<File>,
    persisted: bool,
}

impl TempSibling {
    fn create(target: &NormalizedPath) -> Result<Self> {
        // Same directory keeps the rename on one filesystem
        let temp_name = format!(
            ".{}.{}.{}.tmp",
            target.file_name().unwrap_or("bffgen"),
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        let path = target.to_native().with_file_name(temp_name);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| Error::io(IoOp::Write, &path, e))?;

        Ok(Self {
            path,
            file: Some(file),
            persisted: false,
        })
    }

    fn write(&self, content: &[u8]) -> Result<()> {
        let Some(mut file) = self.file.as_ref() else {
            return Ok(());
        };
        file.write_all(content)
            .and_then(|()| file.sync_all())
            .map_err(|e| Error::io(IoOp::Write, &self.path, e))
    }

    fn persist(mut self, destination: &Path) -> Result<()> {
        drop(self.file.take());
        fs::rename(&self.path, destination)
            .map_err(|e| Error::io(IoOp::Rename, destination, e))?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for TempSibling {
    fn drop(&mut self) {
        if !self.persisted {
            drop(self.file.take());
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(IoOp::Read, &native_path, e))
}

/// Read text content, treating a missing file as `None`.
pub fn read_optional(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(IoOp::Read, &native_path, e)),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Recursively remove a directory; a missing directory is not an error.
pub fn remove_dir_all(path: &NormalizedPath) -> Result<bool> {
    let native_path = path.to_native();
    match fs::remove_dir_all(&native_path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(IoOp::Remove, &native_path, e)),
    }
}
