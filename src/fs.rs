//! File System Port
//!
//! The bundler talks to disk through the [`FileSystem`] trait so the core
//! loop can be tested in memory. [`LocalFs`] is the real implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BundleError, BundleResult};

/// Abstract file system interface
pub trait FileSystem {
    /// True if the path exists and is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read the whole file as raw bytes
    fn read_bytes(&self, path: &Path) -> BundleResult<Vec<u8>>;

    /// Replace the file at `path` with `content` atomically
    fn write_atomic(&self, path: &Path, content: &str) -> BundleResult<()>;
}

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory followed by a
/// rename, so readers never observe a partially written document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_bytes(&self, path: &Path) -> BundleResult<Vec<u8>> {
        std::fs::read(path).map_err(|source| BundleError::AssetRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> BundleResult<()> {
        atomic_write(path, content.as_bytes()).map_err(|source| BundleError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Write content to a file atomically (tempfile + rename)
///
/// A symlinked target is written through: the rename lands on the file the
/// link points at. An existing target keeps its permissions; a new one gets
/// the usual `0o644` minus umask rather than the temp file's `0o600`.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let target = resolve_symlink(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            parent.to_path_buf()
        }
        _ => PathBuf::from("."),
    };

    let existing = std::fs::metadata(&target).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".gamepack");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder.tempfile_in(&dir)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// Follow `path` to the file it names if it is a symlink
///
/// Dangling links resolve to their (possibly relative) link text.
fn resolve_symlink(path: &Path) -> std::io::Result<PathBuf> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match std::fs::canonicalize(path) {
            Ok(resolved) => Ok(resolved),
            Err(_) => {
                let link = std::fs::read_link(path)?;
                Ok(match path.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                })
            }
        },
        _ => Ok(path.to_path_buf()),
    }
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<PathBuf, Vec<u8>>>>,
    /// Paths whose writes fail with `PermissionDenied`
    pub read_only: std::sync::Arc<std::sync::Mutex<std::collections::HashSet<PathBuf>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, bytes: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), bytes.to_vec());
        self
    }

    pub fn deny_writes(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.lock().unwrap().insert(path.into());
        self
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read_bytes(&self, path: &Path) -> BundleResult<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| BundleError::AssetRead {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
            })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> BundleResult<()> {
        if self.read_only.lock().unwrap().contains(path) {
            return Err(BundleError::OutputWrite {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "Permission denied",
                ),
            });
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }
}
