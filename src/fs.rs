//! Filesystem abstraction used for every read and write made while
//! generating a skeleton.

use std::fs;
use std::io;
use std::path::Path;

/// The handful of filesystem operations generation needs.
pub trait Filesystem {
    /// Returns whether anything exists at `path`.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Returns whether `path` is a directory. Errors if it doesn't exist.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;

    /// Returns whether the directory at `path` has no entries.
    fn is_empty_dir(&self, path: &Path) -> io::Result<bool>;

    /// Creates `path` and all missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Writes `content` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// [`Filesystem`] backed by the real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl OsFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(fs::metadata(path)?.is_dir())
    }

    fn is_empty_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(fs::read_dir(path)?.next().is_none())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        fs::write(path, content)
    }
}

/// Writes a file, creating its parent directories first.
pub(crate) fn write_with_parents(
    fs: &dyn Filesystem,
    path: &Path,
    content: &[u8],
) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)?;
    }
    fs.write_file(path, content)
}
