#![allow(dead_code)]

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use skeletons::fs::{Filesystem, OsFilesystem};
use walkdir::WalkDir;

/// Filesystem that forwards to the real one, records every mutation and
/// can be told to fail the n-th file write.
#[derive(Default)]
pub struct RecordingFs {
    inner: OsFilesystem,
    fail_on_write: Option<usize>,
    pub created_dirs: RefCell<Vec<PathBuf>>,
    pub written_files: RefCell<Vec<PathBuf>>,
}

impl RecordingFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the write with the given zero-based index.
    pub fn failing_on_write(index: usize) -> Self {
        Self { fail_on_write: Some(index), ..Self::default() }
    }

    pub fn mutations(&self) -> usize {
        self.created_dirs.borrow().len() + self.written_files.borrow().len()
    }
}

impl Filesystem for RecordingFs {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        self.inner.is_dir(path)
    }

    fn is_empty_dir(&self, path: &Path) -> io::Result<bool> {
        self.inner.is_empty_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.created_dirs.borrow_mut().push(path.to_path_buf());
        self.inner.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        if self.fail_on_write == Some(self.written_files.borrow().len()) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "write refused"));
        }
        self.written_files.borrow_mut().push(path.to_path_buf());
        self.inner.write_file(path, content)
    }
}

/// Every path below `root`, relative and sorted, with `/` separators.
pub fn tree<P: AsRef<Path>>(root: P) -> Vec<String> {
    let root = root.as_ref();
    let mut paths: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap();
            let parts: Vec<_> = relative.components().map(|c| c.as_os_str().to_string_lossy()).collect();
            parts.join("/")
        })
        .collect();
    paths.sort();
    paths
}

/// Creates a few user files below `root`, mimicking an existing project.
pub fn populate<P: AsRef<Path>>(root: P) {
    let root = root.as_ref();
    std::fs::create_dir_all(root.join("notes")).unwrap();
    std::fs::write(root.join("README.md"), "# My project\n").unwrap();
    std::fs::write(root.join("notes/todo.txt"), "write posts\n").unwrap();
}
