//! In-memory filesystem fixture shared by unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::{DirEntry, WalkFs};

/// In-memory [`WalkFs`] built from path strings.
///
/// Directories marked denied return `PermissionDenied`; every listed
/// directory is recorded so tests can assert pruning behavior.
#[derive(Default)]
pub struct MemFs {
    dirs: BTreeMap<PathBuf, Vec<DirEntry>>,
    denied: Vec<PathBuf>,
    listed: RefCell<Vec<PathBuf>>,
}

impl MemFs {
    pub fn new() -> Self {
        let mut fs = Self::default();
        fs.dirs.insert(PathBuf::new(), Vec::new());
        fs
    }

    /// Register a file, creating every parent directory.
    pub fn file(mut self, path: &str) -> Self {
        let path = Path::new(path);
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        let parent = self.ensure_dirs(path.parent().unwrap());
        let entries = self.dirs.get_mut(&parent).unwrap();
        if !entries.iter().any(|e| e.name == name) {
            entries.push(DirEntry::file(name));
        }
        self
    }

    /// Register an (empty) directory, creating every parent.
    pub fn dir(mut self, path: &str) -> Self {
        self.ensure_dirs(Path::new(path));
        self
    }

    /// Mark a directory unreadable.
    pub fn denied(mut self, path: &str) -> Self {
        self.denied.push(PathBuf::from(path));
        self
    }

    /// Directories listed so far, in listing order.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }

    fn ensure_dirs(&mut self, dir: &Path) -> PathBuf {
        let mut current = PathBuf::new();
        for component in dir.components() {
            let parent = current.clone();
            current.push(component);
            let name = component.as_os_str().to_str().unwrap().to_string();
            let entries = self.dirs.entry(parent).or_default();
            if !entries.iter().any(|e| e.name == name) {
                entries.push(DirEntry::dir(name));
            }
            self.dirs.entry(current.clone()).or_default();
        }
        current
    }
}

impl WalkFs for MemFs {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        self.listed.borrow_mut().push(dir.to_path_buf());
        if self.denied.iter().any(|d| d == dir) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("denied: {}", dir.display()),
            ));
        }
        self.dirs
            .get(dir)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{}", dir.display())))
    }
}
