// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only filesystem access for the traversal engine.
//!
//! [`Walk`](crate::Walk) is generic over [`WalkFs`], so matching can run
//! against any tree-shaped source; [`OsFs`] is the `std::fs`
//! implementation behind [`Matcher::execute`](crate::Matcher::execute).

use std::io;
use std::path::Path;

/// What a directory entry is, as far as traversal cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One entry of a listed directory.
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Entry name (one path segment, not a full path).
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }
}

/// Minimal read-only filesystem abstraction for the walker.
///
/// Implement this to run matching over something other than the local
/// disk: an archive listing, a virtual tree, a test fixture.
pub trait WalkFs {
    /// List the entries of `dir` in any order; the walker sorts.
    ///
    /// An `Err` marks the whole directory unreadable; the walker logs
    /// and skips it without aborting the enumeration.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;
}

impl<F: WalkFs + ?Sized> WalkFs for &F {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(dir)
    }
}

/// `std::fs`-backed [`WalkFs`].
///
/// Symbolic links are never descended through: a link to a file lists as
/// a file, a link to a directory is skipped, so traversal cannot cycle.
/// Entries whose type cannot be read, and non-UTF-8 names (patterns are
/// UTF-8), are logged and skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl WalkFs for OsFs {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for result in std::fs::read_dir(dir)? {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("skipping unreadable entry in {}: {}", dir.display(), err);
                    continue;
                }
            };

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!("skipping non-UTF-8 name in {}", dir.display());
                continue;
            };

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    tracing::warn!("skipping {}: {}", entry.path().display(), err);
                    continue;
                }
            };

            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_symlink() {
                match std::fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_file() => EntryKind::File,
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::warn!("skipping {}: {}", entry.path().display(), err);
                        continue;
                    }
                }
            } else {
                // Sockets, fifos, devices.
                continue;
            };

            entries.push(DirEntry { name, kind });
        }
        Ok(entries)
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
