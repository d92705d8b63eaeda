// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lazy rooted traversal applying compiled include/exclude patterns.
//!
//! Pull-based: directories are listed as the iterator is advanced, so a
//! caller that stops early never pays for the rest of the tree.
//! Unreadable directories are logged and skipped; partial results beat
//! none for a file-discovery tool.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::fs::{EntryKind, WalkFs};
use crate::pattern::Pattern;

/// Lazy iterator over root-relative paths selected by a pattern set.
///
/// Created by [`Matcher::execute`](crate::Matcher::execute) /
/// [`Matcher::execute_in`](crate::Matcher::execute_in). Every call
/// starts a fresh enumeration: iterators are independent and traversal
/// is restartable. Yield order is deterministic: files of a directory
/// in name order, then its subdirectories depth-first in name order.
pub struct Walk<'a, F: WalkFs> {
    fs: F,
    root: PathBuf,
    includes: &'a [Pattern],
    excludes: &'a [Pattern],
    /// Directories still to list, as root-relative segment vectors.
    /// LIFO, so traversal is depth-first.
    pending: Vec<Vec<String>>,
    /// Files already selected from listed directories, in yield order.
    ready: VecDeque<PathBuf>,
}

impl<'a, F: WalkFs> Walk<'a, F> {
    pub(crate) fn new(
        fs: F,
        root: impl Into<PathBuf>,
        includes: &'a [Pattern],
        excludes: &'a [Pattern],
    ) -> Self {
        Self {
            fs,
            root: root.into(),
            includes,
            excludes,
            pending: vec![Vec::new()],
            ready: VecDeque::new(),
        }
    }

    /// List one pending directory, queueing selected files and
    /// descendable subdirectories.
    fn visit(&mut self, dir: Vec<String>) {
        let abs = self.root.join(rel_path(&dir));
        let mut entries = match self.fs.read_dir(&abs) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("skipping unreadable directory {}: {}", abs.display(), err);
                return;
            }
        };
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut subdirs = Vec::new();
        for entry in entries {
            let mut segments = dir.clone();
            segments.push(entry.name);
            match entry.kind {
                EntryKind::File => {
                    if self.selected(&segments) {
                        self.ready.push_back(rel_path(&segments));
                    }
                }
                EntryKind::Dir => {
                    if self.should_descend(&segments) {
                        subdirs.push(segments);
                    }
                }
            }
        }

        // Reverse before extending the LIFO stack so the
        // alphabetically-first subdirectory is visited next.
        subdirs.reverse();
        self.pending.extend(subdirs);
    }

    fn selected(&self, segments: &[String]) -> bool {
        self.includes.iter().any(|p| p.matches(segments))
            && !self.excludes.iter().any(|p| p.matches(segments))
    }

    /// Prune subtrees no include pattern can reach into.
    fn should_descend(&self, dir: &[String]) -> bool {
        self.includes.iter().any(|p| p.could_match_within(dir))
    }
}

impl<F: WalkFs> Iterator for Walk<'_, F> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(path) = self.ready.pop_front() {
                return Some(path);
            }
            let dir = self.pending.pop()?;
            self.visit(dir);
        }
    }
}

fn rel_path(segments: &[String]) -> PathBuf {
    segments.iter().collect()
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
