// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Include/exclude matcher façade.
//!
//! Owns the registered pattern set. Registration compiles eagerly, so a
//! malformed pattern fails fast; traversal and single-path evaluation
//! then run against immutable compiled patterns.

use std::path::PathBuf;

use crate::error::Result;
use crate::fs::{OsFs, WalkFs};
use crate::pattern::{CaseSensitivity, Pattern, PatternKind, SEPARATORS};
use crate::walker::Walk;

/// Check whether `text` should be treated as a globbing pattern rather
/// than a literal path.
///
/// Deliberately narrow: only `*` qualifies. `?`-only and bracket-only
/// strings are NOT flagged. This is a routing heuristic with
/// long-standing caller expectations, not a pattern validity check.
pub fn is_globbing_pattern(text: &str) -> bool {
    text.contains('*')
}

/// Accumulates include/exclude patterns and evaluates them against a
/// rooted directory tree.
///
/// Patterns always address the traversal root, so a leading `/` or `\`
/// is redundant and exactly one is trimmed at registration; it is never
/// read as absolute-path syntax. `\` is a path separator here, never an
/// escape.
///
/// Registration takes `&mut self` while traversal borrows `&self`: a
/// pattern set cannot change while any [`Walk`] is running over it, so
/// concurrent traversals over one matcher are safe by construction.
#[derive(Debug, Default)]
pub struct Matcher {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
    case: CaseSensitivity,
}

impl Matcher {
    /// Case-sensitive matcher, the portable default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select case handling explicitly. Folding is ASCII-only, and the
    /// choice is fixed for every pattern registered afterwards.
    pub fn with_case_sensitivity(case: CaseSensitivity) -> Self {
        Self {
            case,
            ..Self::default()
        }
    }

    /// Register one include pattern.
    pub fn add_include(&mut self, pattern: &str) -> Result<&mut Self> {
        let compiled = self.compile(pattern, PatternKind::Include)?;
        self.includes.push(compiled);
        Ok(self)
    }

    /// Register one exclude pattern.
    pub fn add_exclude(&mut self, pattern: &str) -> Result<&mut Self> {
        let compiled = self.compile(pattern, PatternKind::Exclude)?;
        self.excludes.push(compiled);
        Ok(self)
    }

    /// Register include and exclude patterns together.
    ///
    /// All-or-nothing: every pattern is compiled before any is
    /// registered, so one malformed pattern leaves the matcher
    /// untouched. Pass an empty iterator such as
    /// `std::iter::empty::<&str>()` when there are no excludes.
    pub fn add_patterns<I, E>(&mut self, includes: I, excludes: E) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let includes = includes
            .into_iter()
            .map(|p| self.compile(p.as_ref(), PatternKind::Include))
            .collect::<Result<Vec<_>>>()?;
        let excludes = excludes
            .into_iter()
            .map(|p| self.compile(p.as_ref(), PatternKind::Exclude))
            .collect::<Result<Vec<_>>>()?;
        self.includes.extend(includes);
        self.excludes.extend(excludes);
        Ok(())
    }

    /// Evaluate one root-relative path without touching the filesystem.
    ///
    /// True iff the path matches at least one include pattern and no
    /// exclude pattern. Separators in `path` follow the same rules as
    /// patterns; redundant leading separators are ignored.
    pub fn is_match(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split(SEPARATORS).filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return false;
        }
        self.includes.iter().any(|p| p.matches(&segments))
            && !self.excludes.iter().any(|p| p.matches(&segments))
    }

    /// Walk `root` on the local filesystem, lazily yielding selected
    /// root-relative paths.
    pub fn execute(&self, root: impl Into<PathBuf>) -> Walk<'_, OsFs> {
        self.execute_in(OsFs, root)
    }

    /// Walk `root` through a custom [`WalkFs`] source.
    pub fn execute_in<F: WalkFs>(&self, fs: F, root: impl Into<PathBuf>) -> Walk<'_, F> {
        Walk::new(fs, root, &self.includes, &self.excludes)
    }

    fn compile(&self, raw: &str, kind: PatternKind) -> Result<Pattern> {
        Pattern::compile(trim_leading_separator(raw), kind, self.case)
    }
}

/// Strip exactly one leading separator: the matcher runs from the
/// provided root only, so a leading `/` or `\` carries no meaning.
fn trim_leading_separator(pattern: &str) -> &str {
    pattern.strip_prefix(['/', '\\']).unwrap_or(pattern)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
