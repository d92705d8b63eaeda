// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob pattern compilation and whole-path matching.
//!
//! A [`Pattern`] is an ordered sequence of [`Segment`]s compiled from one
//! raw pattern string. Segment-level evaluation lives in [`segment`];
//! whole-path evaluation, including `**` expansion, lives here.

pub(crate) mod parser;
pub(crate) mod segment;

pub use segment::{CaseSensitivity, CharClass, Segment, Token};

pub(crate) use parser::SEPARATORS;

use crate::error::Result;

/// Whether a pattern selects paths into or out of the result set.
///
/// Excludes take precedence: a path matching any exclude is dropped no
/// matter how many includes it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Include,
    Exclude,
}

/// A compiled glob pattern: ordered segments plus its include/exclude
/// role and the case policy it was compiled under.
///
/// Immutable once compiled; matching never mutates, so any number of
/// traversals may share one pattern set.
#[derive(Debug, Clone)]
pub struct Pattern {
    segments: Vec<Segment>,
    kind: PatternKind,
    case: CaseSensitivity,
}

impl Pattern {
    pub(crate) fn new(segments: Vec<Segment>, kind: PatternKind, case: CaseSensitivity) -> Self {
        Self {
            segments,
            kind,
            case,
        }
    }

    /// Compile `raw` into a pattern.
    ///
    /// Fails on an empty pattern, an empty segment (consecutive or
    /// trailing separators), or an unterminated bracket class.
    pub fn compile(raw: &str, kind: PatternKind, case: CaseSensitivity) -> Result<Self> {
        parser::compile(raw, kind, case)
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The compiled segment sequence, in match order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match a full candidate path, given as root-relative segments.
    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
        matches_from(&self.segments, path, self.case)
    }

    /// Could any path strictly beneath directory `dir` still match?
    ///
    /// Conservative for `**` (always descends); exact otherwise. Used by
    /// the walker to prune subtrees, never to decide membership.
    pub(crate) fn could_match_within<S: AsRef<str>>(&self, dir: &[S]) -> bool {
        let mut rest = self.segments.as_slice();
        for seg in dir {
            match rest.first() {
                None => return false,
                Some(Segment::Recursive) => return true,
                Some(first) => {
                    if !first.matches(seg.as_ref(), self.case) {
                        return false;
                    }
                    rest = &rest[1..];
                }
            }
        }
        // Something must remain to match a child of `dir`.
        !rest.is_empty()
    }
}

/// Classic glob-with-`**` matching: `Recursive` tries every split point
/// between the segments it absorbs and the remaining pattern; every other
/// segment kind consumes exactly one path segment.
fn matches_from<S: AsRef<str>>(pattern: &[Segment], path: &[S], case: CaseSensitivity) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((Segment::Recursive, rest)) => {
            (0..=path.len()).any(|skip| matches_from(rest, &path[skip..], case))
        }
        Some((first, rest)) => match path.split_first() {
            Some((seg, path_rest)) => {
                first.matches(seg.as_ref(), case) && matches_from(rest, path_rest, case)
            }
            None => false,
        },
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
