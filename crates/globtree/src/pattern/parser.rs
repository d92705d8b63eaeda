// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation: raw glob strings into segment sequences.
//!
//! All malformed-pattern detection happens here, at registration time;
//! traversal only ever sees compiled patterns.

use crate::error::{PatternError, Result};

use super::segment::{CharClass, ClassItem, Segment, Token};
use super::{CaseSensitivity, Pattern, PatternKind};

/// Path separator characters accepted in patterns.
///
/// Both conventions are accepted on every platform: patterns address the
/// traversal root, so a backslash never begins an absolute Windows path
/// here. This also means `\` is never an escape character.
pub(crate) const SEPARATORS: &[char] = &['/', '\\'];

/// Compile a raw pattern string into an ordered segment sequence.
///
/// All leading separators are stripped before splitting. The façade trims
/// one as well, so a pattern reaches its compiled form identically
/// whichever door it came through.
pub(crate) fn compile(raw: &str, kind: PatternKind, case: CaseSensitivity) -> Result<Pattern> {
    let trimmed = raw.trim_start_matches(SEPARATORS);
    if trimmed.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut segments = Vec::new();
    for part in trimmed.split(SEPARATORS) {
        if part.is_empty() {
            return Err(PatternError::EmptySegment {
                pattern: raw.to_string(),
            });
        }
        segments.push(parse_segment(part, raw)?);
    }

    Ok(Pattern::new(segments, kind, case))
}

/// Classify and compile one separator-delimited segment.
///
/// `raw` is the full pattern, carried only for error messages.
pub(crate) fn parse_segment(text: &str, raw: &str) -> Result<Segment> {
    if text == "**" {
        return Ok(Segment::Recursive);
    }
    if !text.contains(['*', '?', '[']) {
        return Ok(Segment::Literal(text.to_string()));
    }

    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                // Runs of stars collapse to one; `**` is only special as
                // a whole segment.
                if !matches!(tokens.last(), Some(Token::Star)) {
                    tokens.push(Token::Star);
                }
                i += 1;
            }
            '?' => {
                tokens.push(Token::Any);
                i += 1;
            }
            '[' => {
                let (class, consumed) =
                    parse_class(&chars[i..]).ok_or_else(|| PatternError::UnterminatedClass {
                        pattern: raw.to_string(),
                    })?;
                tokens.push(Token::Class(class));
                i += consumed;
            }
            c => {
                tokens.push(Token::Char(c));
                i += 1;
            }
        }
    }

    // A lone class is its own segment kind.
    if let [Token::Class(class)] = tokens.as_slice() {
        return Ok(Segment::Class(class.clone()));
    }
    Ok(Segment::Wildcard(tokens))
}

/// Parse a bracket class starting at `chars[0] == '['`.
///
/// Returns the class and the number of pattern characters consumed, or
/// `None` when the class is never closed. `]` as the first member is a
/// literal; `!` or `^` in first position negates; `-` first or last is a
/// literal member rather than a range.
fn parse_class(chars: &[char]) -> Option<(CharClass, usize)> {
    let mut i = 1;
    let mut negated = false;
    if matches!(chars.get(i), Some('!') | Some('^')) {
        negated = true;
        i += 1;
    }

    let first = i;
    let mut items = Vec::new();
    while i < chars.len() {
        let c = chars[i];
        if c == ']' && i > first {
            return Some((CharClass::new(negated, items), i + 1));
        }
        if chars.get(i + 1) == Some(&'-') && i + 2 < chars.len() && chars[i + 2] != ']' {
            items.push(ClassItem::Range(c, chars[i + 2]));
            i += 3;
        } else {
            items.push(ClassItem::Char(c));
            i += 1;
        }
    }
    None
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
