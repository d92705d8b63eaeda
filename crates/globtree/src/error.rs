/// Globtree error types.
///
/// Every malformed-pattern condition is detected while a pattern is
/// registered; traversal never raises these. I/O problems during a walk
/// are not errors at all: the affected entry is logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// Pattern was empty, or contained only separator characters.
    #[error("empty pattern")]
    Empty,

    /// Consecutive or trailing separators produced an empty segment.
    #[error("empty segment in pattern '{pattern}'")]
    EmptySegment { pattern: String },

    /// A character class opened with `[` was never closed.
    #[error("unterminated character class in pattern '{pattern}'")]
    UnterminatedClass { pattern: String },
}

/// Result type using globtree PatternError
pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
