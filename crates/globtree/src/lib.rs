//! globtree: include/exclude glob matching over rooted directory trees.
//!
//! Patterns are compiled into segment sequences (`*`, `?`, `[...]`
//! classes, and `**` for zero or more whole segments), then evaluated
//! either against a lazy directory walk ([`Matcher::execute`]) or
//! against known path strings ([`Matcher::is_match`]). A path is
//! selected when it matches at least one include pattern and no exclude
//! pattern.
//!
//! ```no_run
//! use globtree::Matcher;
//!
//! # fn main() -> globtree::Result<()> {
//! let mut matcher = Matcher::new();
//! matcher.add_patterns(["src/**/*.rs"], ["**/generated/**"])?;
//! for path in matcher.execute("my-project") {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fs;
pub mod matcher;
pub mod pattern;
pub mod walker;

pub use error::{PatternError, Result};
pub use fs::{DirEntry, EntryKind, OsFs, WalkFs};
pub use matcher::{Matcher, is_globbing_pattern};
pub use pattern::{CaseSensitivity, Pattern, PatternKind};
pub use walker::Walk;

#[cfg(test)]
pub mod test_utils;
