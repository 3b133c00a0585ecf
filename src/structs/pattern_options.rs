//! Flags that shape how a search term is compiled.

use serde::{Deserialize, Serialize};

/// How a raw search term is turned into a matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternOptions {
    /// Treat the term as a regular expression instead of a literal
    pub regex: bool,
    /// Case-insensitive matching
    pub ignore_case: bool,
    /// Leftmost-longest matching instead of leftmost-first
    pub posix: bool,
}
