//! Pattern matching seam for trigger lines.

use regex::bytes::Regex;

/// Trait for line matching - regex by default, extensible for custom matchers.
pub trait LineMatcher: Send + Sync {
    /// Check whether the pattern occurs anywhere in the line.
    fn is_match(&self, line: &[u8]) -> bool;

    /// Human-readable pattern text, used as the key in reports and logs.
    fn pattern(&self) -> &str;
}

/// Regex-based line matcher (the default implementation).
impl LineMatcher for Regex {
    fn is_match(&self, line: &[u8]) -> bool {
        self.find(line).is_some()
    }

    fn pattern(&self) -> &str {
        self.as_str()
    }
}
