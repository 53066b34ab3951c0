//! Join configuration.

use serde::{Deserialize, Serialize};

/// Formatting options for [`Joinable`](super::Joinable).
///
/// Defaults: separator `", "`, last separator equal to the separator, empty
/// prefix and suffix, no limit, truncation marker `"..."`.
///
/// Options are plain data and can be loaded from any serde format:
///
/// ```rust
/// # use primext::JoinOptions;
/// let options: JoinOptions = serde_json::from_str(r#"{"separator": "; ", "limit": 3}"#).unwrap();
/// assert_eq!(options.truncated, "...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinOptions {
    /// Text placed between elements.
    pub separator: String,

    /// Text placed before the final element. `None` reuses `separator`.
    pub last_separator: Option<String>,

    /// Text written before the first element.
    pub prefix: String,

    /// Text written after everything else.
    pub suffix: String,

    /// Maximum number of elements to write. `None` writes all of them.
    pub limit: Option<usize>,

    /// Marker written when `limit` cut the sequence short.
    pub truncated: String,
}

impl JoinOptions {
    /// Create options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the separator used before the final element.
    pub fn last_separator(mut self, separator: impl Into<String>) -> Self {
        self.last_separator = Some(separator.into());
        self
    }

    /// Set the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Write at most `limit` elements.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the limit from a signed count where any negative value means unlimited.
    pub fn limit_signed(mut self, limit: i64) -> Self {
        self.limit = usize::try_from(limit)
            .ok()
            .or_else(|| (limit > 0).then_some(usize::MAX));
        self
    }

    /// Remove any limit.
    pub fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Set the truncation marker.
    pub fn truncated(mut self, marker: impl Into<String>) -> Self {
        self.truncated = marker.into();
        self
    }

    /// The separator actually written before the final element.
    pub fn final_separator(&self) -> &str {
        self.last_separator.as_deref().unwrap_or(&self.separator)
    }

    /// Whether the 1-based element `count` falls beyond the limit.
    pub(crate) fn is_past_limit(&self, count: usize) -> bool {
        self.limit.is_some_and(|limit| count > limit)
    }
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            last_separator: None,
            prefix: String::new(),
            suffix: String::new(),
            limit: None,
            truncated: "...".to_string(),
        }
    }
}
