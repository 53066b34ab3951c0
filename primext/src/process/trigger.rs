//! Trigger tables mapping output patterns to canned responses.

use std::fmt;

use regex::bytes::Regex;
use serde::{Deserialize, Serialize};

use super::matcher::LineMatcher;
use crate::error::{Result, TriggerError};

/// A single pattern and the response written when it matches.
pub struct Trigger {
    matcher: Box<dyn LineMatcher>,
    response: String,
}

impl Trigger {
    /// Create a trigger from any matcher.
    pub fn new(matcher: impl LineMatcher + 'static, response: impl Into<String>) -> Self {
        Self {
            matcher: Box::new(matcher),
            response: response.into(),
        }
    }

    /// Check whether this trigger fires for the line.
    pub fn is_match(&self, line: &[u8]) -> bool {
        self.matcher.is_match(line)
    }

    /// The pattern text.
    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    /// The response written to the process input.
    pub fn response(&self) -> &str {
        &self.response
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("pattern", &self.pattern())
            .field("response", &self.response)
            .finish()
    }
}

/// Serializable form of a trigger, for loading tables from configuration.
///
/// ```rust
/// # use primext::process::{TriggerSpec, TriggerTable};
/// let specs: Vec<TriggerSpec> = serde_json::from_str(
///     r#"[{"pattern": "[Pp]assword:", "response": "secret\n"}]"#,
/// ).unwrap();
/// let table = TriggerTable::from_specs(specs).unwrap();
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSpec {
    /// Regex searched for anywhere in each line.
    pub pattern: String,

    /// Text written to the process input when the pattern matches.
    pub response: String,
}

/// Ordered set of triggers.
///
/// Triggers are evaluated in insertion order and every match fires, so two
/// entries with equivalent patterns both respond to the same line.
///
/// # Example
///
/// ```rust
/// use primext::process::TriggerTable;
///
/// # fn main() -> Result<(), primext::Error> {
/// let table = TriggerTable::new()
///     .on(r"Overwrite \(y/n\)\?", "y\n")?
///     .on_literal("Press [Enter] to continue", "\n");
/// assert_eq!(table.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TriggerTable {
    triggers: Vec<Trigger>,
}

impl TriggerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regex trigger, returning an error if the pattern is invalid.
    pub fn on(mut self, pattern: &str, response: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(TriggerError::from)?;
        self.push(regex, response);
        Ok(self)
    }

    /// Add a trigger that fires when `text` appears verbatim in a line.
    pub fn on_literal(mut self, text: &str, response: impl Into<String>) -> Self {
        // An escaped literal is always a valid pattern.
        if let Ok(regex) = Regex::new(&regex::escape(text)) {
            self.push(regex, response);
        }
        self
    }

    /// Add a trigger backed by a custom matcher.
    pub fn with_matcher(
        mut self,
        matcher: impl LineMatcher + 'static,
        response: impl Into<String>,
    ) -> Self {
        self.push(matcher, response);
        self
    }

    /// Append a trigger in place.
    pub fn push(&mut self, matcher: impl LineMatcher + 'static, response: impl Into<String>) {
        self.triggers.push(Trigger::new(matcher, response));
    }

    /// Compile a table from serializable specs.
    pub fn from_specs(specs: impl IntoIterator<Item = TriggerSpec>) -> Result<Self> {
        specs
            .into_iter()
            .try_fold(Self::new(), |table, spec| table.on(&spec.pattern, spec.response))
    }

    /// Triggers that match the line, in table order.
    pub fn matching<'a>(&'a self, line: &'a [u8]) -> impl Iterator<Item = &'a Trigger> + 'a {
        self.triggers.iter().filter(move |t| t.is_match(line))
    }

    /// Iterate over all triggers.
    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }

    /// Number of triggers.
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Check if the table has no triggers.
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

impl FromIterator<(Regex, String)> for TriggerTable {
    fn from_iter<I: IntoIterator<Item = (Regex, String)>>(iter: I) -> Self {
        Self {
            triggers: iter
                .into_iter()
                .map(|(regex, response)| Trigger::new(regex, response))
                .collect(),
        }
    }
}
