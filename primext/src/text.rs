//! String helpers.
//!
//! Every multi-step helper applies its steps in argument order, so the
//! result of one step is what the next step sees.

use crate::scope::ScopeExt;

/// Word delimiters used by [`StrExt::to_camel_case`] callers that have no preference.
pub const DEFAULT_WORD_DELIMITERS: [char; 2] = [' ', '_'];

/// Extension methods for `str`.
pub trait StrExt {
    /// Replace every occurrence of each `(old, new)` pair, left to right.
    ///
    /// ```rust
    /// use primext::text::StrExt;
    /// assert_eq!("a-b".replace_pairs(&[("a", "b"), ("b", "c")]), "c-c");
    /// ```
    fn replace_pairs(&self, pairs: &[(&str, &str)]) -> String;

    /// Strip each prefix once, in order.
    fn remove_prefixes<'a>(&'a self, prefixes: &[&str]) -> &'a str;

    /// Strip each suffix once, in order.
    ///
    /// ```rust
    /// use primext::text::StrExt;
    /// assert_eq!("archive.tar.gz".remove_suffixes(&[".gz", ".tar"]), "archive");
    /// assert_eq!("archive.tar.gz".remove_suffixes(&[".tar", ".gz"]), "archive.tar");
    /// ```
    fn remove_suffixes<'a>(&'a self, suffixes: &[&str]) -> &'a str;

    /// Whether the string is one of `true`, `false`, `t` or `f`.
    fn represents_boolean(&self, ignore_case: bool) -> bool;

    /// Whether the string starts with `prefix` and ends with `suffix`.
    fn is_surrounded_by(&self, prefix: &str, suffix: &str, ignore_case: bool) -> bool;

    /// Lowercase everything, uppercase the first character and every
    /// character following one of `delimiters`, then replace delimiters per
    /// `mapping` (skipped when the mapping is empty).
    ///
    /// ```rust
    /// use primext::text::StrExt;
    /// assert_eq!("HELLO big_world".to_camel_case(&[' ', '_'], &[('_', "-")]), "Hello Big-World");
    /// ```
    fn to_camel_case(&self, delimiters: &[char], mapping: &[(char, &str)]) -> String;

    /// [`to_camel_case`](Self::to_camel_case) with every delimiter replaced by `new_delimiter`.
    fn to_camel_case_with(&self, delimiters: &[char], new_delimiter: &str) -> String {
        let mapping: Vec<(char, &str)> = delimiters.iter().map(|&d| (d, new_delimiter)).collect();
        self.to_camel_case(delimiters, &mapping)
    }
}

impl StrExt for str {
    fn replace_pairs(&self, pairs: &[(&str, &str)]) -> String {
        pairs
            .iter()
            .fold(self.to_string(), |result, (old, new)| result.replace(old, new))
    }

    fn remove_prefixes<'a>(&'a self, prefixes: &[&str]) -> &'a str {
        prefixes
            .iter()
            .fold(self, |result, prefix| result.strip_prefix(prefix).unwrap_or(result))
    }

    fn remove_suffixes<'a>(&'a self, suffixes: &[&str]) -> &'a str {
        suffixes
            .iter()
            .fold(self, |result, suffix| result.strip_suffix(suffix).unwrap_or(result))
    }

    fn represents_boolean(&self, ignore_case: bool) -> bool {
        ["true", "false", "t", "f"]
            .iter()
            .any(|candidate| text_eq(self, candidate, ignore_case))
    }

    fn is_surrounded_by(&self, prefix: &str, suffix: &str, ignore_case: bool) -> bool {
        if !ignore_case {
            return self.starts_with(prefix) && self.ends_with(suffix);
        }
        chars_start_with(self.chars(), prefix.chars())
            && chars_start_with(self.chars().rev(), suffix.chars().rev())
    }

    fn to_camel_case(&self, delimiters: &[char], mapping: &[(char, &str)]) -> String {
        capitalize_fully(self, delimiters).modify_if(!mapping.is_empty(), |capitalized| {
            let pairs: Vec<(String, &str)> = mapping
                .iter()
                .map(|&(delimiter, replacement)| (delimiter.to_string(), replacement))
                .collect();
            let pairs: Vec<(&str, &str)> = pairs.iter().map(|(d, r)| (d.as_str(), *r)).collect();
            capitalized.replace_pairs(&pairs)
        })
    }
}

fn capitalize_fully(text: &str, delimiters: &[char]) -> String {
    let mut result = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for c in text.chars().flat_map(char::to_lowercase) {
        if delimiters.contains(&c) {
            capitalize_next = true;
            result.push(c);
        } else if capitalize_next {
            capitalize_next = false;
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}

fn chars_eq(a: char, b: char, ignore_case: bool) -> bool {
    a == b || (ignore_case && a.to_lowercase().eq(b.to_lowercase()))
}

fn text_eq(a: &str, b: &str, ignore_case: bool) -> bool {
    let mut rest = b.chars();
    a.chars()
        .all(|c| rest.next().is_some_and(|other| chars_eq(c, other, ignore_case)))
        && rest.next().is_none()
}

fn chars_start_with(
    mut text: impl Iterator<Item = char>,
    mut prefix: impl Iterator<Item = char>,
) -> bool {
    prefix.all(|p| text.next().is_some_and(|c| chars_eq(c, p, true)))
}
