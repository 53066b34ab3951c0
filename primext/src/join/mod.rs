//! Sequence joining into any `fmt::Write` sink.
//!
//! [`Joinable`] is implemented for every `IntoIterator`, so slices,
//! iterators, ranges and collections can all be joined:
//!
//! ```rust
//! use primext::join::{JoinOptions, Joinable};
//!
//! let options = JoinOptions::new()
//!     .prefix("[")
//!     .suffix("]")
//!     .limit(2);
//! assert_eq!((1..=5).join_to_string(&options), "[1, 2, ...]");
//! ```

mod append;
mod options;

pub use append::{append_element, append_transformed, append_when};
pub use options::JoinOptions;

use std::fmt::{self, Display};

use crate::error::Result;

/// Extension trait that joins the elements of an iterable into text.
///
/// The separator written before the final element of the sequence is
/// [`JoinOptions::last_separator`]. The final element is detected with one
/// element of lookahead, so single-pass iterators of unknown length are
/// joined without buffering or a second counting pass.
///
/// When a limit cuts the sequence short, the separator that precedes the
/// first dropped element is still written, followed by the truncation
/// marker: `[1, 2, 3]` with limit 1 yields `"1, ..."`.
pub trait Joinable: IntoIterator + Sized {
    /// Append the joined elements to `buffer` using their `Display` form.
    ///
    /// Returns the buffer for chaining.
    fn join_to<'w, W>(self, buffer: &'w mut W, options: &JoinOptions) -> Result<&'w mut W>
    where
        W: fmt::Write,
        Self::Item: Display,
    {
        write_joined(self, buffer, options, append_element)?;
        Ok(buffer)
    }

    /// Append the joined elements to `buffer`, projecting each through `transform`.
    fn join_to_with<'w, W, F, S>(
        self,
        buffer: &'w mut W,
        options: &JoinOptions,
        mut transform: F,
    ) -> Result<&'w mut W>
    where
        W: fmt::Write,
        F: FnMut(Self::Item) -> S,
        S: AsRef<str>,
    {
        write_joined(self, buffer, options, |buffer, element| {
            append_transformed(buffer, element, &mut transform)
        })?;
        Ok(buffer)
    }

    /// Join into a new `String`.
    fn join_to_string(self, options: &JoinOptions) -> String
    where
        Self::Item: Display,
    {
        let mut buffer = String::new();
        // Writing into a String cannot fail.
        let _ = write_joined(self, &mut buffer, options, append_element);
        buffer
    }

    /// Join into a new `String`, projecting each element through `transform`.
    fn join_to_string_with<F, S>(self, options: &JoinOptions, mut transform: F) -> String
    where
        F: FnMut(Self::Item) -> S,
        S: AsRef<str>,
    {
        let mut buffer = String::new();
        let _ = write_joined(self, &mut buffer, options, |buffer, element| {
            append_transformed(buffer, element, &mut transform)
        });
        buffer
    }
}

impl<I: IntoIterator> Joinable for I {}

fn write_joined<I, W, F>(
    elements: I,
    buffer: &mut W,
    options: &JoinOptions,
    mut write_element: F,
) -> fmt::Result
where
    I: IntoIterator,
    W: fmt::Write,
    F: FnMut(&mut W, I::Item) -> fmt::Result,
{
    buffer.write_str(&options.prefix)?;

    let mut elements = elements.into_iter().peekable();
    let mut count = 0usize;
    while let Some(element) = elements.next() {
        count += 1;
        if count > 1 {
            let separator = if elements.peek().is_some() {
                options.separator.as_str()
            } else {
                options.final_separator()
            };
            buffer.write_str(separator)?;
        }
        if options.is_past_limit(count) {
            break;
        }
        write_element(buffer, element)?;
    }

    if options.is_past_limit(count) {
        buffer.write_str(&options.truncated)?;
    }
    buffer.write_str(&options.suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<&'static str> {
        vec!["a", "b", "c"]
    }

    #[test]
    fn test_default_options() {
        assert_eq!(letters().join_to_string(&JoinOptions::default()), "a, b, c");
    }

    #[test]
    fn test_empty_sequence_is_prefix_and_suffix() {
        let options = JoinOptions::new().prefix("<").suffix(">").limit(0);
        let empty: Vec<u8> = Vec::new();
        assert_eq!(empty.join_to_string(&options), "<>");
    }

    #[test]
    fn test_single_element_has_no_separator() {
        let options = JoinOptions::new()
            .prefix("(")
            .suffix(")")
            .separator("--")
            .last_separator("==");
        assert_eq!([42].join_to_string(&options), "(42)");
    }

    #[test]
    fn test_last_separator_before_final_element() {
        let options = JoinOptions::new().last_separator(" and ");
        assert_eq!(letters().join_to_string(&options), "a, b and c");
        assert_eq!(["x", "y"].join_to_string(&options), "x and y");
    }

    #[test]
    fn test_unlimited_never_truncates() {
        let options = JoinOptions::new().separator("|").truncated("~");
        let joined = (1..=50).join_to_string(&options);
        assert!(!joined.contains('~'));
        assert_eq!(joined.matches('|').count(), 49);
    }

    #[test]
    fn test_limit_zero_emits_only_marker() {
        let options = JoinOptions::new().prefix("{").suffix("}").limit(0);
        assert_eq!(letters().join_to_string(&options), "{...}");
    }

    #[test]
    fn test_limit_keeps_separator_before_marker() {
        let options = JoinOptions::new().limit(1);
        assert_eq!(letters().join_to_string(&options), "a, ...");
    }

    #[test]
    fn test_limit_uses_last_separator_when_next_is_final() {
        // The dropped third element is the final one, so its separator is the last separator.
        let options = JoinOptions::new().last_separator(" & ").limit(2);
        assert_eq!(letters().join_to_string(&options), "a, b & ...");

        let options = JoinOptions::new().last_separator(" & ").limit(1);
        assert_eq!(letters().join_to_string(&options), "a, ...");
    }

    #[test]
    fn test_limit_equal_or_above_len_does_not_truncate() {
        assert_eq!(
            letters().join_to_string(&JoinOptions::new().limit(3)),
            "a, b, c"
        );
        assert_eq!(
            letters().join_to_string(&JoinOptions::new().limit(10)),
            "a, b, c"
        );
    }

    #[test]
    fn test_negative_signed_limit_is_unlimited() {
        let options = JoinOptions::new().limit_signed(-7);
        assert_eq!(letters().join_to_string(&options), "a, b, c");
    }

    #[test]
    fn test_transform() {
        let options = JoinOptions::new().separator(" ");
        let joined = [1, 2, 3].join_to_string_with(&options, |n| format!("#{n}"));
        assert_eq!(joined, "#1 #2 #3");
    }

    #[test]
    fn test_join_to_appends_and_chains() {
        let mut buffer = String::from("values: ");
        let options = JoinOptions::new().suffix(";");
        [1.5, 2.25]
            .iter()
            .join_to(&mut buffer, &options)
            .unwrap()
            .push_str(" done");
        assert_eq!(buffer, "values: 1.5, 2.25; done");
    }

    #[test]
    fn test_join_to_with_single_pass_iterator() {
        let mut buffer = String::new();
        let words = "one two three".split(' ');
        words
            .join_to_with(&mut buffer, &JoinOptions::new().last_separator(" or "), str::to_uppercase)
            .unwrap();
        assert_eq!(buffer, "ONE, TWO or THREE");
    }

    #[test]
    fn test_sink_error_is_reported() {
        struct Refusing;
        impl fmt::Write for Refusing {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let mut sink = Refusing;
        let result = [1, 2].join_to(&mut sink, &JoinOptions::default());
        assert!(matches!(result, Err(crate::Error::Format(_))));
    }
}
