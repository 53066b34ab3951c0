//! Helpers for appending single values to a text sink.

use std::fmt::{self, Display, Write};

/// Append `element` using its `Display` form.
pub fn append_element<W: Write, T: Display>(buffer: &mut W, element: T) -> fmt::Result {
    write!(buffer, "{element}")
}

/// Append the text `transform` produces for `element`.
pub fn append_transformed<W, T, F, S>(buffer: &mut W, element: T, transform: F) -> fmt::Result
where
    W: Write,
    F: FnOnce(T) -> S,
    S: AsRef<str>,
{
    buffer.write_str(transform(element).as_ref())
}

/// Append `value` only when `condition` holds.
pub fn append_when<W: Write, T: Display>(buffer: &mut W, value: T, condition: bool) -> fmt::Result {
    if condition {
        append_element(buffer, value)?;
    }
    Ok(())
}
