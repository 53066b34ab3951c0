//! Timing and type-name diagnostics.

use std::any::type_name;
use std::time::{Duration, Instant};

/// A value together with how long it took to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    /// The computed value.
    pub value: T,

    /// Wall-clock time spent computing it.
    pub duration: Duration,
}

/// Run `f` and measure its wall-clock duration.
///
/// ```rust
/// let timed = primext::diag::time_execution(|| (1..=10).sum::<u32>());
/// assert_eq!(timed.value, 55);
/// ```
pub fn time_execution<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        duration: start.elapsed(),
    }
}

/// The type name without its module path, e.g. `Vec<alloc::string::String>`
/// for `Vec<String>`. Generic arguments are kept as the compiler prints them.
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let head_end = full.find('<').unwrap_or(full.len());
    let start = full[..head_end].rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}

/// [`simple_type_name`] for the type of `value`.
pub fn simple_type_name_of<T: ?Sized>(_value: &T) -> &'static str {
    simple_type_name::<T>()
}
