//! Conditional-call helpers usable on any value.

/// Conditional transformation of any value.
pub trait ScopeExt: Sized {
    /// Return `f(self)` when `condition` holds, otherwise `self`.
    ///
    /// ```rust
    /// use primext::scope::ScopeExt;
    /// let path = "logs".to_string().modify_if(true, |p| p + "/");
    /// assert_eq!(path, "logs/");
    /// ```
    fn modify_if(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition { f(self) } else { self }
    }

    /// Mutate `self` in place through `f` when `condition` holds, then return it.
    fn transform_if(mut self, condition: bool, f: impl FnOnce(&mut Self)) -> Self {
        if condition {
            f(&mut self);
        }
        self
    }

    /// Fail with `error(&self)` when `condition(&self)` holds, otherwise return `self`.
    ///
    /// ```rust
    /// use primext::scope::ScopeExt;
    /// let port = 80u16.fail_if(|p| *p < 1024, |p| format!("port {p} is privileged"));
    /// assert_eq!(port.unwrap_err(), "port 80 is privileged");
    /// ```
    fn fail_if<E>(
        self,
        condition: impl FnOnce(&Self) -> bool,
        error: impl FnOnce(&Self) -> E,
    ) -> Result<Self, E> {
        if condition(&self) {
            Err(error(&self))
        } else {
            Ok(self)
        }
    }

    /// Alias of [`fail_if`](Self::fail_if).
    fn throw_if<E>(
        self,
        condition: impl FnOnce(&Self) -> bool,
        error: impl FnOnce(&Self) -> E,
    ) -> Result<Self, E> {
        self.fail_if(condition, error)
    }
}

impl<T> ScopeExt for T {}

/// Side effects keyed on `Option` state that pass the option through.
pub trait OptionExt<T> {
    /// Run `f` if the option is `None`.
    fn on_none(self, f: impl FnOnce()) -> Self;

    /// Run `f` with the value if the option is `Some`.
    fn on_some(self, f: impl FnOnce(&T)) -> Self;
}

impl<T> OptionExt<T> for Option<T> {
    fn on_none(self, f: impl FnOnce()) -> Self {
        if self.is_none() {
            f();
        }
        self
    }

    fn on_some(self, f: impl FnOnce(&T)) -> Self {
        if let Some(value) = &self {
            f(value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modify_if() {
        assert_eq!(2i32.modify_if(true, |n| n * 10), 20);
        assert_eq!(2i32.modify_if(false, |n| n * 10), 2);
    }

    #[test]
    fn test_transform_if_mutates_in_place() {
        let list = vec![3, 1, 2].transform_if(true, |v| v.sort());
        assert_eq!(list, vec![1, 2, 3]);
        let list = vec![3, 1, 2].transform_if(false, |v| v.sort());
        assert_eq!(list, vec![3, 1, 2]);
    }

    #[test]
    fn test_fail_if() {
        let ok: Result<&str, String> = "name".fail_if(|s| s.is_empty(), |_| "empty".into());
        assert_eq!(ok, Ok("name"));

        let err = "".throw_if(|s| s.is_empty(), |_| "empty");
        assert_eq!(err, Err("empty"));
    }

    #[test]
    fn test_option_side_effects() {
        let mut log = Vec::new();
        let value = Some(5i32).on_some(|v| log.push(format!("some {v}")));
        assert_eq!(value, Some(5));

        let none: Option<i32> = None.on_none(|| log.push("none".to_string()));
        assert_eq!(none, None);

        Some(1i32).on_none(|| log.push("unreachable".to_string()));
        assert_eq!(log, vec!["some 5", "none"]);
    }
}
