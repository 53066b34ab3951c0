//! Multi-element operations on `Vec` used as a stack (top = last element).

use crate::error::StackError;

/// Extension methods for stacks.
pub trait StackExt<T> {
    /// The top `amount` elements without popping, bottom-to-top.
    fn peek_n(&self, amount: usize) -> Result<&[T], StackError>;

    /// Pop the top `amount` elements, top first.
    fn pop_n(&mut self, amount: usize) -> Result<Vec<T>, StackError>;
}

impl<T> StackExt<T> for Vec<T> {
    fn peek_n(&self, amount: usize) -> Result<&[T], StackError> {
        let start = bottom_index(self.len(), amount)?;
        Ok(&self[start..])
    }

    fn pop_n(&mut self, amount: usize) -> Result<Vec<T>, StackError> {
        let start = bottom_index(self.len(), amount)?;
        let mut popped = self.split_off(start);
        popped.reverse();
        Ok(popped)
    }
}

fn bottom_index(len: usize, amount: usize) -> Result<usize, StackError> {
    len.checked_sub(amount)
        .ok_or(StackError::InsufficientElements {
            requested: amount,
            available: len,
        })
}

/// Build a stack whose top is the last element yielded.
pub fn stack_of<T>(elements: impl IntoIterator<Item = T>) -> Vec<T> {
    elements.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_n_keeps_elements() {
        let stack = stack_of([1, 2, 3, 4]);
        assert_eq!(stack.peek_n(2).unwrap(), &[3, 4]);
        assert_eq!(stack.peek_n(0).unwrap(), &[] as &[i32]);
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn test_pop_n_is_top_first() {
        let mut stack = stack_of(vec!["a", "b", "c"]);
        assert_eq!(stack.pop_n(2).unwrap(), vec!["c", "b"]);
        assert_eq!(stack, vec!["a"]);
    }

    #[test]
    fn test_too_many_requested() {
        let mut stack = stack_of(0..2);
        let expected = StackError::InsufficientElements {
            requested: 3,
            available: 2,
        };
        assert_eq!(stack.peek_n(3).unwrap_err(), expected);
        assert_eq!(stack.pop_n(3).unwrap_err(), expected);
        assert_eq!(stack.len(), 2);
    }
}
