//! Integer parity.

/// Even/odd checks for primitive integers.
///
/// Negative odd numbers are odd: `(-3).is_odd()` is `true`.
pub trait Parity {
    /// Whether the value is divisible by two.
    fn is_even(&self) -> bool;

    /// Whether the value is not divisible by two.
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

macro_rules! impl_parity {
    ($($ty:ty),*) => {
        $(
            impl Parity for $ty {
                fn is_even(&self) -> bool {
                    self % 2 == 0
                }
            }
        )*
    };
}

impl_parity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
