//! Wrapper type for odd integers.

use crate::SplitMul;
use num_traits::PrimInt;

/// Wrapper type for odd integers.
///
/// Odd words are exactly the units of the ring of integers modulo `2^BITS`,
/// so every [`Odd`] value has a multiplicative inverse.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Odd<T>(pub(crate) T);

impl<T> Odd<T> {
    /// Create a new odd integer.
    ///
    /// Returns `None` if `n` is even.
    pub fn new(n: T) -> Option<Self>
    where
        T: PrimInt,
    {
        if n & T::one() == T::one() {
            Some(Self(n))
        } else {
            None
        }
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl<T: SplitMul> Odd<T> {
    /// Computes `1 / self mod 2^BITS`.
    ///
    /// Uses the Newton iteration `x' = x * (2 - self * x)`, seeded with
    /// `x = self`. The seed is already correct to 3 bits because
    /// `d * d == 1 mod 8` for odd `d`, and each step doubles the number of
    /// correct low bits: at most 4 updates for 32-bit words, 5 for 64-bit.
    pub fn inv_mod2k(&self) -> T {
        let d = self.0;
        let two = T::one().wrapping_add(&T::one());

        let mut xn = d;
        loop {
            let t = d.split_mul(xn);
            if t == T::one() {
                return xn;
            }
            xn = xn.split_mul(two.wrapping_sub(&t));
        }
    }
}
