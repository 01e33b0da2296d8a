//! Traits provided by this crate

use crate::primitives::{mul_lo_u32, mul_lo_u64};
use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingSub};

/// Unsigned machine words whose wrapping product is assembled from half-width
/// partial products, so that it is exact modulo `2^BITS` without relying on
/// a wider intermediate type.
pub trait SplitMul: PrimInt + Unsigned + WrappingAdd + WrappingSub {
    /// Computes `(self * rhs) mod 2^BITS`.
    fn split_mul(self, rhs: Self) -> Self;
}

impl SplitMul for u32 {
    #[inline]
    fn split_mul(self, rhs: Self) -> Self {
        mul_lo_u32(self, rhs)
    }
}

impl SplitMul for u64 {
    #[inline]
    fn split_mul(self, rhs: Self) -> Self {
        mul_lo_u64(self, rhs)
    }
}
