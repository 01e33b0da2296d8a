//! Signed magic numbers.

use super::SignedMagic;
use crate::{
    Error,
    primitives::{mulhs_i32, mulhs_i64},
};
use core::ops::Div;

macro_rules! impl_signed_magic {
    ($int:ty, $uint:ty, $wide:ty, $mulhs:ident) => {
        impl SignedMagic<$int> {
            /// Computes the magic multiplier and shift for signed division by `divisor`.
            ///
            /// Returns [`Error::DegenerateDivisor`] for `-1`, `0` and `1`.
            pub const fn new(divisor: $int) -> Result<Self, Error> {
                const BITS: u32 = <$int>::BITS;
                const TWO_N1: $wide = 1 << (BITS - 1);

                if divisor >= -1 && divisor <= 1 {
                    return Err(Error::DegenerateDivisor);
                }

                let ad = divisor.unsigned_abs() as $wide;
                let t = TWO_N1 + (divisor < 0) as $wide;
                // |nc|, one less than the largest multiple of |d| not above t.
                let anc = t - 1 - t % ad;

                let mut p = BITS - 1;
                // q1, r1 = 2^p / anc, 2^p % anc
                let mut q1 = TWO_N1 / anc;
                let mut r1 = TWO_N1 - q1 * anc;
                // q2, r2 = 2^p / ad, 2^p % ad
                let mut q2 = TWO_N1 / ad;
                let mut r2 = TWO_N1 - q2 * ad;

                loop {
                    p += 1;

                    q1 *= 2;
                    r1 *= 2;
                    if r1 >= anc {
                        q1 += 1;
                        r1 -= anc;
                    }

                    q2 *= 2;
                    r2 *= 2;
                    if r2 >= ad {
                        q2 += 1;
                        r2 -= ad;
                    }

                    let delta = ad - r2;
                    if !(q1 < delta || (q1 == delta && r1 == 0)) {
                        break;
                    }
                }

                let magic = (q2 + 1) as $uint;
                let magic = if divisor < 0 {
                    magic.wrapping_neg()
                } else {
                    magic
                };

                Ok(Self {
                    divisor,
                    multiplier: magic as $int,
                    shift: p - BITS,
                })
            }

            /// Computes `dividend / divisor`, truncated towards zero, with the
            /// multiply-high, add and shift sequence these constants stand for.
            pub const fn divide(&self, dividend: $int) -> $int {
                let mut q = $mulhs(dividend, self.multiplier);
                if self.divisor > 0 && self.multiplier < 0 {
                    q = q.wrapping_add(dividend);
                } else if self.divisor < 0 && self.multiplier > 0 {
                    q = q.wrapping_sub(dividend);
                }
                q >>= self.shift;
                q.wrapping_add(((q as $uint) >> (<$int>::BITS - 1)) as $int)
            }

            /// Recovers a positive divisor from the multiplier and shift found in a
            /// multiply-high and shift sequence, as `ceil(2^(BITS + shift) / M)`
            /// with `M` the multiplier's unsigned bit pattern.
            ///
            /// For every `d > 1` this gives back `d` from the constants of
            /// [`SignedMagic::new(d)`](Self::new).
            ///
            /// Returns [`Error::InvalidInput`] for a zero multiplier and
            /// [`Error::OutOfRange`] when the shift is at least `BITS` or the
            /// divisor does not fit in a positive word.
            pub const fn divisor_from(multiplier: $int, shift: u32) -> Result<$int, Error> {
                const BITS: u32 = <$int>::BITS;

                if multiplier == 0 {
                    return Err(Error::InvalidInput);
                }
                if shift >= BITS {
                    return Err(Error::OutOfRange);
                }

                let m = multiplier as $uint as $wide;
                let scale: $wide = 1 << (BITS + shift);
                let d = (scale - 1) / m + 1;
                if d > <$int>::MAX as $wide {
                    return Err(Error::OutOfRange);
                }
                Ok(d as $int)
            }
        }

        impl Div<SignedMagic<$int>> for $int {
            type Output = $int;

            #[inline]
            fn div(self, rhs: SignedMagic<$int>) -> $int {
                rhs.divide(self)
            }
        }

        impl Div<&SignedMagic<$int>> for $int {
            type Output = $int;

            #[inline]
            fn div(self, rhs: &SignedMagic<$int>) -> $int {
                rhs.divide(self)
            }
        }
    };
}

impl_signed_magic!(i32, u32, u64, mulhs_i32);
impl_signed_magic!(i64, u64, u128, mulhs_i64);
