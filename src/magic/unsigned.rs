//! Unsigned magic numbers.

use super::UnsignedMagic;
use crate::{
    Error,
    primitives::{mulhu_u32, mulhu_u64},
};
use core::ops::Div;

macro_rules! impl_unsigned_magic {
    ($uint:ty, $wide:ty, $mulhu:ident) => {
        impl UnsignedMagic<$uint> {
            /// Computes the magic multiplier, shift and add indicator for unsigned
            /// division by `divisor`.
            ///
            /// Returns [`Error::DegenerateDivisor`] for `0` and `1`.
            pub const fn new(divisor: $uint) -> Result<Self, Error> {
                const BITS: u32 = <$uint>::BITS;
                const TWO_N: $wide = 1 << BITS;
                const TWO_N1: $wide = 1 << (BITS - 1);

                if divisor <= 1 {
                    return Err(Error::DegenerateDivisor);
                }

                let d = divisor as $wide;
                let mut add = false;
                // nc + 1 is the largest multiple of d not above 2^N.
                let nc = TWO_N - 1 - (TWO_N - d) % d;

                let mut p = BITS - 1;
                // q1, r1 = 2^p / nc, 2^p % nc
                let mut q1 = TWO_N1 / nc;
                let mut r1 = TWO_N1 - q1 * nc;
                // q2, r2 = (2^p - 1) / d, (2^p - 1) % d
                let mut q2 = (TWO_N1 - 1) / d;
                let mut r2 = (TWO_N1 - 1) - q2 * d;

                loop {
                    p += 1;

                    if r1 >= nc - r1 {
                        q1 = 2 * q1 + 1;
                        r1 = 2 * r1 - nc;
                    } else {
                        q1 *= 2;
                        r1 *= 2;
                    }

                    // Once q2 reaches 2^(N-1) the final multiplier needs N + 1 bits.
                    if r2 + 1 >= d - r2 {
                        if q2 >= TWO_N1 - 1 {
                            add = true;
                        }
                        q2 = 2 * q2 + 1;
                        r2 = 2 * r2 + 1 - d;
                    } else {
                        if q2 >= TWO_N1 {
                            add = true;
                        }
                        q2 *= 2;
                        r2 = 2 * r2 + 1;
                    }

                    let delta = d - 1 - r2;
                    if !(p < 2 * BITS && (q1 < delta || (q1 == delta && r1 == 0))) {
                        break;
                    }
                }

                Ok(Self {
                    divisor,
                    multiplier: (q2 + 1) as $uint,
                    shift: p - BITS,
                    add,
                })
            }

            /// Computes `dividend / divisor` with the multiply-high, optional add
            /// and shift sequence these constants stand for.
            pub const fn divide(&self, dividend: $uint) -> $uint {
                let t = $mulhu(dividend, self.multiplier) as $wide;
                let t = if self.add { t + dividend as $wide } else { t };
                // The shift reaches the full word width for divisors close to 2^N.
                (t >> self.shift) as $uint
            }

            /// Recovers the divisor from a multiplier, shift and add indicator, as
            /// `ceil(2^(BITS + shift) / M)` where `M` is the multiplier plus
            /// `2^BITS` when `add` is set.
            ///
            /// Gives back `d` from the constants of
            /// [`UnsignedMagic::new(d)`](Self::new) for every `d > 1`.
            ///
            /// Returns [`Error::InvalidInput`] for a zero multiplier without the
            /// add indicator and [`Error::OutOfRange`] when the shift exceeds
            /// `BITS` or the divisor does not fit in a word.
            pub const fn divisor_from(
                multiplier: $uint,
                shift: u32,
                add: bool,
            ) -> Result<$uint, Error> {
                const BITS: u32 = <$uint>::BITS;

                if multiplier == 0 && !add {
                    return Err(Error::InvalidInput);
                }
                if shift > BITS {
                    return Err(Error::OutOfRange);
                }

                let m = multiplier as $wide + if add { 1 << BITS } else { 0 };
                // 2^(BITS + shift) - 1, which is the widest value at shift == BITS.
                let scale_m1: $wide = if shift < BITS {
                    (1 << (BITS + shift)) - 1
                } else {
                    <$wide>::MAX
                };
                let d = scale_m1 / m + 1;
                if d > <$uint>::MAX as $wide {
                    return Err(Error::OutOfRange);
                }
                Ok(d as $uint)
            }
        }

        impl Div<UnsignedMagic<$uint>> for $uint {
            type Output = $uint;

            #[inline]
            fn div(self, rhs: UnsignedMagic<$uint>) -> $uint {
                rhs.divide(self)
            }
        }

        impl Div<&UnsignedMagic<$uint>> for $uint {
            type Output = $uint;

            #[inline]
            fn div(self, rhs: &UnsignedMagic<$uint>) -> $uint {
                rhs.divide(self)
            }
        }
    };
}

impl_unsigned_magic!(u32, u64, mulhu_u32);
impl_unsigned_magic!(u64, u128, mulhu_u64);
