//! Entry points taking the divisor as a plain integer.
//!
//! These accept a divisor in `[-2^31, 2^32)` with magnitude greater than one,
//! fold it to the word each routine works on, and report out-of-domain input
//! as an [`Error`] instead of a meaningless number.

use crate::{Divisor, Error, SignedMagic, UnsignedMagic, primitives::mul_lo_u32};

#[cfg(feature = "alloc")]
pub use crate::hex::format_hex32;

/// Computes the signed magic multiplier and shift for `divisor`.
///
/// Divisors in `[2^31, 2^32)` are treated as their negative 32-bit
/// counterpart; `2^32 - 1` folds to `-1` and is rejected.
pub fn compute_signed_magic(divisor: i64) -> Result<SignedMagic<i32>, Error> {
    Divisor::new(divisor)?.signed_magic()
}

/// Computes the unsigned magic multiplier, shift and add indicator for
/// `divisor`. Negative divisors are treated as `divisor + 2^32`.
pub fn compute_unsigned_magic(divisor: i64) -> Result<UnsignedMagic<u32>, Error> {
    Divisor::new(divisor)?.unsigned_magic()
}

/// Computes the multiplicative inverse of `divisor` modulo `2^32`.
///
/// Negative divisors are treated as `divisor + 2^32`. Even divisors have no
/// inverse and yield [`Error::EvenDivisor`].
pub fn compute_modular_inverse(divisor: i64) -> Result<u32, Error> {
    Divisor::new(divisor)?
        .to_odd()
        .map(|odd| odd.inv_mod2k())
        .ok_or(Error::EvenDivisor)
}

/// Multiplies the low 32 bits of `x` and `y` as a 32-bit machine would,
/// returning the product modulo `2^32`.
///
/// Any sign and magnitude is accepted; note that `-1 * 1` yields
/// `0xFFFF_FFFF` while `-1 * -1` yields `1`.
pub const fn mul32u(x: i64, y: i64) -> u32 {
    mul_lo_u32(x as u32, y as u32)
}
