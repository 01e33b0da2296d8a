//! Magic numbers for division by an invariant integer.
//!
//! Dividing by a constant `d` can be replaced by a multiplication with a
//! precomputed "magic" multiplier, keeping only the high word of the
//! double-width product, followed by a right shift. The search for the
//! multiplier follows Granlund and Montgomery, "Division by Invariant Integers
//! using Multiplication" (PLDI 1994), in the formulation of H. S. Warren,
//! "Hacker's Delight", chapter 10.
//!
//! All intermediate quotients and remainders are carried in an unsigned type
//! twice as wide as the word, so doublings never overflow and every
//! comparison is exact.

mod signed;
mod unsigned;

/// Multiplier and shift for signed division by a constant.
///
/// For a divisor `d` and dividend `n`, the quotient `n / d` (truncated towards
/// zero) is obtained as:
///
/// ```text
/// q = mulhs(n, multiplier)
/// if d > 0 && multiplier < 0 { q += n }
/// if d < 0 && multiplier > 0 { q -= n }
/// q >>= shift                       (arithmetic)
/// q += q >>> (BITS - 1)             (add 1 if q is negative)
/// ```
///
/// See [`SignedMagic::divide`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SignedMagic<T> {
    divisor: T,
    multiplier: T,
    shift: u32,
}

impl<T: Copy> SignedMagic<T> {
    /// The divisor these constants were computed for.
    pub const fn divisor(&self) -> T {
        self.divisor
    }

    /// The magic multiplier, as the signed interpretation of its bit pattern.
    pub const fn multiplier(&self) -> T {
        self.multiplier
    }

    /// The shift applied after the high multiply.
    pub const fn shift(&self) -> u32 {
        self.shift
    }
}

/// Multiplier, shift and add indicator for unsigned division by a constant.
///
/// When [`UnsignedMagic::add`] is `false` the quotient is
/// `mulhu(n, multiplier) >> shift`. When it is `true` the ideal multiplier
/// needs one bit more than the word provides; `multiplier` then holds its low
/// word and the dividend has to be added back before shifting:
///
/// ```text
/// t = mulhu(n, multiplier)
/// q = (t + n) >> shift              (computed without losing the carry,
///                                    e.g. (((n - t) >> 1) + t) >> (shift - 1))
/// ```
///
/// See [`UnsignedMagic::divide`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UnsignedMagic<T> {
    divisor: T,
    multiplier: T,
    shift: u32,
    add: bool,
}

impl<T: Copy> UnsignedMagic<T> {
    /// The divisor these constants were computed for.
    pub const fn divisor(&self) -> T {
        self.divisor
    }

    /// The magic multiplier, modulo `2^BITS`.
    pub const fn multiplier(&self) -> T {
        self.multiplier
    }

    /// The shift applied after the high multiply (and add, if any).
    pub const fn shift(&self) -> u32 {
        self.shift
    }

    /// Whether the dividend must be added after the high multiply.
    pub const fn add(&self) -> bool {
        self.add
    }
}

/// Every constant derived from one divisor of a given word size.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MagicSet<S, U> {
    /// Signed magic, `None` when the divisor folds to `-1` as a signed word.
    pub signed: Option<SignedMagic<S>>,

    /// Unsigned magic.
    pub unsigned: UnsignedMagic<U>,

    /// Multiplicative inverse modulo `2^BITS`, `None` for even divisors.
    pub inverse: Option<U>,
}
