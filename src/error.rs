//! Error type.

use core::fmt;

/// The failure result for divisor validation and magic-number computation.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The input was not an optionally signed decimal integer.
    InvalidInput,

    /// The divisor lies outside the range accepted for its word size.
    OutOfRange,

    /// The divisor is `0`, `+1` or `-1`, or folds to one of them.
    DegenerateDivisor,

    /// A multiplicative inverse was requested for an even divisor.
    EvenDivisor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::OutOfRange => write!(f, "divisor out of range"),
            Self::DegenerateDivisor => write!(f, "divisor cannot be 0, +1, or -1"),
            Self::EvenDivisor => write!(f, "even divisor has no inverse"),
        }
    }
}

impl core::error::Error for Error {}
