//! Validated divisors and base-10 parsing.
//!
//! A divisor is accepted over the union of the signed and unsigned ranges of
//! its word size, so that `-7` and `4294967289` name the same 32-bit word.
//! The signed path folds large positive values onto their negative
//! counterpart and the unsigned path folds negative values onto the large
//! positive one.

use crate::{Error, MagicSet, Odd, SignedMagic, UnsignedMagic};
use core::{fmt, str::FromStr};

/// Parses blanks, an optional sign, one or more ASCII digits and blanks.
///
/// Magnitudes which do not fit in a `u64` are reported as
/// [`Error::OutOfRange`]; they are well-formed, just too large.
fn parse_decimal(s: &str) -> Result<i128, Error> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput);
    }

    let mut magnitude = 0u64;
    for b in digits.bytes() {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(b - b'0')))
            .ok_or(Error::OutOfRange)?;
    }

    let value = i128::from(magnitude);
    Ok(if negative { -value } else { value })
}

macro_rules! impl_divisor {
    ($name:ident, $repr:ty, $int:ty, $uint:ty, $doc:expr) => {
        #[doc = $doc]
        ///
        /// Invariant: the value lies in `[MIN, MAX]` and its magnitude exceeds one.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
        pub struct $name($repr);

        impl $name {
            /// Smallest accepted divisor, the minimum signed word.
            pub const MIN: $repr = <$int>::MIN as $repr;

            /// Largest accepted divisor, the maximum unsigned word.
            pub const MAX: $repr = <$uint>::MAX as $repr;

            /// Validates `value`.
            ///
            /// Returns [`Error::DegenerateDivisor`] for `0`, `+1` and `-1`, and
            /// [`Error::OutOfRange`] outside `[MIN, MAX]`.
            pub const fn new(value: $repr) -> Result<Self, Error> {
                if value >= -1 && value <= 1 {
                    return Err(Error::DegenerateDivisor);
                }
                if value < Self::MIN || value > Self::MAX {
                    return Err(Error::OutOfRange);
                }
                Ok(Self(value))
            }

            /// Parses and validates an optionally signed decimal string,
            /// allowing surrounding whitespace.
            pub fn from_decimal(s: &str) -> Result<Self, Error> {
                let value = parse_decimal(s)?;
                if (-1..=1).contains(&value) {
                    return Err(Error::DegenerateDivisor);
                }
                let value = <$repr>::try_from(value).map_err(|_| Error::OutOfRange)?;
                Self::new(value)
            }

            /// Returns the value as given.
            pub const fn get(self) -> $repr {
                self.0
            }

            /// The divisor as a signed word; values above the signed maximum wrap
            /// to negative.
            pub const fn to_signed(self) -> $int {
                self.0 as $uint as $int
            }

            /// The divisor as an unsigned word; negative values wrap to large
            /// positive ones.
            pub const fn to_unsigned(self) -> $uint {
                self.0 as $uint
            }

            /// Is the divisor odd?
            pub const fn is_odd(self) -> bool {
                self.0 & 1 == 1
            }

            /// The unsigned word as an [`Odd`], if the divisor is odd.
            pub fn to_odd(self) -> Option<Odd<$uint>> {
                Odd::new(self.to_unsigned())
            }

            /// Signed magic numbers for the folded signed word.
            ///
            /// Fails with [`Error::DegenerateDivisor`] when the value folds to `-1`.
            pub const fn signed_magic(self) -> Result<SignedMagic<$int>, Error> {
                SignedMagic::<$int>::new(self.to_signed())
            }

            /// Unsigned magic numbers for the folded unsigned word.
            pub const fn unsigned_magic(self) -> Result<UnsignedMagic<$uint>, Error> {
                UnsignedMagic::<$uint>::new(self.to_unsigned())
            }

            /// Multiplicative inverse of the unsigned word, if the divisor is odd.
            pub fn inverse(self) -> Option<$uint> {
                self.to_odd().map(|odd| odd.inv_mod2k())
            }

            /// Computes every constant derived from this divisor.
            pub fn magic(self) -> Result<MagicSet<$int, $uint>, Error> {
                Ok(MagicSet {
                    signed: self.signed_magic().ok(),
                    unsigned: self.unsigned_magic()?,
                    inverse: self.inverse(),
                })
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Error> {
                Self::from_decimal(s)
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = Error;

            fn try_from(value: $repr) -> Result<Self, Error> {
                Self::new(value)
            }
        }

        impl From<$name> for $repr {
            fn from(divisor: $name) -> $repr {
                divisor.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_divisor!(
    Divisor,
    i64,
    i32,
    u32,
    "A divisor for 32-bit division, in `[-2^31, 2^32 - 1]`."
);
impl_divisor!(
    WideDivisor,
    i128,
    i64,
    u64,
    "A divisor for 64-bit division, in `[-2^63, 2^64 - 1]`."
);
