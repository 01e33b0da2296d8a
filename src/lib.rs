//! Pure Rust computation of "magic numbers" for division by invariant integers.
//!
//! # About
//! Compilers replace a division by a constant with a multiplication by a
//! precomputed "magic" multiplier, keeping the high word of the product, and a
//! shift (plus a small add or sign correction). This crate computes those
//! constants for 32-bit and 64-bit words, signed and unsigned, together with
//! the multiplicative inverse of odd divisors modulo `2^32` / `2^64`, which is
//! what exact division by an odd constant multiplies with.
//!
//! It does not generate code: it provides the numbers a code generator needs,
//! and a reference evaluation of the instruction sequence they stand for.
//!
//! # Goals
//! - No heap allocations i.e. `no_std`-friendly.
//! - Exact integer arithmetic only; every intermediate value is carried in a
//!   word twice as wide as the one being divided.
//! - `const fn` wherever possible, so that constants can be computed at
//!   compile time.
//!
//! # Usage
//! ```
//! use magic_div::{Divisor, SignedMagic, UnsignedMagic};
//!
//! let m = SignedMagic::<i32>::new(7)?;
//! assert_eq!(m.multiplier() as u32, 0x9249_2493);
//! assert_eq!(m.shift(), 2);
//! assert_eq!(-100i32 / m, -14);
//!
//! let m = UnsignedMagic::<u32>::new(7)?;
//! assert_eq!((m.multiplier(), m.shift(), m.add()), (0x2492_4925, 3, true));
//!
//! let d: Divisor = "-7".parse()?;
//! assert_eq!(d.inverse(), Some(0x4924_9249));
//! # Ok::<(), magic_div::Error>(())
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    unused_qualifications
)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

mod compute;
mod divisor;
mod error;
mod hex;
mod magic;
mod odd;
mod primitives;
mod traits;

pub use crate::{
    compute::{compute_modular_inverse, compute_signed_magic, compute_unsigned_magic, mul32u},
    divisor::{Divisor, WideDivisor},
    error::Error,
    hex::HexGrouped,
    magic::{MagicSet, SignedMagic, UnsignedMagic},
    odd::Odd,
    traits::SplitMul,
};

#[cfg(feature = "alloc")]
pub use crate::compute::format_hex32;
