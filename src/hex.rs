//! Grouped hexadecimal display.

use core::fmt::{self, Write};

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Displays a word as zero-padded upper-case hex digits in groups of four,
/// e.g. `1234 ABCD` for `0x1234ABCDu32`.
///
/// Signed words are shown as their two's complement bit pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HexGrouped<T>(pub T);

macro_rules! impl_hex_grouped {
    ($($int:ty => $uint:ty),+ $(,)?) => {
        $(
            impl fmt::Display for HexGrouped<$int> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    const NIBBLES: u32 = <$uint>::BITS / 4;
                    let value = self.0 as $uint;

                    for i in (0..NIBBLES).rev() {
                        if i % 4 == 3 && i != NIBBLES - 1 {
                            f.write_char(' ')?;
                        }
                        let nibble = ((value >> (i * 4)) & 0xF) as usize;
                        f.write_char(HEX_DIGITS[nibble] as char)?;
                    }
                    Ok(())
                }
            }
        )+
    };
}

impl_hex_grouped!(u32 => u32, i32 => u32, u64 => u64, i64 => u64);

/// Renders a 32-bit word as `"XXXX XXXX"`.
#[cfg(feature = "alloc")]
pub fn format_hex32(value: u32) -> String {
    HexGrouped(value).to_string()
}
