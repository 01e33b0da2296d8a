//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

/// Truncating signed division of `n` by the signed word `d`, in a width where
/// `MIN / -1` cannot occur.
pub fn reference_div_i32(n: i32, d: i32) -> i32 {
    (i64::from(n) / i64::from(d)) as i32
}

/// Truncating signed division of `n` by the signed word `d`.
pub fn reference_div_i64(n: i64, d: i64) -> i64 {
    (i128::from(n) / i128::from(d)) as i64
}

/// Dividends every division check should include.
pub const EDGE_DIVIDENDS_I32: [i32; 8] = [0, 1, -1, 2, -2, i32::MAX, i32::MIN, i32::MIN + 1];

/// Dividends every unsigned division check should include.
pub const EDGE_DIVIDENDS_U32: [u32; 6] = [0, 1, 2, 0x7FFF_FFFF, 0x8000_0000, u32::MAX];
