//! Word-level multiplication helpers.

/// Generates `(x * y) mod 2^BITS` assembled from half-width partial products.
///
/// With `x = x_hi * 2^H + x_lo` and `y = y_hi * 2^H + y_lo`, the product is
/// `x_lo*y_lo + (x_hi*y_lo + x_lo*y_hi) * 2^H + x_hi*y_hi * 2^(2H)`. The last
/// term is a multiple of `2^BITS` and is dropped. Every partial product of two
/// half words fits in a full word, so no low-order bits are ever lost.
macro_rules! impl_mul_lo {
    ($name:ident, $uint:ty) => {
        #[doc = concat!("Computes `(x * y) mod 2^", stringify!($uint), "::BITS` from half-width partial products.")]
        #[inline]
        pub(crate) const fn $name(x: $uint, y: $uint) -> $uint {
            const HALF: u32 = <$uint>::BITS / 2;
            const MASK: $uint = (1 << HALF) - 1;

            let (x_hi, x_lo) = (x >> HALF, x & MASK);
            let (y_hi, y_lo) = (y >> HALF, y & MASK);

            // Cross terms may carry past the top bit; the carry is a multiple of 2^BITS.
            let cross = (x_hi * y_lo).wrapping_add(x_lo * y_hi);
            (x_lo * y_lo).wrapping_add(cross << HALF)
        }
    };
}

impl_mul_lo!(mul_lo_u32, u32);
impl_mul_lo!(mul_lo_u64, u64);

/// Generates the high half of a widening multiplication, unsigned and signed.
macro_rules! impl_mul_hi {
    ($mulhu:ident, $mulhs:ident, $uint:ty, $int:ty, $wide_uint:ty, $wide_int:ty) => {
        /// Computes the high word of the unsigned double-width product `x * y`.
        #[inline(always)]
        pub(crate) const fn $mulhu(x: $uint, y: $uint) -> $uint {
            ((x as $wide_uint * y as $wide_uint) >> <$uint>::BITS) as $uint
        }

        /// Computes the high word of the signed double-width product `x * y`.
        #[inline(always)]
        pub(crate) const fn $mulhs(x: $int, y: $int) -> $int {
            ((x as $wide_int * y as $wide_int) >> <$int>::BITS) as $int
        }
    };
}

impl_mul_hi!(mulhu_u32, mulhs_i32, u32, i32, u64, i64);
impl_mul_hi!(mulhu_u64, mulhs_i64, u64, i64, u128, i128);
