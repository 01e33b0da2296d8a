//! Division through magic numbers checked against native division.

mod common;

use common::{EDGE_DIVIDENDS_I32, EDGE_DIVIDENDS_U32, reference_div_i32, reference_div_i64};
use magic_div::{SignedMagic, UnsignedMagic};
use proptest::{collection::vec, prelude::*};

prop_compose! {
    fn signed_divisor()(d in any::<i32>().prop_filter("|d| > 1", |d| !(-1..=1).contains(d))) -> i32 {
        d
    }
}
prop_compose! {
    /// Divisors near a power of two, where the magic search takes the most steps.
    fn signed_divisor_near_pow2()(k in 1..31u32, delta in -2..=2i32, negative in any::<bool>()) -> i32 {
        let d = (1i32 << k).saturating_add(delta).max(2);
        if negative { -d } else { d }
    }
}
prop_compose! {
    fn unsigned_divisor()(d in 2..=u32::MAX) -> u32 {
        d
    }
}
prop_compose! {
    fn unsigned_divisor_near_pow2()(k in 1..32u32, delta in -2..=2i64) -> u32 {
        ((1i64 << k) + delta).clamp(2, u32::MAX as i64) as u32
    }
}

/// Dividends around the multiples `q * d` of the divisor, where an off-by-one
/// multiplier would show first.
fn around_multiples_i32(d: i32, quotients: &[i32]) -> impl Iterator<Item = i32> + '_ {
    quotients
        .iter()
        .filter_map(move |&q| q.checked_mul(d))
        .flat_map(|n| [n.wrapping_sub(1), n, n.wrapping_add(1)])
}

fn around_multiples_u32(d: u32, quotients: &[u32]) -> impl Iterator<Item = u32> + '_ {
    quotients
        .iter()
        .filter_map(move |&q| q.checked_mul(d))
        .flat_map(|n| [n.wrapping_sub(1), n, n.wrapping_add(1)])
}

fn check_signed32(d: i32, dividends: impl IntoIterator<Item = i32>) -> Result<(), TestCaseError> {
    let m = SignedMagic::<i32>::new(d).unwrap();
    for n in dividends {
        prop_assert_eq!(n / m, reference_div_i32(n, d), "{} / {}", n, d);
    }
    Ok(())
}

fn check_unsigned32(d: u32, dividends: impl IntoIterator<Item = u32>) -> Result<(), TestCaseError> {
    let m = UnsignedMagic::<u32>::new(d).unwrap();
    for n in dividends {
        prop_assert_eq!(n / m, n / d, "{} / {}", n, d);
    }
    Ok(())
}

proptest! {
    #[test]
    fn signed32(d in signed_divisor(), ns in vec(any::<i32>(), 64), qs in vec(any::<i32>(), 16)) {
        check_signed32(d, EDGE_DIVIDENDS_I32)?;
        check_signed32(d, ns)?;
        check_signed32(d, around_multiples_i32(d, &qs).collect::<Vec<_>>())?;
    }

    #[test]
    fn signed32_near_pow2(d in signed_divisor_near_pow2(), ns in vec(any::<i32>(), 64)) {
        check_signed32(d, EDGE_DIVIDENDS_I32)?;
        check_signed32(d, ns)?;
        check_signed32(d, around_multiples_i32(d, &[1, 2, 3, -1, -2, -3]).collect::<Vec<_>>())?;
    }

    #[test]
    fn unsigned32(d in unsigned_divisor(), ns in vec(any::<u32>(), 64), qs in vec(any::<u32>(), 16)) {
        check_unsigned32(d, EDGE_DIVIDENDS_U32)?;
        check_unsigned32(d, ns)?;
        check_unsigned32(d, around_multiples_u32(d, &qs).collect::<Vec<_>>())?;
    }

    #[test]
    fn unsigned32_near_pow2(d in unsigned_divisor_near_pow2(), ns in vec(any::<u32>(), 64)) {
        check_unsigned32(d, EDGE_DIVIDENDS_U32)?;
        check_unsigned32(d, ns)?;
        check_unsigned32(d, around_multiples_u32(d, &[1, 2, 3, u32::MAX / d]).collect::<Vec<_>>())?;
    }

    #[test]
    fn unsigned32_add_flag_means_wide_multiplier(d in unsigned_divisor()) {
        // With the add indicator set the exact multiplier is 2^32 + multiplier.
        // It is ceil(2^(32 + shift) / d), so M * d overshoots 2^(32 + shift) by less than d.
        let m = UnsignedMagic::<u32>::new(d).unwrap();
        let full = u128::from(m.multiplier()) + if m.add() { 1 << 32 } else { 0 };
        let scale = 1u128 << (32 + m.shift());
        let product = full * u128::from(d);
        prop_assert!(product >= scale);
        prop_assert!(product - scale < u128::from(d));
        prop_assert!(m.add() || full < 1 << 32);
    }

    #[test]
    fn signed64(d in any::<i64>().prop_filter("|d| > 1", |d| !(-1..=1).contains(d)), ns in vec(any::<i64>(), 64)) {
        let m = SignedMagic::<i64>::new(d).unwrap();
        for n in ns.into_iter().chain([0, 1, -1, i64::MAX, i64::MIN, i64::MIN + 1]) {
            prop_assert_eq!(n / m, reference_div_i64(n, d), "{} / {}", n, d);
        }
    }

    #[test]
    fn unsigned64(d in 2..=u64::MAX, ns in vec(any::<u64>(), 64)) {
        let m = UnsignedMagic::<u64>::new(d).unwrap();
        for n in ns.into_iter().chain([0, 1, 1 << 63, u64::MAX]) {
            prop_assert_eq!(n / m, n / d, "{} / {}", n, d);
        }
    }

    #[test]
    fn signed_divisor_recovered(d in 2..=i32::MAX) {
        let m = SignedMagic::<i32>::new(d).unwrap();
        prop_assert_eq!(SignedMagic::<i32>::divisor_from(m.multiplier(), m.shift()), Ok(d));
    }

    #[test]
    fn signed_divisor_recovered_near_pow2(d in signed_divisor_near_pow2()) {
        let d = d.abs();
        let m = SignedMagic::<i32>::new(d).unwrap();
        prop_assert_eq!(SignedMagic::<i32>::divisor_from(m.multiplier(), m.shift()), Ok(d));
    }

    #[test]
    fn unsigned_divisor_recovered(d in unsigned_divisor()) {
        let m = UnsignedMagic::<u32>::new(d).unwrap();
        prop_assert_eq!(UnsignedMagic::<u32>::divisor_from(m.multiplier(), m.shift(), m.add()), Ok(d));
    }

    #[test]
    fn divisor_recovered64(d in 2..=i64::MAX, u in 2..=u64::MAX) {
        let m = SignedMagic::<i64>::new(d).unwrap();
        prop_assert_eq!(SignedMagic::<i64>::divisor_from(m.multiplier(), m.shift()), Ok(d));

        let m = UnsignedMagic::<u64>::new(u).unwrap();
        prop_assert_eq!(UnsignedMagic::<u64>::divisor_from(m.multiplier(), m.shift(), m.add()), Ok(u));
    }

    #[test]
    fn repeatable(d in signed_divisor()) {
        prop_assert_eq!(SignedMagic::<i32>::new(d), SignedMagic::<i32>::new(d));
        prop_assert_eq!(UnsignedMagic::<u32>::new(d as u32), UnsignedMagic::<u32>::new(d as u32));
    }
}

#[test]
fn small_divisors_exhaustive_dividends() {
    let dividends: Vec<i32> = (-2000..=2000)
        .chain(EDGE_DIVIDENDS_I32)
        .chain((0..31).map(|k| 1 << k))
        .collect();

    for d in (2..=300).chain(-300..=-2) {
        let m = SignedMagic::<i32>::new(d).unwrap();
        for &n in &dividends {
            assert_eq!(n / m, n / d, "{n} / {d}");
        }

        let d = d as u32;
        let m = UnsignedMagic::<u32>::new(d).unwrap();
        for &n in &dividends {
            let n = n as u32;
            assert_eq!(n / m, n / d, "{n} / {d}");
        }
    }
}

#[test]
fn divisor_two() {
    let m = SignedMagic::<i32>::new(2).unwrap();
    assert_eq!((m.multiplier() as u32, m.shift()), (0x8000_0001, 0));

    let m = UnsignedMagic::<u32>::new(2).unwrap();
    assert_eq!(m.shift(), 0);
    assert!(!m.add());
}

#[test]
fn divisor_seven() {
    let m = SignedMagic::<i32>::new(7).unwrap();
    assert_eq!((m.multiplier() as u32, m.shift()), (0x9249_2493, 2));

    let m = UnsignedMagic::<u32>::new(7).unwrap();
    assert_eq!((m.multiplier(), m.shift(), m.add()), (0x2492_4925, 3, true));
}
