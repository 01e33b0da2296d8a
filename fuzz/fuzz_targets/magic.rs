#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use magic_div::{Odd, SignedMagic, UnsignedMagic};

#[derive(Arbitrary, Debug)]
pub enum Operation {
    Signed32(i32, i32),
    Unsigned32(u32, u32),
    Signed64(i64, i64),
    Unsigned64(u64, u64),
    Inverse32(u32),
    Inverse64(u64),
}

fuzz_target!(|operations: Vec<Operation>| {
    for op in operations {
        match op {
            Operation::Signed32(d, n) => {
                if let Ok(m) = SignedMagic::<i32>::new(d) {
                    assert_eq!(n / m, (i64::from(n) / i64::from(d)) as i32);
                }
            }
            Operation::Unsigned32(d, n) => {
                if let Ok(m) = UnsignedMagic::<u32>::new(d) {
                    assert_eq!(n / m, n / d);
                }
            }
            Operation::Signed64(d, n) => {
                if let Ok(m) = SignedMagic::<i64>::new(d) {
                    assert_eq!(n / m, (i128::from(n) / i128::from(d)) as i64);
                }
            }
            Operation::Unsigned64(d, n) => {
                if let Ok(m) = UnsignedMagic::<u64>::new(d) {
                    assert_eq!(n / m, n / d);
                }
            }
            Operation::Inverse32(d) => {
                if let Some(odd) = Odd::new(d) {
                    assert_eq!(d.wrapping_mul(odd.inv_mod2k()), 1);
                }
            }
            Operation::Inverse64(d) => {
                if let Some(odd) = Odd::new(d) {
                    assert_eq!(d.wrapping_mul(odd.inv_mod2k()), 1);
                }
            }
        }
    }
});
