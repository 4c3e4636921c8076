//! Shift operator trait implementations (Shl, Shr)
//!
//! Shifts are arithmetic: `n << k` is `n * 2^k` and `n >> k` is
//! `floor(n / 2^k)`, for negative values too. Shifting by a negative amount
//! panics. A right shift by more bits than the value holds gives 0 or -1; a
//! left shift too large to address panics.
//!

use crate::*;
use arithmetic::shift::{shl_bigint, shr_bigint};


#[inline]
fn left_shift_amount(bits: u128) -> usize {
    match usize::try_from(bits) {
        Ok(bits) => bits,
        Err(_) => panic!("attempt to shift left by {} bits, result would not fit in memory", bits),
    }
}

#[inline]
fn right_shift_amount(bits: u128) -> usize {
    usize::try_from(bits).unwrap_or(usize::MAX)
}

macro_rules! impl_shift {
    (unsigned: $($t:ty),*) => {
        $(
            impl_shift!(IMPL $t, |bits: $t| bits as u128);
        )*
    };
    (signed: $($t:ty),*) => {
        $(
            impl_shift!(IMPL $t, |bits: $t| {
                if bits < 0 {
                    panic!("attempt to shift by a negative amount");
                }
                bits as u128
            });
        )*
    };
    (IMPL $t:ty, $amount:expr) => {
        impl Shl<$t> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, rhs: $t) -> BigInt {
                shl_bigint(self, left_shift_amount($amount(rhs)))
            }
        }

        impl Shl<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, rhs: $t) -> BigInt {
                &self << rhs
            }
        }

        impl ShlAssign<$t> for BigInt {
            #[inline]
            fn shl_assign(&mut self, rhs: $t) {
                *self = &*self << rhs;
            }
        }

        impl Shr<$t> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, rhs: $t) -> BigInt {
                shr_bigint(self, right_shift_amount($amount(rhs)))
            }
        }

        impl Shr<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, rhs: $t) -> BigInt {
                &self >> rhs
            }
        }

        impl ShrAssign<$t> for BigInt {
            #[inline]
            fn shr_assign(&mut self, rhs: $t) {
                *self = &*self >> rhs;
            }
        }
    };
}

impl_shift!(unsigned: u8, u16, u32, u64, u128, usize);
impl_shift!(signed: i8, i16, i32, i64, i128, isize);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;
    use stdlib::str::FromStr;

    macro_rules! impl_case {
        ($name:ident: $n:literal << $k:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< shl_ $name >]() {
                    let n = BigInt::from_str($n).unwrap();
                    let expected = BigInt::from_str($expected).unwrap();
                    assert_eq!(&n << $k, expected);
                    assert_eq!(n.clone() << ($k as u64), expected);

                    let mut m = n;
                    m <<= $k;
                    assert_eq!(m, expected);
                }
            }
        };
        ($name:ident: $n:literal >> $k:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< shr_ $name >]() {
                    let n = BigInt::from_str($n).unwrap();
                    let expected = BigInt::from_str($expected).unwrap();
                    assert_eq!(&n >> $k, expected);
                    assert_eq!(n.clone() >> ($k as usize), expected);

                    let mut m = n;
                    m >>= $k;
                    assert_eq!(m, expected);
                }
            }
        };
    }

    impl_case!(one_by_64: "1" << 64 => "18446744073709551616");
    impl_case!(neg_one_by_1: "-1" << 1 => "-2");
    impl_case!(neg_by_100: "-3" << 100 => "-3802951800684688204490109616128");
    impl_case!(zero_by_1000: "0" << 1000 => "0");

    impl_case!(neg_one_by_1: "-1" >> 1 => "-1");
    impl_case!(neg_seven_by_1: "-7" >> 1 => "-4");
    impl_case!(seven_by_1: "7" >> 1 => "3");
    impl_case!(two_to_64_by_64: "18446744073709551616" >> 64 => "1");
    impl_case!(neg_by_100: "-3802951800684688204490109616128" >> 100 => "-3");
    impl_case!(neg_rounds_down: "-3802951800684688204490109616129" >> 100 => "-4");

    #[test]
    fn shr_saturates() {
        assert_eq!(BigInt::from(12345) >> u128::MAX, BigInt::from(0));
        assert_eq!(BigInt::from(-12345) >> u128::MAX, BigInt::from(-1));
        assert_eq!(BigInt::from(-12345) >> i64::MAX, BigInt::from(-1));
    }

    #[test]
    #[should_panic(expected = "negative")]
    fn shl_by_negative_panics() {
        let _ = BigInt::from(1) << -1i32;
    }

    #[test]
    #[should_panic(expected = "negative")]
    fn shr_by_negative_panics() {
        let _ = BigInt::from(1) >> -5i8;
    }

    #[test]
    fn shift_assign_leaves_copy_untouched() {
        let a = BigInt::from(u128::MAX);
        let mut b = a.clone();
        b <<= 3u8;
        b >>= 1u8;
        assert_eq!(a, BigInt::from(u128::MAX));
        assert_eq!(b, BigInt::from(u128::MAX) * 4u32);
    }
}
