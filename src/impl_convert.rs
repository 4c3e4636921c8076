//! Code for implementing From/To BigInt
//!
//! Every primitive is widened to 128 bits of two's complement, split into
//! four words, and canonicalized.
//!

use crate::*;


impl BigInt {
    /// Build from the low 128 bits of a two's-complement value
    fn from_u128_bits(negative: bool, bits: u128) -> BigInt {
        let words = [
            bits as u32,
            (bits >> 32) as u32,
            (bits >> 64) as u32,
            (bits >> 96) as u32,
        ];
        BigInt::from_slice(negative, &words)
    }

    /// Low 128 bits of the two's-complement value, if it fits in 128 bits
    /// of the given signedness
    fn to_u128_bits(&self, signed: bool) -> Option<u128> {
        if self.word_len() > 4 {
            return None;
        }
        if !signed && self.negative {
            return None;
        }
        // a full-width value whose top bit disagrees with its sign does not fit i128
        if signed && self.word_len() == 4 && arithmetic::sign_of_top_word(self.words()) != self.negative {
            return None;
        }

        let bits = (0..4).rev().fold(0u128, |acc, i| acc << 32 | self.extended_word(i) as u128);
        Some(bits)
    }
}

macro_rules! impl_from_int_primitive {
    (unsigned: $($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                #[inline]
                fn from(n: $t) -> Self {
                    BigInt::from_u128_bits(false, n as u128)
                }
            }

            impl_from_int_primitive!(REF $t);
        )*
    };
    (signed: $($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                #[inline]
                fn from(n: $t) -> Self {
                    BigInt::from_u128_bits(n < 0, n as i128 as u128)
                }
            }

            impl_from_int_primitive!(REF $t);
        )*
    };
    (REF $t:ty) => {
        impl From<&$t> for BigInt {
            #[inline]
            fn from(n: &$t) -> Self {
                BigInt::from(*n)
            }
        }
    };
}

impl_from_int_primitive!(unsigned: u8, u16, u32, u64, u128, usize);
impl_from_int_primitive!(signed: i8, i16, i32, i64, i128, isize);


impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128_bits(true).map(|bits| bits as i128)
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_u128_bits(false)
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $t:ty, $n:expr => [$($w:literal),*]) => {
            paste! {
                #[test]
                fn [< from_ $name >]() {
                    let n: $t = $n;
                    let value = BigInt::from(n);
                    let expected: &[u32] = &[$($w),*];
                    assert_eq!(value.words(), expected);
                    assert_eq!(value.is_negative(), n.to_i128().map_or(false, |v| v < 0));
                    assert!(value.is_canonical());
                    assert_eq!(BigInt::from(&n), value);
                }
            }
        };
    }

    impl_case!(u8_max: u8, u8::MAX => [0xff]);
    impl_case!(u32_max: u32, u32::MAX => [0xffffffff]);
    impl_case!(u64_max: u64, u64::MAX => [0xffffffff, 0xffffffff]);
    impl_case!(u128_max: u128, u128::MAX => [0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff]);
    impl_case!(usize_zero: usize, 0 => []);
    impl_case!(i8_neg_one: i8, -1 => []);
    impl_case!(i16_min: i16, i16::MIN => [0xffff8000]);
    impl_case!(i32_min: i32, i32::MIN => [0x80000000]);
    impl_case!(i32_max: i32, i32::MAX => [0x7fffffff]);
    impl_case!(i64_neg_two_to_32: i64, -(1 << 32) => [0]);
    impl_case!(i64_min: i64, i64::MIN => [0, 0x80000000]);
    impl_case!(i128_min: i128, i128::MIN => [0, 0, 0, 0x80000000]);
    impl_case!(i128_max: i128, i128::MAX => [0xffffffff, 0xffffffff, 0xffffffff, 0x7fffffff]);
    impl_case!(isize_neg: isize, -2 => [0xfffffffe]);

    #[test]
    fn to_primitive_in_range() {
        assert_eq!(BigInt::from(-1).to_i64(), Some(-1));
        assert_eq!(BigInt::from(-1).to_u64(), None);
        assert_eq!(BigInt::from(0).to_u8(), Some(0));
        assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(BigInt::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(BigInt::from(u64::MAX).to_i64(), None);
        assert_eq!(BigInt::from(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(BigInt::from(i128::MAX).to_i128(), Some(i128::MAX));
        assert_eq!(BigInt::from(u128::MAX).to_u128(), Some(u128::MAX));
        assert_eq!(BigInt::from(300).to_u8(), None);
        assert_eq!(BigInt::from(-129).to_i8(), None);
        assert_eq!(BigInt::from(-128).to_i8(), Some(-128));
    }

    #[test]
    fn to_primitive_out_of_range() {
        // 2^127 and -2^127 - 1 use four words with the "wrong" top bit
        let above = BigInt::from(i128::MAX) + 1u8;
        assert_eq!(above.to_i128(), None);
        assert_eq!(above.to_u128(), Some(1 << 127));

        let below = BigInt::from(i128::MIN) - 1u8;
        assert_eq!(below.to_i128(), None);
        assert_eq!(below.to_u128(), None);

        let huge = BigInt::from(u128::MAX) + 1u8;
        assert_eq!(huge.to_u128(), None);
        assert_eq!(huge.to_i128(), None);
    }

    #[test]
    fn from_primitive() {
        assert_eq!(BigInt::from_i64(-7), Some(BigInt::from(-7)));
        assert_eq!(BigInt::from_u128(u128::MAX), Some(BigInt::from(u128::MAX)));
        assert_eq!(BigInt::from_u8(9), Some(BigInt::from(9)));
    }
}
