//!
//! Arithmetic shifts
//!
//! Shift amounts are split into whole words (`bits / 32`) and a remaining
//! bit offset (`bits % 32`). Each output word joins two adjacent extended
//! source words in a u64 and takes the middle 32 bits.
//!

use super::extended_read;
use crate::{BigInt, DigitBuffer};


/// Join two words into a u64, `hi` in the upper half
#[inline]
fn join_words(hi: u32, lo: u32) -> u64 {
    (hi as u64) << 32 | lo as u64
}

/// Return n * 2^bits
pub(crate) fn shl_bigint(n: &BigInt, bits: usize) -> BigInt {
    if n.is_zero() {
        return BigInt::default();
    }

    let (word_shift, bit_shift) = (bits / 32, bits % 32);
    let len = n.word_len() + word_shift + 1;

    let mut words = DigitBuffer::with_len(len);
    let out = words.as_mut_slice();
    for (i, word) in out.iter_mut().enumerate().skip(word_shift) {
        let src = i - word_shift;
        let lo = if src == 0 { 0 } else { extended_read(n, src - 1) };
        let joined = join_words(extended_read(n, src), lo);
        *word = ((joined << bit_shift) >> 32) as u32;
    }

    BigInt::from_words(n.negative, words)
}

/// Return floor(n / 2^bits)
///
/// Bits shifted out are lost; a negative value rounds toward negative
/// infinity and settles at -1.
///
pub(crate) fn shr_bigint(n: &BigInt, bits: usize) -> BigInt {
    let (word_shift, bit_shift) = (bits / 32, bits % 32);
    if word_shift >= n.word_len() {
        return BigInt {
            negative: n.negative,
            words: DigitBuffer::new(),
        };
    }

    let len = n.word_len() - word_shift;
    let words: DigitBuffer = (0..len)
        .map(|i| {
            let src = i + word_shift;
            let joined = join_words(extended_read(n, src + 1), extended_read(n, src));
            (joined >> bit_shift) as u32
        })
        .collect();

    BigInt::from_words(n.negative, words)
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $n:expr, << $bits:literal => $expected:expr) => {
            paste! {
                #[test]
                fn [< shl_ $name >]() {
                    let n = BigInt::from($n);
                    let result = shl_bigint(&n, $bits);
                    assert_eq!(result, BigInt::from($expected));
                    assert!(result.is_canonical());
                }
            }
        };
        ($name:ident: $n:expr, >> $bits:literal => $expected:expr) => {
            paste! {
                #[test]
                fn [< shr_ $name >]() {
                    let n = BigInt::from($n);
                    let result = shr_bigint(&n, $bits);
                    assert_eq!(result, BigInt::from($expected));
                    assert!(result.is_canonical());
                }
            }
        };
    }

    impl_case!(zero: 0, << 100 => 0);
    impl_case!(one_by_zero: 1, << 0 => 1);
    impl_case!(one_by_31: 1, << 31 => 1u64 << 31);
    impl_case!(one_by_32: 1, << 32 => 1u64 << 32);
    impl_case!(one_by_64: 1, << 64 => 1u128 << 64);
    impl_case!(neg_one_by_1: -1, << 1 => -2);
    impl_case!(neg_one_by_32: -1, << 32 => -(1i64 << 32));
    impl_case!(neg_one_by_33: -1, << 33 => -(1i64 << 33));
    impl_case!(neg_three_by_40: -3, << 40 => -3i64 << 40);
    impl_case!(i32_min_by_1: i32::MIN, << 1 => (i32::MIN as i64) << 1);
    impl_case!(cross_words: 0xdead_beef_u32, << 20 => 0xdead_beef_u64 << 20);
    impl_case!(u64_max_by_36: u64::MAX, << 36 => (u64::MAX as u128) << 36);

    impl_case!(zero: 0, >> 5 => 0);
    impl_case!(neg_one_by_1: -1, >> 1 => -1);
    impl_case!(neg_one_by_1000: -1, >> 1000 => -1);
    impl_case!(one_by_1: 1, >> 1 => 0);
    impl_case!(neg_seven_by_1: -7, >> 1 => -4);
    impl_case!(neg_two_to_32_by_32: -(1i64 << 32), >> 32 => -1);
    impl_case!(neg_two_to_32_by_33: -(1i64 << 32), >> 33 => -1);
    impl_case!(neg_two_to_40_by_8: -(1i64 << 40), >> 8 => -(1i64 << 32));
    impl_case!(two_to_64_by_1: 1u128 << 64, >> 1 => 1u64 << 63);
    impl_case!(two_to_64_by_64: 1u128 << 64, >> 64 => 1);
    impl_case!(two_to_64_by_65: 1u128 << 64, >> 65 => 0);
    impl_case!(cross_words: 0xdead_beef_cafe_f00d_u64, >> 20 => 0xdead_beef_cafe_f00d_u64 >> 20);
    impl_case!(i128_min_by_100: i128::MIN, >> 100 => i128::MIN >> 100);
    impl_case!(i64_min_plus_one_by_63: i64::MIN + 1, >> 63 => -1);

    #[test]
    fn shl_then_shr_restores() {
        let values = [
            BigInt::from(0x1234_5678_9abc_u64),
            BigInt::from(-0x1234_5678_9abc_i64),
            BigInt::from(-1),
            BigInt::from(i128::MIN),
        ];
        for n in values.iter() {
            for bits in [0, 1, 31, 32, 33, 64, 95, 200] {
                assert_eq!(&shr_bigint(&shl_bigint(n, bits), bits), n);
            }
        }
    }
}
