//!
//! Subtraction of two's-complement words
//!

use super::{add_with_carry, extended_read, fill_word, from_guarded_words, sign_of_top_word};
use crate::{BigInt, DigitBuffer};
use crate::stdlib::cmp;


/// Words needed to hold a - b plus a pure sign word
#[inline]
fn guarded_len(a: &BigInt, b: &BigInt) -> usize {
    cmp::max(a.word_len(), b.word_len()) + 3
}

/// Return a - b, computed as a + !b + 1 without materializing -b
pub(crate) fn sub_bigints(a: &BigInt, b: &BigInt) -> BigInt {
    let len = guarded_len(a, b);
    let mut carry = 1;
    let difference: DigitBuffer = (0..len)
        .map(|i| add_with_carry(extended_read(a, i), !extended_read(b, i), &mut carry))
        .collect();
    from_guarded_words(difference)
}

/// Subtract `rhs` from `lhs`, reusing the storage of `lhs`
pub(crate) fn sub_assign_bigint(lhs: &mut BigInt, rhs: &BigInt) {
    let len = guarded_len(lhs, rhs);
    lhs.words.resize(len, fill_word(lhs.negative));

    let mut carry = 1;
    for (i, word) in lhs.words.as_mut_slice().iter_mut().enumerate() {
        *word = add_with_carry(*word, !extended_read(rhs, i), &mut carry);
    }

    lhs.negative = sign_of_top_word(lhs.words.as_slice());
    lhs.normalize();
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:expr, $b:expr => $expected:expr) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a = BigInt::from($a);
                    let b = BigInt::from($b);
                    let expected = BigInt::from($expected);

                    let difference = sub_bigints(&a, &b);
                    assert_eq!(difference, expected);
                    assert!(difference.is_canonical());

                    let mut c = a.clone();
                    sub_assign_bigint(&mut c, &b);
                    assert_eq!(c, expected);
                    assert!(c.is_canonical());
                }
            }
        };
    }

    impl_case!(zero_zero: 0, 0 => 0);
    impl_case!(zero_one: 0, 1 => -1);
    impl_case!(neg_one_neg_one: -1, -1 => 0);
    impl_case!(zero_neg_one: 0, -1 => 1);
    impl_case!(borrow_across_words: 1u64 << 32, 1 => u32::MAX);
    impl_case!(to_negative: 5, 1u64 << 40 => 5 - (1i64 << 40));
    impl_case!(i64_min_minus_one: i64::MIN, 1 => i64::MIN as i128 - 1);
    impl_case!(u128_max_minus_neg: u128::MAX, -1 => BigInt::from_slice(false, &[0, 0, 0, 0, 1]));
    impl_case!(i128_min_minus_i128_max: i128::MIN, i128::MAX => BigInt::from_slice(true, &[1, 0, 0, 0]));
    impl_case!(short_minus_long: 7, i128::MIN => BigInt::from_slice(false, &[7, 0, 0, 0x80000000]));
}
