//!
//! Two's-complement negation and sign/magnitude conversion
//!

use super::{add_with_carry, extended_read, fill_word, from_guarded_words, sign_of_top_word};
use crate::{BigInt, DigitBuffer};
use num_traits::{One, Zero};


/// Return -n
///
/// Inverts every extended word and adds one, over two guard words that
/// absorb the carry-out and the flipped sign bit.
///
pub(crate) fn negate_bigint(n: &BigInt) -> BigInt {
    if n.is_zero() {
        return BigInt::zero();
    }
    if n.words.is_empty() {
        // -1
        return BigInt::one();
    }

    let len = n.word_len() + 2;
    let mut carry = 1;
    let words: DigitBuffer = (0..len)
        .map(|i| add_with_carry(!extended_read(n, i), 0, &mut carry))
        .collect();
    from_guarded_words(words)
}

/// Negate `n` in place, reusing its storage
pub(crate) fn negate_in_place(n: &mut BigInt) {
    if n.is_zero() {
        return;
    }

    let len = n.word_len() + 2;
    n.words.resize(len, fill_word(n.negative));

    let mut carry = 1;
    for word in n.words.as_mut_slice() {
        *word = add_with_carry(!*word, 0, &mut carry);
    }

    n.negative = sign_of_top_word(n.words.as_slice());
    n.normalize();
}

/// Build an integer from an unsigned magnitude and a sign
///
/// Leading zero words of `magnitude` are ignored. A negative result is
/// converted to two's complement in place: every word is inverted and one
/// is added.
///
pub(crate) fn from_magnitude(negative: bool, mut magnitude: DigitBuffer) -> BigInt {
    while magnitude.last() == Some(0) {
        magnitude.pop();
    }
    if magnitude.is_empty() {
        return BigInt::zero();
    }
    if !negative {
        return BigInt {
            negative: false,
            words: magnitude,
        };
    }

    // one copy up front rather than a sharing check per word
    magnitude.ensure_exclusive();
    let mut carry = 1;
    for word in magnitude.as_mut_slice() {
        *word = add_with_carry(!*word, 0, &mut carry);
    }
    // a nonzero magnitude cannot carry out of its top word
    debug_assert_eq!(carry, 0);

    // guard word: all ones, the sign extension of the negated value
    magnitude.push(fill_word(true));
    BigInt::from_words(true, magnitude)
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $n:expr => $expected:expr) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let n = BigInt::from($n);
                    let expected = BigInt::from($expected);

                    let negated = negate_bigint(&n);
                    assert_eq!(negated, expected);
                    assert!(negated.is_canonical());
                    assert_eq!(negate_bigint(&negated), n);

                    let mut m = n.clone();
                    negate_in_place(&mut m);
                    assert_eq!(m, expected);
                    assert!(m.is_canonical());
                }
            }
        };
    }

    impl_case!(zero: 0 => 0);
    impl_case!(one: 1 => -1);
    impl_case!(neg_one: -1 => 1);
    impl_case!(i32_min: i32::MIN => 1u64 << 31);
    impl_case!(u32_max: u32::MAX => -(u32::MAX as i64));
    impl_case!(two_to_32: 1u64 << 32 => -(1i64 << 32));
    impl_case!(i64_min: i64::MIN => 1u64 << 63);
    impl_case!(i128_min: i128::MIN => BigInt::from_slice(false, &[0, 0, 0, 0x80000000]));
    impl_case!(u128_max: u128::MAX => BigInt::from_slice(true, &[1, 0, 0, 0]));

    macro_rules! impl_magnitude_case {
        ($name:ident: $negative:literal, [$($w:literal),*] => $expected:expr) => {
            paste! {
                #[test]
                fn [< from_magnitude_ $name >]() {
                    let magnitude = DigitBuffer::from(&[$($w),*][..]);
                    let n = from_magnitude($negative, magnitude);
                    assert_eq!(n, BigInt::from($expected));
                    assert!(n.is_canonical());
                }
            }
        };
    }

    impl_magnitude_case!(empty: true, [] => 0);
    impl_magnitude_case!(zeros: true, [0, 0, 0] => 0);
    impl_magnitude_case!(one: false, [1] => 1);
    impl_magnitude_case!(neg_one: true, [1] => -1);
    impl_magnitude_case!(neg_one_padded: true, [1, 0, 0] => -1);
    impl_magnitude_case!(neg_two_to_31: true, [0x80000000] => i32::MIN);
    impl_magnitude_case!(neg_u32_max: true, [0xffffffff] => -(u32::MAX as i64));
    impl_magnitude_case!(high_bit_positive: false, [0, 0x80000000] => 1u64 << 63);
    impl_magnitude_case!(neg_two_to_64: true, [0, 0, 1] => -(1i128 << 64));

    #[test]
    fn from_magnitude_shared_buffer_is_untouched() {
        let magnitude = DigitBuffer::from(&[1, 2, 3, 4, 5, 6][..]);
        let copy = magnitude.clone();
        let n = from_magnitude(true, copy);
        assert!(n.is_negative());
        assert_eq!(magnitude.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }
}
