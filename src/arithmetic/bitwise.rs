//!
//! Bitwise operations over infinitely sign-extended words
//!
//! Because bits above the stored words are copies of the sign, the sign of
//! the result is the same operation applied to the two operand signs.
//!

use super::{extended_read, fill_word};
use crate::{BigInt, DigitBuffer};
use crate::stdlib::cmp;


/// Apply `op` word-wise to the extended forms of `a` and `b`
pub(crate) fn bitwise_bigints<F>(a: &BigInt, b: &BigInt, op: F) -> BigInt
where
    F: Fn(u32, u32) -> u32,
{
    let len = cmp::max(a.word_len(), b.word_len());
    let words: DigitBuffer = (0..len)
        .map(|i| op(extended_read(a, i), extended_read(b, i)))
        .collect();
    let negative = op(fill_word(a.negative), fill_word(b.negative)) != 0;
    BigInt::from_words(negative, words)
}

/// Apply `op` word-wise, storing the result in `lhs`
pub(crate) fn bitwise_assign_bigint<F>(lhs: &mut BigInt, rhs: &BigInt, op: F)
where
    F: Fn(u32, u32) -> u32,
{
    let len = cmp::max(lhs.word_len(), rhs.word_len());
    lhs.words.resize(len, fill_word(lhs.negative));

    for (i, word) in lhs.words.as_mut_slice().iter_mut().enumerate() {
        *word = op(*word, extended_read(rhs, i));
    }

    lhs.negative = op(fill_word(lhs.negative), fill_word(rhs.negative)) != 0;
    lhs.normalize();
}

/// Return !n, which is -n - 1
///
/// Inverting every stored word and the sign keeps the form canonical.
///
pub(crate) fn not_bigint(n: &BigInt) -> BigInt {
    let mut result = n.clone();
    not_in_place(&mut result);
    result
}

/// Invert every bit of `n`
pub(crate) fn not_in_place(n: &mut BigInt) {
    for word in n.words.as_mut_slice() {
        *word = !*word;
    }
    n.negative = !n.negative;
    debug_assert!(n.is_canonical());
}
