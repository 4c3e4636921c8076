//!
//! Addition of two's-complement words
//!

use super::{add_with_carry, extended_read, fill_word, from_guarded_words, sign_of_top_word};
use crate::{BigInt, DigitBuffer};
use crate::stdlib::cmp;


/// Number of words that hold the sum of `a` and `b` plus a pure sign word
#[inline]
fn guarded_len(a: &BigInt, b: &BigInt) -> usize {
    cmp::max(a.word_len(), b.word_len()) + 2
}

/// Return a + b
pub(crate) fn add_bigints(a: &BigInt, b: &BigInt) -> BigInt {
    let len = guarded_len(a, b);
    let mut carry = 0;
    let sum: DigitBuffer = (0..len)
        .map(|i| add_with_carry(extended_read(a, i), extended_read(b, i), &mut carry))
        .collect();
    from_guarded_words(sum)
}

/// Add `rhs` into `lhs`, reusing the storage of `lhs`
pub(crate) fn add_assign_bigint(lhs: &mut BigInt, rhs: &BigInt) {
    let len = guarded_len(lhs, rhs);
    lhs.words.resize(len, fill_word(lhs.negative));

    let mut carry = 0;
    for (i, word) in lhs.words.as_mut_slice().iter_mut().enumerate() {
        *word = add_with_carry(*word, extended_read(rhs, i), &mut carry);
    }

    lhs.negative = sign_of_top_word(lhs.words.as_slice());
    lhs.normalize();
}
