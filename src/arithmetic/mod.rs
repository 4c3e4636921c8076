//! arithmetic routines
//!
//! Kernels working on the words of a BigInt. Every routine reads its
//! operands through [`extended_read`], so operands of different lengths are
//! handled as if both were infinitely sign-extended.
//!

use crate::*;
use stdlib::cmp::Ordering;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod negation;
pub(crate) mod bitwise;
pub(crate) mod shift;
pub(crate) mod multiplication;
pub(crate) mod division;


/// The word stored at every index past the end of a value with this sign
#[inline]
pub(crate) fn fill_word(negative: bool) -> u32 {
    if negative {
        u32::MAX
    } else {
        0
    }
}

/// Word `index` of the infinitely sign-extended two's-complement form of `n`
#[inline]
pub(crate) fn extended_read(n: &BigInt, index: usize) -> u32 {
    match n.words.as_slice().get(index) {
        Some(&word) => word,
        None => fill_word(n.negative),
    }
}

/// True if the highest bit of a fixed-width word sequence is set
pub(crate) fn sign_of_top_word(words: &[u32]) -> bool {
    words.last().map_or(false, |&top| top >> 31 == 1)
}

/// Wrap words of a fixed-width result computed with guard words
///
/// The top word of `words` must be pure sign extension, so its high bit is
/// the sign of the whole value.
///
pub(crate) fn from_guarded_words(words: DigitBuffer) -> BigInt {
    debug_assert!(matches!(words.last(), None | Some(0) | Some(u32::MAX)));
    let negative = sign_of_top_word(words.as_slice());
    BigInt::from_words(negative, words)
}

/// Return a + b + carry, storing the carry-out back in carry
#[inline]
pub(crate) fn add_with_carry(a: u32, b: u32, carry: &mut u32) -> u32 {
    let sum = a as u64 + b as u64 + *carry as u64;
    *carry = (sum >> 32) as u32;
    sum as u32
}

/// Return a * b + addend + carry, storing the high word back in carry
///
/// Cannot overflow: (2^32-1)^2 + 2(2^32-1) == 2^64-1
///
#[inline]
pub(crate) fn carrying_mul_add(a: u32, b: u32, addend: u32, carry: &mut u32) -> u32 {
    let t = a as u64 * b as u64 + addend as u64 + *carry as u64;
    *carry = (t >> 32) as u32;
    t as u32
}

/// Compare two unsigned word sequences of equal length
pub(crate) fn compare_words(a: &[u32], b: &[u32]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Unsigned in-place subtraction `a -= b`, returning true on borrow-out
///
/// `b` may be shorter than `a`; its missing high words are zero.
///
pub(crate) fn subtract_words_in_place(a: &mut [u32], b: &[u32]) -> bool {
    debug_assert!(b.len() <= a.len());
    // a - b == a + !b + 1
    let mut carry = 1;
    for (i, word) in a.iter_mut().enumerate() {
        let b_word = b.get(i).copied().unwrap_or(0);
        *word = add_with_carry(*word, !b_word, &mut carry);
    }
    carry == 0
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    include!("mod.tests.rs");
}
