//!
//! Schoolbook multiplication of magnitudes
//!

use super::carrying_mul_add;
use crate::{BigInt, DigitBuffer};
use num_traits::Zero;


/// Return a * b
///
/// Multiplies the magnitudes and converts the product back to two's
/// complement when exactly one operand is negative.
///
pub(crate) fn multiply_bigints(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }

    let negative = a.negative != b.negative;
    let a = a.magnitude();
    let b = b.magnitude();

    let product = match (a.len(), b.len()) {
        (_, 1) => multiply_by_word(a.as_slice(), b[0]),
        (1, _) => multiply_by_word(b.as_slice(), a[0]),
        (la, lb) => {
            let mut product = DigitBuffer::with_len(la + lb + 1);
            multiply_words_into(a.as_slice(), b.as_slice(), product.as_mut_slice());
            product
        }
    };

    BigInt::from_magnitude(negative, product)
}

/// Return words * m, one word longer than `words`
pub(crate) fn multiply_by_word(words: &[u32], m: u32) -> DigitBuffer {
    let mut product = DigitBuffer::with_len(words.len() + 1);
    multiply_by_word_into(words, m, product.as_mut_slice());
    product
}

/// Store words * m in `result`, which must be one word longer than `words`
pub(crate) fn multiply_by_word_into(words: &[u32], m: u32, result: &mut [u32]) {
    debug_assert_eq!(result.len(), words.len() + 1);
    let mut carry = 0;
    for (dest, &word) in result.iter_mut().zip(words.iter()) {
        *dest = carrying_mul_add(word, m, 0, &mut carry);
    }
    result[words.len()] = carry;
}

/// Replace `words` with words * m + addend, growing by a word if needed
pub(crate) fn multiply_add_word_in_place(words: &mut DigitBuffer, m: u32, addend: u32) {
    let mut carry = addend;
    for word in words.as_mut_slice() {
        *word = carrying_mul_add(*word, m, 0, &mut carry);
    }
    if carry != 0 {
        words.push(carry);
    }
}

/// Accumulate a * b into `result`
///
/// `result` must be zeroed and hold `a.len() + b.len() + 1` words. Each
/// partial product is accumulated in 64 bits, so the carry chain of a row
/// never overflows.
///
pub(crate) fn multiply_words_into(a: &[u32], b: &[u32], result: &mut [u32]) {
    debug_assert_eq!(result.len(), a.len() + b.len() + 1);
    for (ia, &digit_a) in a.iter().enumerate() {
        if digit_a == 0 {
            continue;
        }

        let mut carry = 0;
        for (ib, &digit_b) in b.iter().enumerate() {
            let idx = ia + ib;
            result[idx] = carrying_mul_add(digit_a, digit_b, result[idx], &mut carry);
        }
        // no earlier row reaches this far
        result[ia + b.len()] = carry;
    }
}


#[cfg(test)]
mod test {
    use super::*;
    include!("multiplication.tests.rs");
}
