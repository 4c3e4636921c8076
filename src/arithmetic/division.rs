//!
//! Long division of magnitudes
//!
//! Multi-word divisors use normalized long division (Knuth, TAOCP vol. 2,
//! algorithm 4.3.1 D): both operands are scaled so the top word of the
//! divisor has its high bit set, which bounds the error of each two-word
//! trial quotient to at most two.
//!

use super::{compare_words, subtract_words_in_place};
use super::multiplication::{multiply_by_word, multiply_by_word_into};
use crate::{BigInt, DigitBuffer, DivideByZeroError};
use crate::stdlib::cmp::Ordering;
use crate::stdlib::Vec;


/// Return a / b, truncated toward zero
pub(crate) fn divide_bigints(a: &BigInt, b: &BigInt) -> Result<BigInt, DivideByZeroError> {
    if b.is_zero() {
        return Err(DivideByZeroError);
    }

    let negative = a.negative != b.negative;
    let quotient = divide_magnitudes(a.magnitude().as_slice(), b.magnitude().as_slice());
    Ok(BigInt::from_magnitude(negative, quotient))
}

/// Return floor(u / v) for magnitudes without leading zero words
pub(crate) fn divide_magnitudes(u: &[u32], v: &[u32]) -> DigitBuffer {
    long_divide(u, v).0
}

/// Return quotient and the largest number of trial-digit corrections made
/// for any quotient word
pub(crate) fn long_divide(u: &[u32], v: &[u32]) -> (DigitBuffer, u32) {
    debug_assert!(v.last().map_or(false, |&top| top != 0), "divisor must be nonzero and trimmed");

    let (n, m) = (u.len(), v.len());
    if n < m {
        return (DigitBuffer::new(), 0);
    }
    if m == 1 {
        return (divide_by_word(u, v[0]).0, 0);
    }

    let f = normalization_factor(v[m - 1]);
    // n + 1 words
    let u = multiply_by_word(u, f);
    let mut v = multiply_by_word(v, f);
    debug_assert_eq!(v.last(), Some(0));
    v.pop();
    debug_assert!(v[m - 1] >= 1 << 31);
    let v = v.as_slice();

    let mut quotient = DigitBuffer::with_len(n - m + 1);
    let mut window: Vec<u32> = u.as_slice()[n - m..].to_vec();
    let mut product = vec![0; m + 1];
    let mut max_corrections = 0;

    for j in (0..=n - m).rev() {
        let (digit, corrections) = reduce_window(&mut window, v, &mut product);
        debug_assert!(corrections <= 2);
        max_corrections = max_corrections.max(corrections);
        quotient[j] = digit;

        if j > 0 {
            // remainder is below v, so the top word is free
            window.copy_within(0..m, 1);
            window[0] = u[j - 1];
        }
    }

    (quotient, max_corrections)
}

/// Scale factor that sets the high bit of the top divisor word
///
/// Equals floor(2^32 / (top + 1)); multiplying the divisor by it never
/// carries into a new word.
///
pub(crate) fn normalization_factor(top: u32) -> u32 {
    debug_assert_ne!(top, 0);
    ((1u64 << 32) / (top as u64 + 1)) as u32
}

/// Estimate the next quotient word from the top two window words
///
/// Never less than the true digit, and at most two more than it when the
/// divisor is normalized.
///
pub(crate) fn trial_quotient(hi: u32, lo: u32, top: u32) -> u32 {
    let numerator = (hi as u64) << 32 | lo as u64;
    (numerator / top as u64).min(u32::MAX as u64) as u32
}

/// Divide the m+1 word window by the m word divisor in place
///
/// Returns the quotient digit and the number of times the trial quotient
/// had to be decremented. The window is left holding the remainder.
///
pub(crate) fn reduce_window(window: &mut [u32], v: &[u32], product: &mut [u32]) -> (u32, u32) {
    let m = v.len();
    debug_assert_eq!(window.len(), m + 1);
    debug_assert_eq!(product.len(), m + 1);

    let mut digit = trial_quotient(window[m], window[m - 1], v[m - 1]);
    multiply_by_word_into(v, digit, product);

    let mut corrections = 0;
    while compare_words(product, window) == Ordering::Greater {
        digit -= 1;
        subtract_words_in_place(product, v);
        corrections += 1;
    }

    let borrow = subtract_words_in_place(window, product);
    debug_assert!(!borrow);
    debug_assert_eq!(window[m], 0);

    (digit, corrections)
}

/// Divide by a single word, returning the trimmed quotient and the remainder
pub(crate) fn divide_by_word(u: &[u32], d: u32) -> (DigitBuffer, u32) {
    debug_assert_ne!(d, 0);

    let mut quotient = DigitBuffer::with_len(u.len());
    let mut remainder = 0u64;
    let out = quotient.as_mut_slice();
    for (dest, &word) in out.iter_mut().zip(u.iter()).rev() {
        let current = remainder << 32 | word as u64;
        *dest = (current / d as u64) as u32;
        remainder = current % d as u64;
    }

    while quotient.last() == Some(0) {
        quotient.pop();
    }
    (quotient, remainder as u32)
}
