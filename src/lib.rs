// Copyright 2026 The twos-bigint Developers
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Two's-complement Big Integers
//!
//! `BigInt` stores an arbitrary-precision signed integer as a sign flag and
//! a little-endian sequence of 32-bit words, interpreted in two's complement
//! with an implicit, infinite sign extension beyond the stored words.
//! Bitwise operators and shifts therefore behave exactly as they would on a
//! fixed-width machine integer that happened to be wide enough.
//!
//! The words live in a [`DigitBuffer`], which keeps short values inline and
//! shares longer allocations between clones until one of them is written
//! (copy-on-write), so cloning a large `BigInt` is cheap.
//!
//! Every value is kept in canonical form: the highest stored word is never
//! equal to the sign-extension fill word. Zero has no stored words and a
//! clear sign; negative one has no stored words and a set sign.
//!
//! # Example
//!
//! ```
//! use twos_bigint::BigInt;
//! use std::str::FromStr;
//!
//! let a = BigInt::from_str("123456789123456789").unwrap();
//! let b = &a * 2u32;
//! assert_eq!(b.to_string(), "246913578246913578");
//!
//! let minus_seven = BigInt::from(-7);
//! assert_eq!(&minus_seven / 2i32, BigInt::from(-3));
//! assert_eq!(&minus_seven % 2i32, BigInt::from(-1));
//! assert_eq!(&minus_seven >> 1, BigInt::from(-4));
//! assert_eq!(!minus_seven, BigInt::from(6));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]


pub extern crate num_traits;
pub extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde_crate;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp::Ordering;
use self::stdlib::fmt;
use self::stdlib::hash::{Hash, Hasher};
use self::stdlib::iter::{Product, Sum};
use self::stdlib::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
    Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign,
    Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

pub use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};
pub use num_integer::Integer;


// const INLINE_WORDS: usize = ${RUST_TWOS_BIGINT_INLINE_WORDS} or 4;
include!(concat!(env!("OUT_DIR"), "/inline_words.rs"));

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

// Copy-on-write word storage
pub mod digitbuffer;
pub use digitbuffer::DigitBuffer;

// Word-level kernels
mod arithmetic;

// From<T>, ToPrimitive, FromPrimitive impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;
mod impl_ops_bit;
mod impl_ops_shift;

// PartialEq, Ord
mod impl_cmp;

// Implementations of num_traits and num_integer
mod impl_num;

// Display, Debug
mod impl_fmt;

// FromStr
mod impl_trait_from_str;
mod parsing;

#[cfg(feature = "serde")]
mod impl_serde;


/// An arbitrary-precision integer with two's-complement semantics
///
/// The value is `Σ words[i]·2^(32·i) − (negative ? 2^(32·len) : 0)`.
///
#[derive(Clone)]
pub struct BigInt {
    // sign of the infinite extension above the stored words
    negative: bool,
    words: DigitBuffer,
}

impl BigInt {
    /// Build an integer from two's-complement words and an explicit sign
    ///
    /// Words above the highest one that differs from the sign fill are
    /// dropped, so the result is always canonical.
    ///
    /// ```
    /// use twos_bigint::{BigInt, DigitBuffer};
    ///
    /// let n = BigInt::from_words(true, DigitBuffer::from(&[0xfffffffe, 0xffffffff][..]));
    /// assert_eq!(n, BigInt::from(-2));
    /// assert_eq!(n.word_len(), 1);
    /// ```
    pub fn from_words(negative: bool, words: DigitBuffer) -> BigInt {
        let mut n = BigInt {
            negative: negative,
            words: words,
        };
        n.normalize();
        n
    }

    /// Build an integer from a slice of two's-complement words
    pub fn from_slice(negative: bool, words: &[u32]) -> BigInt {
        BigInt::from_words(negative, DigitBuffer::from(words))
    }

    /// Build an integer from an unsigned magnitude and a sign
    pub(crate) fn from_magnitude(negative: bool, magnitude: DigitBuffer) -> BigInt {
        arithmetic::negation::from_magnitude(negative, magnitude)
    }

    /// Stored two's-complement words, least significant first
    #[inline]
    pub fn words(&self) -> &[u32] {
        self.words.as_slice()
    }

    /// Number of stored words
    #[inline]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// True if the value is less than zero
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True if the value is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        !self.negative && self.words.is_empty()
    }

    /// Word `index` of the infinitely sign-extended representation
    ///
    /// Indices past the stored words read as `0xFFFFFFFF` for negative
    /// values and `0` otherwise.
    ///
    /// ```
    /// use twos_bigint::BigInt;
    ///
    /// let n = BigInt::from(-2);
    /// assert_eq!(n.extended_word(0), 0xfffffffe);
    /// assert_eq!(n.extended_word(7), 0xffffffff);
    /// ```
    #[inline]
    pub fn extended_word(&self, index: usize) -> u32 {
        arithmetic::extended_read(self, index)
    }

    /// Absolute value
    pub fn abs(&self) -> BigInt {
        if self.negative {
            arithmetic::negation::negate_bigint(self)
        } else {
            self.clone()
        }
    }

    /// Return -1, 0, or 1 depending on sign
    pub fn signum(&self) -> BigInt {
        if self.negative {
            BigInt::from(-1)
        } else if self.is_zero() {
            BigInt::zero()
        } else {
            BigInt::one()
        }
    }

    /// Add one in place
    pub fn increment(&mut self) {
        *self += 1u32;
    }

    /// Subtract one in place
    pub fn decrement(&mut self) {
        *self -= 1u32;
    }

    /// Number of bits needed to represent the absolute value
    ///
    /// Zero has zero bits.
    pub fn bits(&self) -> u64 {
        let magnitude = self.magnitude();
        match magnitude.last() {
            None => 0,
            Some(top) => {
                (magnitude.len() as u64 - 1) * 32 + (32 - top.leading_zeros()) as u64
            }
        }
    }

    /// Divide, returning both quotient and remainder
    ///
    /// The quotient is truncated toward zero and the remainder takes the
    /// sign of the dividend, as with primitive integers.
    ///
    /// ```
    /// use twos_bigint::{BigInt, DivideByZeroError};
    ///
    /// let (q, r) = BigInt::from(-7).try_div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    ///
    /// let err = BigInt::from(5).try_div_rem(&BigInt::from(0));
    /// assert_eq!(err, Err(DivideByZeroError));
    /// ```
    pub fn try_div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), DivideByZeroError> {
        let quotient = arithmetic::division::divide_bigints(self, other)?;
        let remainder = self - &quotient * other;
        Ok((quotient, remainder))
    }

    /// Unsigned magnitude words of this value (no leading zero words)
    pub(crate) fn magnitude(&self) -> DigitBuffer {
        if self.negative {
            arithmetic::negation::negate_bigint(self).words
        } else {
            self.words.clone()
        }
    }

    /// Restore canonical form by dropping redundant sign-extension words
    pub(crate) fn normalize(&mut self) {
        let fill = arithmetic::fill_word(self.negative);
        while self.words.last() == Some(fill) {
            self.words.pop();
        }
    }

    /// True if the highest stored word is not a sign-extension word
    pub(crate) fn is_canonical(&self) -> bool {
        self.words.last() != Some(arithmetic::fill_word(self.negative))
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.words.hash(state);
    }
}


/// Error returned when parsing a decimal string fails
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseBigIntError {
    /// The string held no digits
    Empty,
    /// A character other than an ASCII digit (after an optional leading '-')
    InvalidDigit,
    /// Only radix 10 is supported
    InvalidRadix(u32),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigIntError::*;

        match *self {
            Empty => f.write_str("cannot parse integer from empty string"),
            InvalidDigit => f.write_str("invalid digit found in string"),
            InvalidRadix(radix) => write!(f, "unsupported radix {}, only radix 10 is supported", radix),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBigIntError {
    fn description(&self) -> &str {
        "failed to parse bigint"
    }
}


/// Error returned by division or remainder with a zero divisor
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DivideByZeroError;

impl fmt::Display for DivideByZeroError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("attempt to divide by zero")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DivideByZeroError {
    fn description(&self) -> &str {
        "attempt to divide by zero"
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod bigint_tests {
    use crate::{stdlib, BigInt, DigitBuffer};
    use num_traits::{ToPrimitive, Zero, One};
    use paste::paste;

    use stdlib::str::FromStr;
    use stdlib::string::ToString;
    use stdlib::Vec;

    include!("lib.tests.rs");
}


#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use paste::paste;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
