//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;
use arithmetic::division::divide_by_word;
use parsing::{DIGITS_PER_CHUNK, POWERS_OF_TEN};
use stdlib::fmt::Write;
use stdlib::string::String;
use stdlib::Vec;


impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = String::new();
        write_decimal_magnitude(&mut digits, &self.magnitude())?;
        f.pad_integral(!self.negative, "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt(\"{}\")", self)
    }
}


/// Write the decimal digits of an unsigned magnitude, without sign
///
/// The magnitude is split into base 10^9 chunks by repeated single-word
/// division; every chunk but the most significant is zero-padded.
///
fn write_decimal_magnitude<W: Write>(out: &mut W, magnitude: &DigitBuffer) -> fmt::Result {
    let chunk_base = POWERS_OF_TEN[DIGITS_PER_CHUNK];

    let mut chunks = Vec::new();
    let mut rest = magnitude.clone();
    while !rest.is_empty() {
        let (quotient, remainder) = divide_by_word(rest.as_slice(), chunk_base);
        chunks.push(remainder);
        rest = quotient;
    }

    let mut chunks = chunks.iter().rev();
    match chunks.next() {
        Some(first) => write!(out, "{}", first)?,
        None => out.write_char('0')?,
    }
    for chunk in chunks {
        write!(out, "{:0width$}", chunk, width = DIGITS_PER_CHUNK)?;
    }
    Ok(())
}
