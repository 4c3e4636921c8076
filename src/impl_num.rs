//! Code for num_traits and num_integer

use crate::*;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, Pow};


impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt {
            negative: false,
            words: DigitBuffer::new(),
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::from(1u8)
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    /// Parse a decimal string; radix must be 10
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        if radix != 10 {
            return Err(ParseBigIntError::InvalidRadix(radix));
        }
        parsing::parse_decimal(s)
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if self <= other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigInt {
        BigInt::signum(self)
    }

    #[inline]
    fn is_positive(&self) -> bool {
        !self.negative && !self.words.is_empty()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.negative
    }
}


impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, rhs: &BigInt) -> Option<BigInt> {
        Some(self + rhs)
    }
}

impl CheckedSub for BigInt {
    #[inline]
    fn checked_sub(&self, rhs: &BigInt) -> Option<BigInt> {
        Some(self - rhs)
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, rhs: &BigInt) -> Option<BigInt> {
        Some(self * rhs)
    }
}

impl CheckedDiv for BigInt {
    #[inline]
    fn checked_div(&self, rhs: &BigInt) -> Option<BigInt> {
        arithmetic::division::divide_bigints(self, rhs).ok()
    }
}

impl CheckedRem for BigInt {
    #[inline]
    fn checked_rem(&self, rhs: &BigInt) -> Option<BigInt> {
        self.try_div_rem(rhs).ok().map(|(_, remainder)| remainder)
    }
}


impl Pow<u32> for &BigInt {
    type Output = BigInt;

    /// Square-and-multiply over the bits of the exponent
    fn pow(self, mut exp: u32) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }
}

impl Pow<u32> for BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, exp: u32) -> BigInt {
        (&self).pow(exp)
    }
}


impl Integer for BigInt {
    /// Quotient rounded toward negative infinity
    fn div_floor(&self, other: &BigInt) -> BigInt {
        let (quotient, remainder) = self.div_rem(other);
        if !remainder.is_zero() && remainder.negative != other.negative {
            quotient - 1u8
        } else {
            quotient
        }
    }

    /// Remainder with the sign of the divisor
    fn mod_floor(&self, other: &BigInt) -> BigInt {
        let remainder = self % other;
        if !remainder.is_zero() && remainder.negative != other.negative {
            remainder + other
        } else {
            remainder
        }
    }

    /// Greatest common divisor, always non-negative
    fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let remainder = &a % &b;
            a = b;
            b = remainder;
        }
        a
    }

    /// Least common multiple, always non-negative
    fn lcm(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        (self / &self.gcd(other) * other).abs()
    }

    fn divides(&self, other: &BigInt) -> bool {
        self.is_multiple_of(other)
    }

    fn is_multiple_of(&self, other: &BigInt) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    #[inline]
    fn is_even(&self) -> bool {
        self.extended_word(0) & 1 == 0
    }

    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Truncated quotient and remainder; panics on a zero divisor
    fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        match self.try_div_rem(other) {
            Ok(result) => result,
            Err(err) => panic!("{}", err),
        }
    }
}
