//! Implement unary operations (Neg, Not) and iterator folds (Sum, Product)

use crate::*;


impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        arithmetic::negation::negate_in_place(&mut self);
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        arithmetic::negation::negate_bigint(self)
    }
}

impl Not for BigInt {
    type Output = BigInt;

    #[inline]
    fn not(mut self) -> BigInt {
        arithmetic::bitwise::not_in_place(&mut self);
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    #[inline]
    fn not(self) -> BigInt {
        arithmetic::bitwise::not_bigint(self)
    }
}


impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |mut acc, n| {
            acc += n;
            acc
        })
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |mut acc, n| {
            acc += n;
            acc
        })
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, n| acc * n)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, n| acc * n)
    }
}
