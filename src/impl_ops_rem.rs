//! Remainder operator trait implementation
//!
//! The remainder takes the sign of the dividend, so that
//! `(a / b) * b + a % b == a`.
//!

use crate::*;


impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.try_div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl RemAssign<&BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

forward_val_assignop!(impl RemAssign for BigInt, rem_assign);

for_each_primitive_int!(impl_binop_for_primitive!(impl Rem::rem, RemAssign::rem_assign for));
