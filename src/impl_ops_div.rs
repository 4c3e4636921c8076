//! Division operator trait implementation
//!
//! Quotients truncate toward zero. Dividing by zero panics, like the
//! primitive integers; use [`BigInt::try_div_rem`] or `checked_div` to
//! handle it.
//!

use crate::*;


impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, rhs: &BigInt) -> BigInt {
        match arithmetic::division::divide_bigints(self, rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);

impl DivAssign<&BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

forward_val_assignop!(impl DivAssign for BigInt, div_assign);

for_each_primitive_int!(impl_binop_for_primitive!(impl Div::div, DivAssign::div_assign for));
