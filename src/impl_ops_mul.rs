//! Multiplication operator trait implementation
//!

use crate::*;


impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        arithmetic::multiplication::multiply_bigints(self, rhs)
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

forward_val_assignop!(impl MulAssign for BigInt, mul_assign);

for_each_primitive_int!(impl_binop_for_primitive!(impl Mul::mul, MulAssign::mul_assign for));


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;
    use stdlib::str::FromStr;

    macro_rules! impl_case {
        ($name:ident: $a:literal * $b:literal => $c:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a = BigInt::from_str($a).unwrap();
                    let b = BigInt::from_str($b).unwrap();
                    let c = BigInt::from_str($c).unwrap();

                    assert_eq!(&a * &b, c);
                    assert_eq!(a.clone() * &b, c);
                    assert_eq!(&a * b.clone(), c);
                    assert_eq!(a.clone() * b.clone(), c);
                    assert_eq!(&b * &a, c);

                    let mut p = a;
                    p *= &b;
                    assert_eq!(p, c);
                    p *= BigInt::from(-1);
                    assert_eq!(p, -c);
                }
            }
        };
    }

    impl_case!(small: "6" * "7" => "42");
    impl_case!(by_zero: "123456789012345678901234567890" * "0" => "0");
    impl_case!(doubling: "123456789123456789" * "2" => "246913578246913578");
    impl_case!(neg_one_squared: "-1" * "-1" => "1");
    impl_case!(neg_pos: "-4294967296" * "4294967296" => "-18446744073709551616");
    impl_case!(
        long: "123456789012345678901234567890" * "-987654321098765432109876543210"
            => "-121932631137021795226185032733622923332237463801111263526900"
    );
    impl_case!(
        neg_neg: "-340282366920938463463374607431768211455" * "-340282366920938463463374607431768211455"
            => "115792089237316195423570985008687907852589419931798687112530834793049593217025"
    );

    #[test]
    fn mul_primitives() {
        let a = BigInt::from(u64::MAX);
        assert_eq!(&a * 2u8, BigInt::from((u64::MAX as u128) * 2));
        assert_eq!(-2i32 * &a, BigInt::from(-(u64::MAX as i128) * 2));
        assert_eq!(a.clone() * 0usize, BigInt::from(0));

        let mut b = BigInt::from(3);
        b *= -3i64;
        assert_eq!(b, BigInt::from(-9));
        b *= u128::MAX;
        assert_eq!(b, BigInt::from(-9) * BigInt::from(u128::MAX));
    }
}
