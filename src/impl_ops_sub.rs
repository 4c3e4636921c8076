//! Subtraction operator trait implementation
//!

use crate::*;


impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        arithmetic::subtraction::sub_bigints(self, rhs)
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(mut self, rhs: &BigInt) -> BigInt {
        self -= rhs;
        self
    }
}

impl Sub<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: BigInt) -> BigInt {
        self - &rhs
    }
}

forward_ref_val_binop!(impl Sub for BigInt, sub);

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        arithmetic::subtraction::sub_assign_bigint(self, rhs);
    }
}

forward_val_assignop!(impl SubAssign for BigInt, sub_assign);

for_each_primitive_int!(impl_binop_for_primitive!(impl Sub::sub, SubAssign::sub_assign for));


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;
    use stdlib::str::FromStr;

    macro_rules! impl_case {
        ($name:ident: $a:literal - $b:literal => $c:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a = BigInt::from_str($a).unwrap();
                    let b = BigInt::from_str($b).unwrap();
                    let c = BigInt::from_str($c).unwrap();

                    assert_eq!(&a - &b, c);
                    assert_eq!(a.clone() - &b, c);
                    assert_eq!(&a - b.clone(), c);
                    assert_eq!(a.clone() - b.clone(), c);
                    assert_eq!(&b - &a, -&c);

                    let mut s = a.clone();
                    s -= &b;
                    assert_eq!(s, c);

                    let mut s = a;
                    s -= b;
                    assert_eq!(s, c);
                }
            }
        };
    }

    impl_case!(small: "42" - "30" => "12");
    impl_case!(to_zero: "12345678901234567890" - "12345678901234567890" => "0");
    impl_case!(borrow: "18446744073709551616" - "1" => "18446744073709551615");
    impl_case!(to_negative: "1" - "18446744073709551616" => "-18446744073709551615");
    impl_case!(neg_neg: "-100000000000000000000" - "-1" => "-99999999999999999999");
    impl_case!(zero_minus_neg_one: "0" - "-1" => "1");
    impl_case!(
        long: "1111111110111111111011111111101111111110111111111011111111100"
            - "987654321098765432109876543210987654321098765432109876543210"
            => "123456789012345678901234567890123456789012345678901234567890"
    );

    #[test]
    fn sub_primitives() {
        let a = BigInt::from(1u128 << 64);
        assert_eq!(&a - 1u8, BigInt::from(u64::MAX));
        assert_eq!(0i32 - &a, BigInt::from(-(1i128 << 64)));
        assert_eq!(a.clone() - -1i64, BigInt::from((1u128 << 64) + 1));
        assert_eq!(5u64 - a.clone(), BigInt::from(5 - (1i128 << 64)));

        let mut b = BigInt::from(3);
        b -= 3u16;
        assert!(b.is_zero());
        b -= 1isize;
        assert_eq!(b, BigInt::from(-1));
        assert!(b.words().is_empty());
    }

    #[test]
    fn sub_assign_leaves_copy_untouched() {
        let a = BigInt::from_str("-1000000000000000000000000000000000000").unwrap();
        let mut b = a.clone();
        b -= BigInt::from(1);
        assert_eq!(a, BigInt::from_str("-1000000000000000000000000000000000000").unwrap());
        assert_eq!(b, BigInt::from_str("-1000000000000000000000000000000000001").unwrap());
    }
}
