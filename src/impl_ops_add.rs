//! Addition operator trait implementation
//!

use crate::*;


impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: &BigInt) -> BigInt {
        arithmetic::addition::add_bigints(self, rhs)
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(mut self, rhs: &BigInt) -> BigInt {
        self += rhs;
        self
    }
}

impl Add<BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: BigInt) -> BigInt {
        rhs + self
    }
}

impl Add<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: BigInt) -> BigInt {
        // grow whichever operand is already longer
        if self.word_len() >= rhs.word_len() {
            self + &rhs
        } else {
            rhs + &self
        }
    }
}

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        arithmetic::addition::add_assign_bigint(self, rhs);
    }
}

forward_val_assignop!(impl AddAssign for BigInt, add_assign);

for_each_primitive_int!(impl_binop_for_primitive!(impl Add::add, AddAssign::add_assign for));


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;
    use stdlib::str::FromStr;

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal => $c:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a = BigInt::from_str($a).unwrap();
                    let b = BigInt::from_str($b).unwrap();
                    let c = BigInt::from_str($c).unwrap();

                    assert_eq!(&a + &b, c);
                    assert_eq!(a.clone() + &b, c);
                    assert_eq!(&a + b.clone(), c);
                    assert_eq!(a.clone() + b.clone(), c);
                    assert_eq!(&b + &a, c);

                    let mut s = a.clone();
                    s += &b;
                    assert_eq!(s, c);

                    let mut s = a;
                    s += b;
                    assert_eq!(s, c);
                }
            }
        };
    }

    impl_case!(small: "12" + "30" => "42");
    impl_case!(cancel: "-12345678901234567890" + "12345678901234567890" => "0");
    impl_case!(carry: "18446744073709551615" + "1" => "18446744073709551616");
    impl_case!(mixed_sign: "-340282366920938463463374607431768211456" + "1" => "-340282366920938463463374607431768211455");
    impl_case!(neg_neg: "-99999999999999999999" + "-1" => "-100000000000000000000");
    impl_case!(
        long: "123456789012345678901234567890123456789012345678901234567890"
            + "987654321098765432109876543210987654321098765432109876543210"
            => "1111111110111111111011111111101111111110111111111011111111100"
    );

    #[test]
    fn add_primitives() {
        let a = BigInt::from(u64::MAX);
        assert_eq!(&a + 1u8, BigInt::from(1u128 << 64));
        assert_eq!(1i32 + &a, BigInt::from(1u128 << 64));
        assert_eq!(a.clone() + -1i64, BigInt::from(u64::MAX - 1));
        assert_eq!(-5i8 + a.clone(), BigInt::from(u64::MAX - 5));
        assert_eq!(a.clone() + u128::MAX, BigInt::from(u128::MAX) + BigInt::from(u64::MAX));

        let mut b = BigInt::from(-3);
        b += 3usize;
        assert!(b.is_zero());
        b += i128::MIN;
        assert_eq!(b, BigInt::from(i128::MIN));
    }

    #[test]
    fn add_assign_leaves_copy_untouched() {
        let a = BigInt::from_str("1000000000000000000000000000000000000").unwrap();
        let mut b = a.clone();
        b += &a;
        assert_eq!(a, BigInt::from_str("1000000000000000000000000000000000000").unwrap());
        assert_eq!(b, BigInt::from_str("2000000000000000000000000000000000000").unwrap());
    }
}
