//! Bitwise operator trait implementations (BitAnd, BitOr, BitXor)
//!
//! Operands behave as infinitely sign-extended two's-complement numbers.
//!

use crate::*;
use arithmetic::bitwise::{bitwise_assign_bigint, bitwise_bigints};


macro_rules! impl_bitwise_op {
    (impl $imp:ident::$method:ident, $imp_assign:ident::$method_assign:ident, |$x:ident, $y:ident| $op:expr) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                bitwise_bigints(self, rhs, |$x, $y| $op)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, rhs: &BigInt) -> BigInt {
                self.$method_assign(rhs);
                self
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(self, &rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                // commutative
                $imp::$method(rhs, self)
            }
        }

        impl $imp_assign<&BigInt> for BigInt {
            #[inline]
            fn $method_assign(&mut self, rhs: &BigInt) {
                bitwise_assign_bigint(self, rhs, |$x, $y| $op);
            }
        }

        forward_val_assignop!(impl $imp_assign for BigInt, $method_assign);
    };
}

impl_bitwise_op!(impl BitAnd::bitand, BitAndAssign::bitand_assign, |x, y| x & y);
impl_bitwise_op!(impl BitOr::bitor, BitOrAssign::bitor_assign, |x, y| x | y);
impl_bitwise_op!(impl BitXor::bitxor, BitXorAssign::bitxor_assign, |x, y| x ^ y);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:expr, $b:expr) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let (x, y): (i128, i128) = ($a, $b);
                    let a = BigInt::from(x);
                    let b = BigInt::from(y);

                    assert_eq!(&a & &b, BigInt::from(x & y));
                    assert_eq!(&a | &b, BigInt::from(x | y));
                    assert_eq!(&a ^ &b, BigInt::from(x ^ y));

                    assert_eq!(a.clone() & b.clone(), BigInt::from(x & y));
                    assert_eq!(a.clone() | &b, BigInt::from(x | y));
                    assert_eq!(&a ^ b.clone(), BigInt::from(x ^ y));

                    let mut c = a.clone();
                    c &= &b;
                    assert_eq!(c, BigInt::from(x & y));
                    let mut c = a.clone();
                    c |= b.clone();
                    assert_eq!(c, BigInt::from(x | y));
                    let mut c = a.clone();
                    c ^= &b;
                    assert_eq!(c, BigInt::from(x ^ y));
                }
            }
        };
    }

    impl_case!(zeros: 0, 0);
    impl_case!(neg_ones: -1, -1);
    impl_case!(zero_neg_one: 0, -1);
    impl_case!(small: 0b1100, 0b1010);
    impl_case!(neg_small: -12, 10);
    impl_case!(long_neg_short: i128::MIN + 12345, -6789);
    impl_case!(long_pos_short_neg: i128::MAX - 12345, -6789);
    impl_case!(mixed: 0x1234_5678_9abc_def0_0fed_cba9_i128, -0x7777_0000_5555_i128);

    #[test]
    fn de_morgan() {
        let a = BigInt::from(-0x1234_5678_9abc_def0_i64);
        let b = BigInt::from(0xfedc_ba98_u64) << 40u32;

        assert_eq!(!(&a & &b), !&a | !&b);
        assert_eq!(!(&a | &b), !&a & !&b);
    }

    #[test]
    fn bit_assign_leaves_copy_untouched() {
        let a = BigInt::from(u128::MAX) << 64u32;
        let mut b = a.clone();
        b ^= BigInt::from(-1);
        assert_eq!(b, !a.clone());
        assert_eq!(a, BigInt::from(u128::MAX) << 64u32);
    }
}
