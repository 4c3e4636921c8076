// \file src/macros.rs
//! macros for forwarding operator implementations

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, &other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, other)
            }
        }
    };
}

// Forward everything to ref-ref, when reusing storage is not helpful
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
    };
}

/// Owned right-hand side of a compound assignment forwards to the borrowed one
macro_rules! forward_val_assignop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                self.$method(&other);
            }
        }
    };
}

/// Arithmetic between BigInt and a primitive integer, in both operand orders
///
/// The primitive is widened to a BigInt and the ref-ref impl does the work.
/// Every primitive type is covered, so an operand literal needs a concrete
/// type (`&n * 2u32`, not `&n * 2`).
///
macro_rules! impl_binop_for_primitive {
    (impl $imp:ident::$method:ident, $imp_assign:ident::$method_assign:ident for $($t:ty),*) => {
        $(
            impl $imp<$t> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: $t) -> BigInt {
                    $imp::$method(&self, &BigInt::from(rhs))
                }
            }

            impl $imp<$t> for &BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: $t) -> BigInt {
                    $imp::$method(self, &BigInt::from(rhs))
                }
            }

            impl $imp<BigInt> for $t {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: BigInt) -> BigInt {
                    $imp::$method(&BigInt::from(self), &rhs)
                }
            }

            impl $imp<&BigInt> for $t {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: &BigInt) -> BigInt {
                    $imp::$method(&BigInt::from(self), rhs)
                }
            }

            impl $imp_assign<$t> for BigInt {
                #[inline]
                fn $method_assign(&mut self, rhs: $t) {
                    self.$method_assign(&BigInt::from(rhs));
                }
            }
        )*
    };
}

/// Apply a macro to every primitive integer type
macro_rules! for_each_primitive_int {
    ($mac:ident ! ($($args:tt)*)) => {
        $mac!($($args)* u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    };
}
