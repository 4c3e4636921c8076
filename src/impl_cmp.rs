//! Implementation of comparison operations
//!
//! Values are canonical, so two integers are equal exactly when their signs
//! and stored words match. In particular 0 and -1, which both store no
//! words, differ by sign.
//!
//! Ordering uses the sign first. Between values of the same sign the longer
//! representation is further from zero; between equal lengths the words are
//! compared from the most significant end.
//!

use crate::*;


impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, rhs: &BigInt) -> bool {
        self.negative == rhs.negative && self.words == rhs.words
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        match self.word_len().cmp(&other.word_len()) {
            Ordering::Equal => {
                arithmetic::compare_words(self.words.as_slice(), other.words.as_slice())
            }
            // a longer negative value is more negative
            ord if self.negative => ord.reverse(),
            ord => ord,
        }
    }
}


macro_rules! impl_cmp_for_primitive {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for BigInt {
                #[inline]
                fn eq(&self, rhs: &$t) -> bool {
                    *self == BigInt::from(*rhs)
                }
            }

            impl PartialEq<BigInt> for $t {
                #[inline]
                fn eq(&self, rhs: &BigInt) -> bool {
                    BigInt::from(*self) == *rhs
                }
            }

            impl PartialOrd<$t> for BigInt {
                #[inline]
                fn partial_cmp(&self, rhs: &$t) -> Option<Ordering> {
                    Some(self.cmp(&BigInt::from(*rhs)))
                }
            }

            impl PartialOrd<BigInt> for $t {
                #[inline]
                fn partial_cmp(&self, rhs: &BigInt) -> Option<Ordering> {
                    Some(BigInt::from(*self).cmp(rhs))
                }
            }
        )*
    };
}

for_each_primitive_int!(impl_cmp_for_primitive!());
