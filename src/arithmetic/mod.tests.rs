// Tests for the shared word kernels, included by arithmetic/mod.rs

mod extended_read {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:expr; $($idx:literal => $expected:literal),*) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let n = BigInt::from($n);
                    $(
                        assert_eq!(extended_read(&n, $idx), $expected);
                    )*
                }
            }
        };
    }

    impl_case!(zero: 0; 0 => 0, 1 => 0, 100 => 0);
    impl_case!(neg_one: -1; 0 => 0xffffffff, 1 => 0xffffffff, 100 => 0xffffffff);
    impl_case!(neg_two: -2; 0 => 0xfffffffe, 1 => 0xffffffff);
    impl_case!(two_to_32: 1u64 << 32; 0 => 0, 1 => 1, 2 => 0);
    impl_case!(i64_min: i64::MIN; 0 => 0, 1 => 0x80000000, 2 => 0xffffffff);
    impl_case!(u32_max: u32::MAX; 0 => 0xffffffff, 1 => 0, 5 => 0);
}

#[test]
fn test_fill_word() {
    assert_eq!(fill_word(false), 0);
    assert_eq!(fill_word(true), 0xffffffff);
}

#[test]
fn test_sign_of_top_word() {
    assert!(!sign_of_top_word(&[]));
    assert!(!sign_of_top_word(&[0xffffffff, 0x7fffffff]));
    assert!(sign_of_top_word(&[0, 0x80000000]));
}

#[test]
fn test_from_guarded_words() {
    let n = from_guarded_words(DigitBuffer::from(&[5, 0xffffffff, 0xffffffff][..]));
    assert!(n.is_negative());
    assert_eq!(n.words(), &[5]);

    let n = from_guarded_words(DigitBuffer::from(&[0xffffffff, 0, 0][..]));
    assert!(!n.is_negative());
    assert_eq!(n.words(), &[0xffffffff]);

    let n = from_guarded_words(DigitBuffer::from(&[0, 0][..]));
    assert!(n.is_zero());
}

#[test]
fn test_add_with_carry() {
    let mut carry = 0;
    assert_eq!(add_with_carry(0xffffffff, 1, &mut carry), 0);
    assert_eq!(carry, 1);
    assert_eq!(add_with_carry(0xffffffff, 0xffffffff, &mut carry), 0xffffffff);
    assert_eq!(carry, 1);
    assert_eq!(add_with_carry(2, 3, &mut carry), 6);
    assert_eq!(carry, 0);
}

#[test]
fn test_carrying_mul_add_max() {
    let mut carry = 0xffffffff;
    let lo = carrying_mul_add(0xffffffff, 0xffffffff, 0xffffffff, &mut carry);
    assert_eq!((lo, carry), (0xffffffff, 0xffffffff));
}

#[test]
fn test_compare_words() {
    assert_eq!(compare_words(&[], &[]), Ordering::Equal);
    assert_eq!(compare_words(&[5, 1], &[4, 1]), Ordering::Greater);
    assert_eq!(compare_words(&[0, 1], &[0xffffffff, 0]), Ordering::Greater);
    assert_eq!(compare_words(&[9, 0, 2], &[1, 1, 2]), Ordering::Less);
}

#[test]
fn test_subtract_words_in_place() {
    let mut a = [0, 0, 1];
    let borrow = subtract_words_in_place(&mut a, &[1]);
    assert!(!borrow);
    assert_eq!(a, [0xffffffff, 0xffffffff, 0]);

    let mut a = [3, 0];
    let borrow = subtract_words_in_place(&mut a, &[4, 0]);
    assert!(borrow);
    assert_eq!(a, [0xffffffff, 0xffffffff]);
}
