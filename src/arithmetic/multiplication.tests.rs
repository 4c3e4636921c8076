// Tests for multiplication kernels, included by arithmetic/multiplication.rs

use paste::paste;

mod multiply_bigints {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:expr, $b:expr => $expected:expr) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a = BigInt::from($a);
                    let b = BigInt::from($b);
                    let expected = BigInt::from($expected);

                    let product = multiply_bigints(&a, &b);
                    assert_eq!(product, expected);
                    assert!(product.is_canonical());
                    assert_eq!(multiply_bigints(&b, &a), expected);
                }
            }
        };
    }

    impl_case!(zero_zero: 0, 0 => 0);
    impl_case!(zero_neg: 0, -5 => 0);
    impl_case!(neg_one_neg_one: -1, -1 => 1);
    impl_case!(neg_one_one: -1, 1 => -1);
    impl_case!(doubling: 123456789123456789u64, 2 => 246913578246913578u64);
    impl_case!(word_max_squared: u32::MAX, u32::MAX => (u32::MAX as u64) * (u32::MAX as u64));
    impl_case!(neg_word: -(1i64 << 40), 3 => -(3i64 << 40));
    impl_case!(i32_min_squared: i32::MIN, i32::MIN => 1u64 << 62);
    impl_case!(i64_min_by_neg_one: i64::MIN, -1 => 1u64 << 63);
    impl_case!(u64_max_squared: u64::MAX, u64::MAX => (u64::MAX as u128) * (u64::MAX as u128));
    impl_case!(
        neg_mixed_lengths: -0x1_0000_0001_i64, 0x7fff_ffff_ffff_ffff_i64 =>
        -0x1_0000_0001_i128 * 0x7fff_ffff_ffff_ffff_i128
    );
    impl_case!(
        neg_neg: -0x1234_5678_9abc_i64, -0xfedc_ba98_7654_i64 =>
        0x1234_5678_9abc_i128 * 0xfedc_ba98_7654_i128
    );
    impl_case!(
        i128_min_by_one: i128::MIN, 1 => i128::MIN
    );
    impl_case!(
        i128_min_by_neg_one: i128::MIN, -1 => BigInt::from_slice(false, &[0, 0, 0, 0x80000000])
    );
}

mod multiply_by_word {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($w:literal),*] * $m:literal => [$($e:literal),*]) => {
            #[test]
            fn $name() {
                let product = multiply_by_word(&[$($w),*], $m);
                let expected: &[u32] = &[$($e),*];
                assert_eq!(product.as_slice(), expected);
            }
        };
    }

    impl_case!(case_empty: [] * 7 => [0]);
    impl_case!(case_small: [3] * 7 => [21, 0]);
    impl_case!(case_carry: [0xffffffff, 0xffffffff] * 0xffffffff => [1, 0xffffffff, 0xfffffffe]);
    impl_case!(case_by_zero: [5, 6] * 0 => [0, 0, 0]);
}

#[test]
fn test_multiply_add_word_in_place() {
    let mut words = DigitBuffer::new();
    multiply_add_word_in_place(&mut words, 1_000_000_000, 0);
    assert!(words.is_empty());

    multiply_add_word_in_place(&mut words, 1_000_000_000, 123_456_789);
    assert_eq!(words.as_slice(), &[123_456_789]);

    multiply_add_word_in_place(&mut words, 1_000_000_000, 123_456_789);
    let expected = 123_456_789_123_456_789u64;
    assert_eq!(words.as_slice(), &[expected as u32, (expected >> 32) as u32]);

    let mut max = DigitBuffer::from(&[0xffffffff][..]);
    multiply_add_word_in_place(&mut max, 0xffffffff, 0xffffffff);
    assert_eq!(max.as_slice(), &[0, 0xffffffff]);
}

#[test]
fn test_multiply_add_word_leaves_shared_copy() {
    let original = DigitBuffer::from(&[1, 2, 3, 4, 5, 6, 7][..]);
    let mut copy = original.clone();
    multiply_add_word_in_place(&mut copy, 2, 1);
    assert_eq!(original.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(copy.as_slice(), &[3, 4, 6, 8, 10, 12, 14]);
}

#[test]
fn test_multiply_words_into_all_ones() {
    // (2^96 - 1)^2 = 2^192 - 2^97 + 1
    let a = [0xffffffff; 3];
    let mut result = [0; 7];
    multiply_words_into(&a, &a, &mut result);
    assert_eq!(result, [1, 0, 0, 0xfffffffe, 0xffffffff, 0xffffffff, 0]);
}

#[test]
fn test_multiply_words_into_with_zero_words() {
    // (2^64 + 1) * (2^32 + 0) = 2^96 + 2^32
    let a = [1, 0, 1];
    let b = [0, 1];
    let mut result = [0; 6];
    multiply_words_into(&a, &b, &mut result);
    assert_eq!(result, [0, 1, 0, 1, 0, 0]);
}
