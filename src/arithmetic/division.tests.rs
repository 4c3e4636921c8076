// Tests for division kernels, included by arithmetic/division.rs

use paste::paste;
use num_traits::Zero;
use crate::arithmetic::multiplication::multiply_words_into;
use crate::arithmetic::compare_words;

/// Check q * v <= u < (q + 1) * v
fn assert_valid_quotient(u: &[u32], v: &[u32], q: &[u32]) {
    let width = u.len() + 2;
    let widen = |words: &[u32]| {
        let mut w = words.to_vec();
        w.resize(width, 0);
        w
    };

    let mut product = vec![0; q.len() + v.len() + 1];
    multiply_words_into(q, v, &mut product);
    while product.len() > width {
        assert_eq!(product.pop(), Some(0), "q * v overflows u");
    }
    let product = widen(&product);
    let u = widen(u);
    assert_ne!(compare_words(&product, &u), Ordering::Greater, "quotient too large");

    // remainder must be below the divisor
    let mut remainder = u.clone();
    assert!(!subtract_words_in_place(&mut remainder, &product));
    assert_eq!(compare_words(&remainder, &widen(v)), Ordering::Less, "quotient too small");
}

mod divide_bigints {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:expr, $b:expr => $expected:expr) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a = BigInt::from($a);
                    let b = BigInt::from($b);
                    let quotient = divide_bigints(&a, &b).unwrap();
                    assert_eq!(quotient, BigInt::from($expected));
                    assert!(quotient.is_canonical());
                }
            }
        };
    }

    impl_case!(zero_by_one: 0, 1 => 0);
    impl_case!(seven_by_two: 7, 2 => 3);
    impl_case!(neg_seven_by_two: -7, 2 => -3);
    impl_case!(seven_by_neg_two: 7, -2 => -3);
    impl_case!(neg_seven_by_neg_two: -7, -2 => 3);
    impl_case!(neg_one_by_neg_one: -1, -1 => 1);
    impl_case!(small_by_large: 5, 1u64 << 40 => 0);
    impl_case!(neg_small_by_large: -5, 1u64 << 40 => 0);
    impl_case!(i64_min_by_neg_one: i64::MIN, -1 => 1u64 << 63);
    impl_case!(u128_by_u64: u128::MAX, u64::MAX => (u64::MAX as u128) + 2);
    impl_case!(
        two_word_divisor: 0x1234_5678_9abc_def0_1234_5678_u128, 0x1_0000_0003_u64 =>
        0x1234_5678_9abc_def0_1234_5678_u128 / 0x1_0000_0003_u128
    );
    impl_case!(
        neg_two_word_divisor: -0x7654_3210_fedc_ba98_7654_3210_i128, 0xffff_ffff_0000_0001_u64 =>
        -0x7654_3210_fedc_ba98_7654_3210_i128 / 0xffff_ffff_0000_0001_i128
    );
    impl_case!(i128_min_by_i128_min: i128::MIN, i128::MIN => 1);
    impl_case!(i128_max_by_i128_min: i128::MAX, i128::MIN => 0);

    #[test]
    fn divide_by_zero() {
        assert_eq!(divide_bigints(&BigInt::from(5), &BigInt::zero()), Err(DivideByZeroError));
        assert_eq!(divide_bigints(&BigInt::zero(), &BigInt::zero()), Err(DivideByZeroError));
    }
}

mod divide_by_word {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($w:literal),*] / $d:literal => [$($q:literal),*] rem $r:literal) => {
            #[test]
            fn $name() {
                let (quotient, remainder) = divide_by_word(&[$($w),*], $d);
                let expected: &[u32] = &[$($q),*];
                assert_eq!(quotient.as_slice(), expected);
                assert_eq!(remainder, $r);
            }
        };
    }

    impl_case!(case_empty: [] / 3 => [] rem 0);
    impl_case!(case_small: [7] / 2 => [3] rem 1);
    impl_case!(case_below_divisor: [7] / 9 => [] rem 7);
    impl_case!(case_trim: [0, 1] / 2 => [0x80000000] rem 0);
    impl_case!(case_billion: [0xacd05f15, 0x01b69b4b] / 1000000000 => [123456789] rem 123456789);
    impl_case!(case_max: [0xffffffff, 0xffffffff] / 0xffffffff => [1, 1] rem 0);
}

mod normalization_factor {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $top:literal => $f:literal) => {
            #[test]
            fn $name() {
                let top: u32 = $top;
                let f = normalization_factor(top);
                assert_eq!(f, $f);
                assert!((top as u64) * (f as u64) < (1 << 32));
            }
        };
    }

    impl_case!(case_1: 1 => 0x80000000);
    impl_case!(case_2: 2 => 0x55555555);
    impl_case!(case_0x7fffffff: 0x7fffffff => 2);
    impl_case!(case_0x80000000: 0x80000000 => 1);
    impl_case!(case_max: 0xffffffff => 1);
}

#[test]
fn test_trial_quotient() {
    assert_eq!(trial_quotient(0, 10, 3), 3);
    assert_eq!(trial_quotient(1, 0, 2), 0x80000000);
    // clamped to a single word
    assert_eq!(trial_quotient(0x80000000, 0, 0x80000000), u32::MAX);
    assert_eq!(trial_quotient(0x80000000, 0xffffffff, 0x80000000), u32::MAX);
}

#[test]
fn test_reduce_window_corrects_overestimate() {
    // window = [0, 0, 0x80000000], v = [0xffffffff, 0x80000000]
    // trial = 0xffffffff but the true digit is 0xfffffffe
    let v = [0xffffffff, 0x80000000];
    let mut window = [0, 0, 0x80000000];
    let mut product = [0; 3];

    let (digit, corrections) = reduce_window(&mut window, &v, &mut product);
    assert_eq!(digit, 0xfffffffe);
    assert_eq!(corrections, 1);
    assert_eq!(window, [0xfffffffe, 2, 0]);
}

mod long_divide {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$u:literal; $n:literal] / [$v:literal; $m:literal]) => {
            #[test]
            fn $name() {
                let u: &[u32] = &[$u; $n];
                let v: &[u32] = &[$v; $m];
                let (q, corrections) = long_divide(u, v);
                assert!(corrections <= 2);
                assert_valid_quotient(u, v, q.as_slice());
            }
        };
        ($name:ident: [$($u:literal),*] / [$($v:literal),*]) => {
            #[test]
            fn $name() {
                let u: &[u32] = &[$($u),*];
                let v: &[u32] = &[$($v),*];
                let (q, corrections) = long_divide(u, v);
                assert!(corrections <= 2);
                assert_valid_quotient(u, v, q.as_slice());
            }
        };
    }

    impl_case!(case_equal: [5, 6, 7] / [5, 6, 7]);
    impl_case!(case_one_less: [4, 6, 7] / [5, 6, 7]);
    impl_case!(case_shorter: [0xffffffff, 0xffffffff] / [0, 0, 1]);
    impl_case!(case_top_one: [0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff] / [1, 1]);
    impl_case!(case_top_max: [0, 0, 0, 0, 0x80000000] / [0xffffffff, 0xffffffff]);
    impl_case!(case_top_half: [0, 0, 0x80000000] / [0xffffffff, 0x80000000]);
    impl_case!(case_all_ones: [0xffffffff; 9] / [0xffffffff; 4]);
    impl_case!(case_knuth_add_back: [0, 0, 0x7fffffff, 0x80000000] / [1, 0, 0x80000000]);
    impl_case!(case_sparse: [1, 0, 0, 0, 0, 1] / [0, 0, 1]);
}

#[test]
fn test_random_long_division_within_correction_bound() {
    let mut rng = oorandom::Rand32::new(0x5eed_d1f1);

    // bias some words toward the extremes, which exercise the corrections
    let word = |rng: &mut oorandom::Rand32| match rng.rand_range(0..8) {
        0 => 0,
        1 => u32::MAX,
        2 => 0x80000000,
        3 => 0x7fffffff,
        _ => rng.rand_u32(),
    };

    for _ in 0..2000 {
        let m = rng.rand_range(2..7) as usize;
        let n = m + rng.rand_range(0..6) as usize;

        let mut u: Vec<u32> = (0..n).map(|_| word(&mut rng)).collect();
        let mut v: Vec<u32> = (0..m).map(|_| word(&mut rng)).collect();
        if u[n - 1] == 0 {
            u[n - 1] = 1;
        }
        if v[m - 1] == 0 {
            v[m - 1] = rng.rand_range(1..u32::MAX);
        }

        let (q, corrections) = long_divide(&u, &v);
        assert!(corrections <= 2, "{:?} / {:?}", u, v);
        assert_valid_quotient(&u, &v, q.as_slice());
    }
}
