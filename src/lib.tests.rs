// Tests for BigInt, included by lib.rs

/// Values used by the algebraic-law and oracle tests
fn sample_values() -> Vec<BigInt> {
    [
        "0",
        "1",
        "-1",
        "2",
        "-2",
        "7",
        "-7",
        "4294967295",
        "-4294967295",
        "4294967296",
        "-4294967296",
        "2147483648",
        "-2147483648",
        "18446744073709551615",
        "-18446744073709551616",
        "123456789123456789",
        "-987654321987654321987654321",
        "340282366920938463463374607431768211456",
        "-170141183460469231731687303715884105728",
        "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        "-31415926535897932384626433832795028841971693993751058209749445923078164062862",
    ]
    .iter()
    .map(|s| BigInt::from_str(s).unwrap())
    .collect()
}

fn to_oracle(n: &BigInt) -> num_bigint::BigInt {
    num_bigint::BigInt::from_str(&n.to_string()).unwrap()
}

mod canonical_form {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $negative:literal, [$($w:literal),*] => [$($e:literal),*]) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let n = BigInt::from_slice($negative, &[$($w),*]);
                    let expected: &[u32] = &[$($e),*];
                    assert_eq!(n.words(), expected);
                    assert_eq!(n.is_negative(), $negative);
                    assert!(n.is_canonical());
                }
            }
        };
    }

    impl_case!(zero: false, [] => []);
    impl_case!(zero_padded: false, [0, 0, 0] => []);
    impl_case!(neg_one: true, [] => []);
    impl_case!(neg_one_padded: true, [0xffffffff, 0xffffffff] => []);
    impl_case!(keeps_low_zero: false, [0, 1, 0] => [0, 1]);
    impl_case!(neg_two: true, [0xfffffffe, 0xffffffff] => [0xfffffffe]);
    impl_case!(high_bit_positive: false, [0x80000000, 0] => [0x80000000]);
    impl_case!(low_bits_negative: true, [0x7fffffff] => [0x7fffffff]);

    #[test]
    fn zero_and_neg_one_differ() {
        let zero = BigInt::zero();
        let neg_one = BigInt::from(-1);
        assert_eq!(zero.word_len(), 0);
        assert_eq!(neg_one.word_len(), 0);
        assert_ne!(zero, neg_one);
        assert!(zero.is_zero());
        assert!(!neg_one.is_zero());
        assert_eq!(BigInt::default(), zero);
    }

    #[test]
    fn from_words_trims_buffer() {
        let words = DigitBuffer::from(&[5, 0, 0, 0, 0, 0, 0][..]);
        let n = BigInt::from_words(false, words);
        assert_eq!(n.words(), &[5]);
        assert_eq!(n, BigInt::from(5));
    }

    #[test]
    fn results_are_canonical() {
        let values = sample_values();
        for a in values.iter() {
            assert!((-a).is_canonical(), "-{}", a);
            assert!((!a).is_canonical(), "!{}", a);
            assert!((a >> 37u32).is_canonical(), "{} >> 37", a);
            for b in values.iter() {
                assert!((a + b).is_canonical(), "{} + {}", a, b);
                assert!((a - b).is_canonical(), "{} - {}", a, b);
                assert!((a * b).is_canonical(), "{} * {}", a, b);
                assert!((a & b).is_canonical(), "{} & {}", a, b);
                assert!((a | b).is_canonical(), "{} | {}", a, b);
                assert!((a ^ b).is_canonical(), "{} ^ {}", a, b);
                if !b.is_zero() {
                    assert!((a / b).is_canonical(), "{} / {}", a, b);
                    assert!((a % b).is_canonical(), "{} % {}", a, b);
                }
            }
        }
    }
}

mod extended_word {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:expr, $idx:literal => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(BigInt::from($n).extended_word($idx), $expected);
            }
        };
    }

    impl_case!(case_zero: 0, 0 => 0);
    impl_case!(case_zero_far: 0, 100 => 0);
    impl_case!(case_neg_one: -1, 0 => 0xffffffff);
    impl_case!(case_neg_one_far: -1, 100 => 0xffffffff);
    impl_case!(case_neg_two: -2, 0 => 0xfffffffe);
    impl_case!(case_u64_high: 0x1234_5678_9abc_def0u64, 1 => 0x12345678);
    impl_case!(case_u64_past: 0x1234_5678_9abc_def0u64, 2 => 0);
    impl_case!(case_i64_min_high: i64::MIN, 1 => 0x80000000);
    impl_case!(case_i64_min_past: i64::MIN, 2 => 0xffffffff);
}

mod bits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:expr => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(BigInt::from($n).bits(), $expected);
            }
        };
    }

    impl_case!(case_0: 0 => 0);
    impl_case!(case_1: 1 => 1);
    impl_case!(case_neg_1: -1 => 1);
    impl_case!(case_255: 255 => 8);
    impl_case!(case_neg_256: -256 => 9);
    impl_case!(case_u32_max: u32::MAX => 32);
    impl_case!(case_2p32: 1u64 << 32 => 33);
    impl_case!(case_i128_min: i128::MIN => 128);
    impl_case!(case_u128_max: u128::MAX => 128);
}

#[test]
fn test_abs_and_signum() {
    for (n, abs, signum) in [(0i64, 0i64, 0i64), (5, 5, 1), (-5, 5, -1), (i64::MIN + 1, i64::MAX, -1)] {
        let n = BigInt::from(n);
        assert_eq!(n.abs(), BigInt::from(abs));
        assert_eq!(n.signum(), BigInt::from(signum));
    }

    let min = BigInt::from(i64::MIN);
    assert_eq!(min.abs(), BigInt::from(1u64 << 63));
    assert_eq!(min.abs().to_string(), "9223372036854775808");
}

#[test]
fn test_increment_decrement() {
    let mut n = BigInt::from(-2);
    n.increment();
    assert_eq!(n, BigInt::from(-1));
    n.increment();
    assert!(n.is_zero());
    n.increment();
    assert_eq!(n, BigInt::one());
    n.decrement();
    n.decrement();
    assert_eq!(n, BigInt::from(-1));

    let mut n = BigInt::from(u32::MAX);
    n.increment();
    assert_eq!(n.words(), &[0, 1]);
    n.decrement();
    assert_eq!(n.words(), &[0xffffffff]);

    let mut n = BigInt::from(i32::MIN);
    n.decrement();
    assert_eq!(n, BigInt::from(i32::MIN as i64 - 1));
}

#[test]
fn test_increment_leaves_clone() {
    let original = BigInt::from(u128::MAX);
    let mut copy = original.clone();
    copy.increment();
    assert_eq!(original, BigInt::from(u128::MAX));
    assert_eq!(copy, BigInt::from(u128::MAX) + 1u32);
}

mod try_div_rem {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:expr, $b:expr => $q:expr, $r:expr) => {
            #[test]
            fn $name() {
                let a = BigInt::from($a);
                let b = BigInt::from($b);
                let (q, r) = a.try_div_rem(&b).unwrap();
                assert_eq!(q, BigInt::from($q));
                assert_eq!(r, BigInt::from($r));
            }
        };
    }

    impl_case!(case_7_2: 7, 2 => 3, 1);
    impl_case!(case_n7_2: -7, 2 => -3, -1);
    impl_case!(case_7_n2: 7, -2 => -3, 1);
    impl_case!(case_n7_n2: -7, -2 => 3, -1);
    impl_case!(case_0_n3: 0, -3 => 0, 0);
    impl_case!(case_small_big: 5, u64::MAX => 0, 5);

    #[test]
    fn case_i128_min_n1_quotient_grows() {
        let (q, _) = BigInt::from(i128::MIN).try_div_rem(&BigInt::from(-1)).unwrap();
        assert_eq!(q, BigInt::from(u128::MAX) - &BigInt::from(i128::MAX));
        assert_eq!(q.words(), &[0, 0, 0, 0x80000000]);
        assert!(!q.is_negative());
    }

    #[test]
    fn case_divide_by_zero() {
        let a = BigInt::from(10);
        assert_eq!(a.try_div_rem(&BigInt::zero()), Err(crate::DivideByZeroError));
    }
}

#[test]
fn case_i128_min_n1_quotient_value() {
    let (q, r) = BigInt::from(i128::MIN).try_div_rem(&BigInt::from(-1)).unwrap();
    assert_eq!(q.to_string(), "170141183460469231731687303715884105728");
    assert!(r.is_zero());
}

mod scenarios {
    use super::*;

    #[test]
    fn double_from_string() {
        let a = BigInt::from_str("123456789123456789").unwrap();
        assert_eq!((&a * 2u32).to_string(), "246913578246913578");
        assert_eq!((a * BigInt::from(2)).to_string(), "246913578246913578");
    }

    #[test]
    fn truncating_division() {
        let a = BigInt::from(-7);
        assert_eq!(&a / 2i32, BigInt::from(-3));
        assert_eq!(&a % 2i32, BigInt::from(-1));
    }

    #[test]
    fn shift_one_past_two_words() {
        let n = BigInt::one() << 64u32;
        assert_eq!(n.words(), &[0, 0, 1]);
        assert_eq!(n.to_string(), "18446744073709551616");
    }

    #[test]
    fn shift_neg_one_right() {
        assert_eq!(BigInt::from(-1) >> 1u32, BigInt::from(-1));
        assert_eq!(BigInt::from(-1) >> 1000u32, BigInt::from(-1));
    }

    #[test]
    fn parse_leading_zeros() {
        let n = BigInt::from_str("-000123").unwrap();
        assert_eq!(n, BigInt::from(-123));
        assert_eq!(n.to_string(), "-123");
    }

    #[test]
    fn bitwise_small_negative() {
        let a = BigInt::from(-12);
        let b = BigInt::from(10);
        assert_eq!(&a & &b, BigInt::from(-12 & 10));
        assert_eq!(&a | &b, BigInt::from(-12 | 10));
        assert_eq!(&a ^ &b, BigInt::from(-12 ^ 10));
    }

    #[test]
    fn factorial_50() {
        let mut n = BigInt::one();
        for i in 1..=50u32 {
            n *= i;
        }
        assert_eq!(
            n.to_string(),
            "30414093201713378043612608166064768844377641568960512000000000000"
        );
        for i in (1..=50u32).rev() {
            n /= i;
        }
        assert_eq!(n, BigInt::one());
    }
}

mod laws {
    use super::*;

    #[test]
    fn addition_commutes_and_inverts() {
        let values = sample_values();
        for a in values.iter() {
            assert_eq!(a + BigInt::zero(), *a);
            assert_eq!(a - a, BigInt::zero());
            for b in values.iter() {
                let sum = a + b;
                assert_eq!(sum, b + a, "{} + {}", a, b);
                assert_eq!(&sum - b, *a, "({} + {}) - {}", a, b, b);
                assert_eq!(a - b, -(b - a), "{} - {}", a, b);
            }
        }
    }

    #[test]
    fn multiplication_distributes() {
        let values = sample_values();
        for a in values.iter() {
            assert_eq!(a * BigInt::one(), *a);
            assert_eq!(a * BigInt::from(-1), -a);
            for b in values.iter() {
                assert_eq!(a * b, b * a, "{} * {}", a, b);
                for c in values.iter().step_by(3) {
                    assert_eq!(a * (b + c), a * b + a * c, "{} * ({} + {})", a, b, c);
                }
            }
        }
    }

    #[test]
    fn addition_and_multiplication_associate() {
        let values = sample_values();
        for a in values.iter() {
            for b in values.iter().step_by(2) {
                for c in values.iter().step_by(3) {
                    assert_eq!((a + b) + c, a + (b + c), "({} + {}) + {}", a, b, c);
                    assert_eq!((a * b) * c, a * (b * c), "({} * {}) * {}", a, b, c);
                }
            }
        }
    }

    #[test]
    fn division_reconstructs_dividend() {
        let values = sample_values();
        for a in values.iter() {
            for b in values.iter().filter(|b| !b.is_zero()) {
                let q = a / b;
                let r = a % b;
                assert_eq!(&q * b + &r, *a, "{} / {}", a, b);
                assert!(r.abs() < b.abs(), "{} % {}", a, b);
                assert!(r.is_zero() || r.is_negative() == a.is_negative(), "{} % {}", a, b);
            }
        }
    }

    #[test]
    fn negation_and_complement() {
        for a in sample_values() {
            assert_eq!(-(-&a), a);
            assert_eq!(!!&a, a);
            assert_eq!(!&a, -&a - 1u32);
            assert_eq!(&a ^ &a, BigInt::zero());
            assert_eq!(&a & !&a, BigInt::zero());
            assert_eq!(&a | !&a, BigInt::from(-1));
        }
    }

    #[test]
    fn shifts_scale_by_powers_of_two() {
        for a in sample_values() {
            for k in [0u32, 1, 5, 31, 32, 33, 64, 95, 200] {
                let power = BigInt::one() << k;
                let shifted = &a << k;
                assert_eq!(shifted, &a * &power, "{} << {}", a, k);
                assert_eq!(&shifted >> k, a, "({} << {}) >> {}", a, k, k);

                let expected = num_integer::Integer::div_floor(&a, &power);
                assert_eq!(&a >> k, expected, "{} >> {}", a, k);
            }
        }
    }
}

#[test]
fn test_typed_primitive_operands() {
    let a = BigInt::from(-7);
    assert_eq!(&a * 2u32, BigInt::from(-14));
    assert_eq!(3i64 * &a, BigInt::from(-21));
    assert_eq!(&a / 2i32, BigInt::from(-3));
    assert_eq!(&a % 2i32, BigInt::from(-1));
    assert_eq!(&a >> 1u32, BigInt::from(-4));

    let mut b = a.clone();
    b *= -3i32;
    assert_eq!(b, BigInt::from(21));
}

#[test]
fn test_clone_independence() {
    let original = BigInt::from_str("-98765432109876543210987654321098765432109876543210").unwrap();
    let copy = original.clone();

    let mut added = copy.clone();
    added += 1u32;
    let mut anded = copy.clone();
    anded &= BigInt::from(0xff);
    let mut shifted = copy.clone();
    shifted <<= 3u32;
    let mut multiplied = copy.clone();
    multiplied *= -3i32;

    assert_eq!(original, copy);
    assert_eq!(original.to_string(), "-98765432109876543210987654321098765432109876543210");
    assert_ne!(added, original);
    assert_ne!(anded, original);
    assert_ne!(shifted, original);
    assert_ne!(multiplied, original);
}

#[test]
fn test_hash_matches_equality() {
    use stdlib::hash::{Hash, Hasher};
    use stdlib::DefaultHasher;

    fn hash(n: &BigInt) -> u64 {
        let mut hasher = DefaultHasher::new();
        n.hash(&mut hasher);
        hasher.finish()
    }

    let a = BigInt::from_str("1267650600228229401496703205376").unwrap();
    let b = BigInt::one() << 100u32;
    let c = BigInt::from_slice(false, &[0, 0, 0, 16, 0, 0]);
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(hash(&a), hash(&b));
    assert_eq!(hash(&a), hash(&c));

    assert_ne!(hash(&BigInt::zero()), hash(&BigInt::from(-1)));
}

#[test]
fn test_matches_num_bigint() {
    let values = sample_values();
    for a in values.iter() {
        let oa = to_oracle(a);
        assert_eq!((-a).to_string(), (-&oa).to_string());
        assert_eq!((!a).to_string(), (!&oa).to_string());
        assert_eq!((a >> 45u32).to_string(), (&oa >> 45u32).to_string());
        assert_eq!((a << 45u32).to_string(), (&oa << 45u32).to_string());

        for b in values.iter() {
            let ob = to_oracle(b);
            assert_eq!((a + b).to_string(), (&oa + &ob).to_string(), "{} + {}", a, b);
            assert_eq!((a - b).to_string(), (&oa - &ob).to_string(), "{} - {}", a, b);
            assert_eq!((a * b).to_string(), (&oa * &ob).to_string(), "{} * {}", a, b);
            assert_eq!((a & b).to_string(), (&oa & &ob).to_string(), "{} & {}", a, b);
            assert_eq!((a | b).to_string(), (&oa | &ob).to_string(), "{} | {}", a, b);
            assert_eq!((a ^ b).to_string(), (&oa ^ &ob).to_string(), "{} ^ {}", a, b);
            assert_eq!(a.cmp(b), oa.cmp(&ob), "{} <=> {}", a, b);
            if !b.is_zero() {
                assert_eq!((a / b).to_string(), (&oa / &ob).to_string(), "{} / {}", a, b);
                assert_eq!((a % b).to_string(), (&oa % &ob).to_string(), "{} % {}", a, b);
            }
        }
    }
}

#[test]
fn test_to_primitive_round_trip() {
    for n in [0i128, 1, -1, i64::MIN as i128, i64::MAX as i128, i128::MIN, i128::MAX] {
        assert_eq!(BigInt::from(n).to_i128(), Some(n));
    }
    assert_eq!((BigInt::from(i128::MAX) + 1u32).to_i128(), None);
}
