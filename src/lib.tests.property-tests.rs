// Property tests to be included by lib.rs (if enabled)

use stdlib::str::FromStr;
use stdlib::string::ToString;

/// Arbitrary BigInt built from up to twelve raw two's-complement words
fn bigint_strategy() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), proptest::collection::vec(any::<u32>(), 0..12))
        .prop_map(|(negative, words)| BigInt::from_slice(negative, &words))
}

fn oracle(n: &BigInt) -> num_bigint::BigInt {
    num_bigint::BigInt::from_str(&n.to_string()).unwrap()
}

mod against_num_bigint {
    use super::*;

    proptest! {
        #[test]
        fn add_sub(a in bigint_strategy(), b in bigint_strategy()) {
            let (oa, ob) = (oracle(&a), oracle(&b));
            prop_assert_eq!((&a + &b).to_string(), (&oa + &ob).to_string());
            prop_assert_eq!((&a - &b).to_string(), (&oa - &ob).to_string());
        }

        #[test]
        fn mul(a in bigint_strategy(), b in bigint_strategy()) {
            let (oa, ob) = (oracle(&a), oracle(&b));
            prop_assert_eq!((&a * &b).to_string(), (&oa * &ob).to_string());
        }

        #[test]
        fn associativity(a in bigint_strategy(), b in bigint_strategy(), c in bigint_strategy()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        }

        #[test]
        fn div_rem(a in bigint_strategy(), b in bigint_strategy()) {
            prop_assume!(!b.is_zero());
            let (oa, ob) = (oracle(&a), oracle(&b));
            prop_assert_eq!((&a / &b).to_string(), (&oa / &ob).to_string());
            prop_assert_eq!((&a % &b).to_string(), (&oa % &ob).to_string());
        }

        #[test]
        fn bitwise(a in bigint_strategy(), b in bigint_strategy()) {
            let (oa, ob) = (oracle(&a), oracle(&b));
            prop_assert_eq!((&a & &b).to_string(), (&oa & &ob).to_string());
            prop_assert_eq!((&a | &b).to_string(), (&oa | &ob).to_string());
            prop_assert_eq!((&a ^ &b).to_string(), (&oa ^ &ob).to_string());
            prop_assert_eq!((!&a).to_string(), (!&oa).to_string());
        }

        #[test]
        fn shifts(a in bigint_strategy(), k in 0u32..300) {
            let oa = oracle(&a);
            prop_assert_eq!((&a << k).to_string(), (&oa << k).to_string());
            prop_assert_eq!((&a >> k).to_string(), (&oa >> k).to_string());
        }

        #[test]
        fn ordering(a in bigint_strategy(), b in bigint_strategy()) {
            prop_assert_eq!(a.cmp(&b), oracle(&a).cmp(&oracle(&b)));
        }
    }
}

mod laws {
    use super::*;

    proptest! {
        #[test]
        fn canonical_results(a in bigint_strategy(), b in bigint_strategy()) {
            prop_assert!((&a + &b).is_canonical());
            prop_assert!((&a - &b).is_canonical());
            prop_assert!((&a * &b).is_canonical());
            prop_assert!((&a & &b).is_canonical());
            prop_assert!((-&a).is_canonical());
        }

        #[test]
        fn parse_display(a in bigint_strategy()) {
            let s = a.to_string();
            prop_assert_eq!(BigInt::from_str(&s).unwrap(), a);
        }

        #[test]
        fn division_identity(a in bigint_strategy(), b in bigint_strategy()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.try_div_rem(&b).unwrap();
            prop_assert_eq!(&q * &b + &r, a);
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn in_place_matches_binary(a in bigint_strategy(), b in bigint_strategy()) {
            let mut sum = a.clone();
            sum += &b;
            prop_assert_eq!(&sum, &(&a + &b));

            let mut diff = a.clone();
            diff -= &b;
            prop_assert_eq!(&diff, &(&a - &b));

            let mut xor = a.clone();
            xor ^= &b;
            prop_assert_eq!(&xor, &(&a ^ &b));
        }

        #[test]
        fn clone_is_independent(a in bigint_strategy(), b in bigint_strategy()) {
            let original = a.clone();
            let mut copy = a.clone();
            copy += &b;
            copy <<= 7u32;
            prop_assert_eq!(a, original);
        }
    }
}

mod primitives {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< arithmetic_ $t >](n: $t, a in bigint_strategy()) {
                    let wide = BigInt::from(n);

                    prop_assert_eq!(&a + n, &a + &wide);
                    prop_assert_eq!(n + &a, &wide + &a);
                    prop_assert_eq!(&a - n, &a - &wide);
                    prop_assert_eq!(n - &a, &wide - &a);
                    prop_assert_eq!(&a * n, &a * &wide);

                    let mut m = a.clone();
                    m *= n;
                    prop_assert_eq!(m, &a * &wide);
                }

                #[test]
                fn [< round_trip_ $t >](n: $t) {
                    let wide = BigInt::from(n);
                    prop_assert_eq!(wide.to_string(), n.to_string());
                    prop_assert!(wide == n);
                }
            } }
        };
    }

    impl_test!(u8);
    impl_test!(u16);
    impl_test!(u32);
    impl_test!(u64);
    impl_test!(u128);

    impl_test!(i8);
    impl_test!(i16);
    impl_test!(i32);
    impl_test!(i64);
    impl_test!(i128);
}
