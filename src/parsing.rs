//! Routines for parsing decimal strings into BigInts

use crate::{BigInt, DigitBuffer, ParseBigIntError};
use crate::arithmetic::multiplication::multiply_add_word_in_place;


/// Decimal digits that fit in one word chunk
pub(crate) const DIGITS_PER_CHUNK: usize = 9;

/// 10^i for 0 <= i <= DIGITS_PER_CHUNK
pub(crate) const POWERS_OF_TEN: [u32; DIGITS_PER_CHUNK + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Parse an optional '-' followed by one or more ASCII decimal digits
///
/// Leading zeros are allowed. Digits are consumed in chunks of nine, each
/// chunk folded into the accumulator as `acc * 10^len(chunk) + chunk`; the
/// first chunk takes the leftover digits so the rest are all full.
///
pub(crate) fn parse_decimal(s: &str) -> Result<BigInt, ParseBigIntError> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let digits = digits.as_bytes();

    if digits.is_empty() {
        return Err(ParseBigIntError::Empty);
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(ParseBigIntError::InvalidDigit);
    }

    let first_len = match digits.len() % DIGITS_PER_CHUNK {
        0 => DIGITS_PER_CHUNK,
        n => n,
    };
    let (first, rest) = digits.split_at(first_len);

    let mut magnitude = DigitBuffer::new();
    magnitude.reserve(digits.len() / DIGITS_PER_CHUNK + 1);
    multiply_add_word_in_place(&mut magnitude, POWERS_OF_TEN[first.len()], chunk_value(first));
    for chunk in rest.chunks(DIGITS_PER_CHUNK) {
        multiply_add_word_in_place(&mut magnitude, POWERS_OF_TEN[chunk.len()], chunk_value(chunk));
    }

    Ok(BigInt::from_magnitude(negative, magnitude))
}

/// Value of at most nine ASCII digits
fn chunk_value(chunk: &[u8]) -> u32 {
    debug_assert!(chunk.len() <= DIGITS_PER_CHUNK);
    chunk.iter().fold(0, |acc, &d| acc * 10 + (d - b'0') as u32)
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $input:literal => Ok($expected:expr)) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let n = parse_decimal($input).unwrap();
                    assert_eq!(n, BigInt::from($expected));
                    assert!(n.is_canonical());
                }
            }
        };
        ($name:ident: $input:literal => Err($err:ident)) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    assert_eq!(parse_decimal($input), Err(ParseBigIntError::$err));
                }
            }
        };
    }

    impl_case!(zero: "0" => Ok(0));
    impl_case!(neg_zero: "-0" => Ok(0));
    impl_case!(neg_one: "-1" => Ok(-1));
    impl_case!(leading_zeros: "-000123" => Ok(-123));
    impl_case!(many_leading_zeros: "0000000000000000000000042" => Ok(42));
    impl_case!(nine_digits: "999999999" => Ok(999_999_999));
    impl_case!(ten_digits: "1000000000" => Ok(1_000_000_000));
    impl_case!(eighteen_digits: "123456789123456789" => Ok(123_456_789_123_456_789u64));
    impl_case!(u64_max: "18446744073709551615" => Ok(u64::MAX));
    impl_case!(i128_min: "-170141183460469231731687303715884105728" => Ok(i128::MIN));
    impl_case!(u128_max: "340282366920938463463374607431768211455" => Ok(u128::MAX));

    impl_case!(empty: "" => Err(Empty));
    impl_case!(only_minus: "-" => Err(Empty));
    impl_case!(plus: "+5" => Err(InvalidDigit));
    impl_case!(double_minus: "--5" => Err(InvalidDigit));
    impl_case!(inner_minus: "5-5" => Err(InvalidDigit));
    impl_case!(space: " 5" => Err(InvalidDigit));
    impl_case!(trailing_space: "5 " => Err(InvalidDigit));
    impl_case!(underscore: "1_000" => Err(InvalidDigit));
    impl_case!(hex: "0x10" => Err(InvalidDigit));
    impl_case!(decimal_point: "1.5" => Err(InvalidDigit));
    impl_case!(non_ascii_digit: "١٢٣" => Err(InvalidDigit));

    #[test]
    fn test_chunk_value() {
        assert_eq!(chunk_value(b""), 0);
        assert_eq!(chunk_value(b"007"), 7);
        assert_eq!(chunk_value(b"999999999"), 999_999_999);
    }

    #[test]
    fn test_powers_of_ten() {
        for (i, &p) in POWERS_OF_TEN.iter().enumerate() {
            assert_eq!(p as u64, 10u64.pow(i as u32));
        }
    }

    #[test]
    fn test_long_number() {
        // 2^256
        let n = parse_decimal(
            "115792089237316195423570985008687907853269984665640564039457584007913129639936"
        ).unwrap();
        assert_eq!(n.words(), &[0, 0, 0, 0, 0, 0, 0, 0, 1]);

        let n = parse_decimal(
            "-115792089237316195423570985008687907853269984665640564039457584007913129639936"
        ).unwrap();
        assert!(n.is_negative());
        assert_eq!(n.words(), &[0, 0, 0, 0, 0, 0, 0, 0]);
    }
}
