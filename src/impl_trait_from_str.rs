use crate::*;
use stdlib::str::FromStr;

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        // implemented in impl_num.rs
        BigInt::from_str_radix(s, 10)
    }
}




#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                BigInt::from_str($input).unwrap();
            }
        };
    }

    impl_case!(case_empty: "" => "Empty");
    impl_case!(case_minus: "-" => "Empty");
    impl_case!(case_plus: "+1" => "InvalidDigit");
    impl_case!(case_space: "1 2" => "InvalidDigit");
    impl_case!(case_exponent: "1e5" => "InvalidDigit");
    impl_case!(case_underscore: "1_000" => "InvalidDigit");
}
