extern crate twos_bigint;
use twos_bigint::*;
use std::str::FromStr;

fn main() {
    println!("Hello, Big Integers!");
    let input = "123456789123456789";
    let n = BigInt::from_str(input).unwrap();
    println!("Input ({}) doubled: {}", input, &n * 2u32);

    let factorial: BigInt = (1..=30u32).map(BigInt::from).product();
    println!("30! = {}", factorial);
    println!("30! uses {} bits in {} words", factorial.bits(), factorial.word_len());

    let minus_seven = BigInt::from(-7);
    println!("-7 / 2 = {}", &minus_seven / 2i32);
    println!("-7 % 2 = {}", &minus_seven % 2i32);
    println!("-7 >> 1 = {}", &minus_seven >> 1u32);
    println!("!-7 = {}", !&minus_seven);

    let big_shift = BigInt::one() << 100u32;
    println!("1 << 100 = {}", big_shift);
    println!("words: {:x?}", big_shift.words());

    let mask = BigInt::from(0xffff);
    println!("(-(1 << 100)) & 0xffff = {}", -&big_shift & &mask);

    let copy = big_shift.clone();
    let mut changed = big_shift.clone();
    changed += 1u32;
    println!("copy: {}, changed: {}", copy, changed);

    match big_shift.try_div_rem(&BigInt::zero()) {
        Ok((q, r)) => println!("quotient {} remainder {}", q, r),
        Err(err) => println!("cannot divide: {}", err),
    }

    match BigInt::from_str("12x") {
        Ok(n) => println!("parsed {}", n),
        Err(err) => println!("cannot parse: {}", err),
    }
}
