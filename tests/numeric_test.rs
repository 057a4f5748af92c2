//! Round-trip properties of the number codec, driven through the full
//! parser and the low-level conversions.

use std::error::Error;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokson::numeric::{
    decimal_to_double, write_double, write_integer, MAX_DOUBLE_LENGTH, MAX_INTEGER_LENGTH,
};
use tokson::parser::JsonParser;
use tokson::JsonToken;

type TestResult = Result<(), Box<dyn Error>>;

fn format_double(value: f64) -> String {
    let mut buf = [0_u8; MAX_DOUBLE_LENGTH];
    let len = write_double(&mut buf, value);
    std::str::from_utf8(&buf[..len]).unwrap().to_owned()
}

fn parse_number(text: &str) -> (JsonToken, f64) {
    let mut parser = JsonParser::new(text.as_bytes());
    let token = parser.next_token().unwrap();
    let value = parser.float_value().unwrap();
    (token, value)
}

fn significant_digits(text: &str) -> usize {
    let mantissa: String = text
        .chars()
        .take_while(|&c| c != 'e')
        .filter(|c| c.is_ascii_digit())
        .collect();
    mantissa.trim_matches('0').len().max(1)
}

fn assert_round_trip(value: f64) {
    let text = format_double(value);
    // the standard library conversion is correctly rounded; use it as a
    // second, independent reference
    let reference: f64 = text.parse().unwrap();
    assert_eq!(
        value.to_bits(),
        reference.to_bits(),
        "printed form {text} of {value:e} does not recover"
    );
    let (_, parsed) = parse_number(&text);
    assert_eq!(
        value.to_bits(),
        parsed.to_bits(),
        "parsing {text} back does not recover {value:e}"
    );
    assert!(
        significant_digits(&text) <= 17,
        "{text} has more than 17 significant digits"
    );
}

#[test]
fn fixed_corpus_round_trips() {
    let cases = [
        1e23,
        1.123456e23,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::from_bits(1), // smallest denormal
        -65.613616999999977,
        7.2057594037927933e16,
        1.0e-308,
        0.1e-308,
        0.01e-307,
        1.79769e308,
        2.22507e-308,
        -1.79769e308,
        -2.22507e-308,
        1e-308,
        -0.0,
        0.0,
        1.7955348806030474e19,
        1.0154032828453354e19,
        2.267954527701348e60,
        9934509011495037000.0,
        29018956725463772.0,
        6.0807728793355840e15,
        1.4752497761390908e16,
    ];
    for value in cases {
        assert_round_trip(value);
    }
}

#[test]
fn power_of_ten_round_trips() {
    for exponent in -308..=308 {
        let value: f64 = format!("1e{exponent}").parse().unwrap();
        assert_round_trip(value);
    }
}

#[test]
fn binade_boundary_round_trips() {
    // values whose lower neighbor is only half an ulp away
    for biased_exponent in 1_u64..2047 {
        assert_round_trip(f64::from_bits(biased_exponent << 52));
    }
}

#[test]
fn random_round_trips() {
    let mut rng = StdRng::seed_from_u64(123456);
    for _ in 0..1_000_000 {
        let bits = rng.gen_range(0x1..=0x7FEF_FFFF_FFFF_FFFF_u64);
        assert_round_trip(f64::from_bits(bits));
    }
}

#[test]
fn random_decimal_to_double_is_correctly_rounded() {
    let mut rng = StdRng::seed_from_u64(654321);
    for _ in 0..100_000 {
        let significand = rng.gen_range(1..=0x7FFF_FFFF_FFFF_FFFF_u64);
        let exponent = rng.gen_range(-330..=310);
        let expected: f64 = format!("{significand}e{exponent}").parse().unwrap();
        let digits = significand.ilog10() + 1;
        let value = decimal_to_double(significand, digits, exponent);
        assert_eq!(
            expected.to_bits(),
            value.to_bits(),
            "for {significand}e{exponent}"
        );
    }
}

#[test]
fn scenario_bit_patterns() {
    assert_eq!("1e23", format_double(1e23));
    let (token, value) = parse_number("1e23");
    assert_eq!(JsonToken::Float, token);
    assert_eq!(0x44B5_2D02_C7E1_4AF6, value.to_bits());

    assert_eq!("-0", format_double(-0.0));
    let (token, value) = parse_number("-0");
    assert_eq!(JsonToken::Float, token);
    assert_eq!(0x8000_0000_0000_0000, value.to_bits());

    // does not fit an i64, so the 19 nines round into a float
    let (token, value) = parse_number("9999999999999999999");
    assert_eq!(JsonToken::Float, token);
    assert_eq!(0x43E1_58E4_6091_3D00, value.to_bits());

    let (token, value) = parse_number("12.34567890123456780");
    assert_eq!(JsonToken::Float, token);
    assert_eq!(0x4028_B0FC_D32F_707A, value.to_bits());
}

#[test]
fn out_of_range_exponents_saturate() {
    let (_, value) = parse_number("1e999");
    assert_eq!(f64::INFINITY, value);
    let (_, value) = parse_number("-1e999");
    assert_eq!(f64::NEG_INFINITY, value);
    let (_, value) = parse_number("1e-999");
    assert_eq!(0.0, value);
    let (_, value) = parse_number("1e99999999999999999999");
    assert_eq!(f64::INFINITY, value);
}

#[test]
fn integer_round_trips() -> TestResult {
    let cases = [0, 1, -1, 101, 4096, i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1];
    for value in cases {
        let mut buf = [0_u8; MAX_INTEGER_LENGTH];
        let start = write_integer(&mut buf, value);
        let text = std::str::from_utf8(&buf[start..])?;
        assert_eq!(value, text.parse::<i64>()?, "for {text}");

        let mut parser = JsonParser::new(text.as_bytes());
        assert_eq!(JsonToken::Integer, parser.next_token()?, "for {text}");
        assert_eq!(value, parser.integer_value()?, "for {text}");
    }

    // one magnitude further in either direction no longer fits
    let mut parser = JsonParser::new("9223372036854775808".as_bytes());
    assert_eq!(JsonToken::Float, parser.next_token()?);
    let mut parser = JsonParser::new("-9223372036854775809".as_bytes());
    assert_eq!(JsonToken::Float, parser.next_token()?);
    Ok(())
}
