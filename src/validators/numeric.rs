//! String-numeric rules: checks that a string parses as a number.
//!
//! `number` and `integer` accept radix prefixes (`0b`, `0o`, `0x`) with an
//! optional leading sign; `decimal` is base-10 only.

use crate::codes;
use crate::foundation::Error;
use crate::message::templates;

/// Sign of a parsed numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Positive,
    Negative,
}

/// Splits an optional leading sign from the digits.
fn split_sign(input: &str) -> (Sign, &str) {
    if let Some(rest) = input.strip_prefix('-') {
        (Sign::Negative, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (Sign::Positive, rest)
    } else {
        (Sign::Positive, input)
    }
}

/// Strips a radix prefix, returning the digits and the radix.
fn split_radix(input: &str) -> (u32, &str) {
    let bytes = input.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'b' | b'B' => return (2, &input[2..]),
            b'o' | b'O' => return (8, &input[2..]),
            b'x' | b'X' => return (16, &input[2..]),
            _ => {}
        }
    }
    (10, input)
}

fn parse_integer(input: &str) -> Option<(Sign, u128)> {
    let (sign, rest) = split_sign(input);
    let (radix, digits) = split_radix(rest);
    u128::from_str_radix(digits, radix)
        .ok()
        .map(|value| (sign, value))
}

fn parse_decimal(input: &str) -> Option<f64> {
    if input.is_empty() {
        return None;
    }
    input.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// A number in any supported notation: prefixed integer or base-10 float.
fn parse_number(input: &str) -> Option<(Sign, f64)> {
    if let Some((sign, value)) = parse_integer(input) {
        #[allow(clippy::cast_precision_loss)]
        return Some((sign, value as f64));
    }
    let (sign, _) = split_sign(input);
    parse_decimal(input).map(|value| (sign, value))
}

fn parse_radix(input: &str, radix: u32, prefixes: &[&str]) -> bool {
    let (_, rest) = split_sign(input);
    let digits = prefixes
        .iter()
        .find_map(|prefix| rest.strip_prefix(prefix))
        .unwrap_or(rest);
    !digits.is_empty() && u128::from_str_radix(digits, radix).is_ok()
}

crate::rule! {
    /// Validates that a string is a number (integer or decimal).
    pub Number for str;
    check(input) { parse_number(input).is_some() }
    fail(input) { Error::new(codes::IS_NUMBER, templates::IS_NUMBER) }
    fn number();
}

crate::rule! {
    /// Validates that a string is a number without a negative sign.
    pub PositiveNumber for str;
    check(input) { matches!(parse_number(input), Some((Sign::Positive, _))) }
    fail(input) { Error::new(codes::IS_POSITIVE_NUMBER, templates::IS_POSITIVE_NUMBER) }
    fn positive_number();
}

crate::rule! {
    /// Validates that a string is a negatively-signed number.
    pub NegativeNumber for str;
    check(input) { matches!(parse_number(input), Some((Sign::Negative, _))) }
    fail(input) { Error::new(codes::IS_NEGATIVE_NUMBER, templates::IS_NEGATIVE_NUMBER) }
    fn negative_number();
}

crate::rule! {
    /// Validates that a string is an integer.
    pub Integer for str;
    check(input) { parse_integer(input).is_some() }
    fail(input) { Error::new(codes::IS_INTEGER, templates::IS_INTEGER) }
    fn integer();
}

crate::rule! {
    /// Validates that a string is an integer without a negative sign.
    pub PositiveInteger for str;
    check(input) { matches!(parse_integer(input), Some((Sign::Positive, _))) }
    fail(input) { Error::new(codes::IS_POSITIVE_INTEGER, templates::IS_POSITIVE_INTEGER) }
    fn positive_integer();
}

crate::rule! {
    /// Validates that a string is a negatively-signed integer.
    pub NegativeInteger for str;
    check(input) { matches!(parse_integer(input), Some((Sign::Negative, _))) }
    fail(input) { Error::new(codes::IS_NEGATIVE_INTEGER, templates::IS_NEGATIVE_INTEGER) }
    fn negative_integer();
}

crate::rule! {
    /// Validates that a string is a base-10 number.
    pub Decimal for str;
    check(input) { parse_decimal(input).is_some() }
    fail(input) { Error::new(codes::IS_DECIMAL, templates::IS_DECIMAL) }
    fn decimal();
}

crate::rule! {
    /// Validates that a string is a binary number (optional `0b` prefix).
    pub Binary for str;
    check(input) { parse_radix(input, 2, &["0b", "0B"]) }
    fail(input) { Error::new(codes::IS_BINARY, templates::IS_BINARY) }
    fn binary();
}

crate::rule! {
    /// Validates that a string is an octal number (optional `0o` prefix).
    pub Octal for str;
    check(input) { parse_radix(input, 8, &["0o", "0O"]) }
    fail(input) { Error::new(codes::IS_OCTAL, templates::IS_OCTAL) }
    fn octal();
}

crate::rule! {
    /// Validates that a string is a hexadecimal number (optional `0x` prefix).
    pub Hexadecimal for str;
    check(input) { parse_radix(input, 16, &["0x", "0X"]) }
    fail(input) { Error::new(codes::IS_HEXADECIMAL, templates::IS_HEXADECIMAL) }
    fn hexadecimal();
}
