//! # Operand Parsing
//!
//! Turns the text of an input field into an arbitrary-precision integer.
//!
//! Accepted forms, after trimming surrounding whitespace:
//! - decimal digits with an optional `+` or `-` sign (`42`, `-7`, `+0`)
//! - unsigned prefixed literals: `0x1F` (hex), `0o17` (octal), `0b101` (binary)
//!
//! Everything else is rejected with [`DivError::InvalidOperand`], including
//! empty text, `_` digit separators, decimal points and exponents.

use num_bigint::BigInt;
use num_traits::Num;

use crate::errors::{DivError, DivResult};

/// Field name used for the dividend in errors
pub const DIVIDEND: &str = "x";

/// Field name used for the divisor in errors
pub const DIVISOR: &str = "y";

/// Parse one operand.
///
/// `field` only labels the error.
///
/// # Example
/// ```
/// use intdiv_core::operands::parse_operand;
/// use num_bigint::BigInt;
///
/// assert_eq!(parse_operand("x", " -17 ").unwrap(), BigInt::from(-17));
/// assert_eq!(parse_operand("x", "0xff").unwrap(), BigInt::from(255));
/// assert!(parse_operand("x", "1e3").is_err());
/// ```
pub fn parse_operand(field: &str, text: &str) -> DivResult<BigInt> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DivError::invalid_operand(field, text, "Operand is empty"));
    }

    let (radix, digits) = split_radix(trimmed);
    let digits = if radix == 10 {
        digits.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(digits)
    } else {
        digits
    };

    if digits.is_empty() {
        return Err(DivError::invalid_operand(field, text, "Missing digits"));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_digit(radix)) {
        return Err(DivError::invalid_operand(
            field,
            text,
            format!("'{}' is not a base-{} digit", bad, radix),
        ));
    }

    // Sign (decimal only) is kept in the parsed text; prefixes are stripped.
    let source = if radix == 10 { trimmed } else { digits };
    BigInt::from_str_radix(source, radix)
        .map_err(|e| DivError::invalid_operand(field, text, e.to_string()))
}

/// Split a radix prefix off an already trimmed literal.
fn split_radix(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &text[2..]),
            b'o' | b'O' => return (8, &text[2..]),
            b'b' | b'B' => return (2, &text[2..]),
            _ => {}
        }
    }
    (10, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_decimal_with_signs() {
        assert_eq!(parse_operand(DIVIDEND, "7").unwrap(), big(7));
        assert_eq!(parse_operand(DIVIDEND, "-7").unwrap(), big(-7));
        assert_eq!(parse_operand(DIVIDEND, "+7").unwrap(), big(7));
        assert_eq!(parse_operand(DIVIDEND, "\t  -0 \n").unwrap(), big(0));
    }

    #[test]
    fn test_arbitrary_precision() {
        let text = "-98765432109876543210987654321098765432109876543210";
        let value = parse_operand(DIVIDEND, text).unwrap();
        assert_eq!(value.to_string(), text);
    }

    #[test]
    fn test_prefixed_literals() {
        assert_eq!(parse_operand(DIVISOR, "0x1F").unwrap(), big(31));
        assert_eq!(parse_operand(DIVISOR, "0o17").unwrap(), big(15));
        assert_eq!(parse_operand(DIVISOR, "0B101").unwrap(), big(5));
    }

    #[test]
    fn test_prefix_rejects_sign_and_bad_digits() {
        assert!(parse_operand(DIVISOR, "-0x10").is_err());
        assert!(parse_operand(DIVISOR, "0x").is_err());
        assert!(parse_operand(DIVISOR, "0b102").is_err());
        assert!(parse_operand(DIVISOR, "0x+1").is_err());
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in ["", "   ", "abc", "1.5", "1e3", "1_000", "--1", "+", "-", "1 2", "٣"] {
            let err = parse_operand(DIVIDEND, text).unwrap_err();
            assert_eq!(err.label(), "SYNTAX ERROR", "accepted {:?}", text);
        }
    }

    #[test]
    fn test_error_names_the_field() {
        match parse_operand(DIVISOR, "abc") {
            Err(DivError::InvalidOperand { field, value, .. }) => {
                assert_eq!(field, "y");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidOperand, got {:?}", other),
        }
    }
}
