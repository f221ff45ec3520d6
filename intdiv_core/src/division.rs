//! # Division Engine
//!
//! Computes every rounding variant of `x / y` for arbitrary-precision
//! integers from one truncating division.
//!
//! ## Stages
//!
//! 1. [`TruncatedPair`]: `trunc = x / y` rounded toward zero and
//!    `rem = x - trunc * y` (sign of `x`, `|rem| < |y|`).
//! 2. Each policy adds an offset of `0` or `quotient_sign` to `trunc`, i.e.
//!    it either keeps the truncated quotient or steps once away from zero.
//!    An exact division (`rem == 0`) is never adjusted.
//!
//! Tie policies compare `|2 * rem|` against `|y| + eps`, `eps` being 0 or 1.
//! With integers, `a >= b + 1` is the same as `a > b`, so `eps = 1` keeps an
//! exact halfway tie on `trunc` while `eps = 0` moves it away from zero.
//!
//! ## Example
//!
//! ```rust
//! use intdiv_core::division::divide;
//! use intdiv_core::rounding::RoundingMode;
//! use num_bigint::BigInt;
//!
//! let result = divide(BigInt::from(7), BigInt::from(2)).unwrap();
//! assert_eq!(result.trunc, BigInt::from(3));
//! assert_eq!(result.ties_even, BigInt::from(4));
//! assert_eq!(result.remainder(RoundingMode::Ceil), BigInt::from(-1));
//! ```

use log::trace;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{DivError, DivResult};
use crate::operands::{parse_operand, DIVIDEND, DIVISOR};
use crate::rounding::RoundingMode;

/// Stage 1: the truncating quotient and remainder, plus sign facts about
/// the exact quotient that every policy consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedPair {
    /// Quotient rounded toward zero
    pub trunc: BigInt,
    /// `x - trunc * y`, same sign as `x` or zero
    pub rem: BigInt,
    /// `sign(x) * sign(y)`, 0 only when `x == 0`
    pub quotient_sign: i8,
    /// True when `x` and `y` have different signs (`x == 0` counts as positive)
    pub quotient_negative: bool,
    abs_rem2: BigInt,
    abs_y: BigInt,
}

impl TruncatedPair {
    /// Divide `x` by `y`, rounding toward zero.
    ///
    /// Fails with [`DivError::DivisionByZero`] when `y == 0`.
    pub fn new(x: &BigInt, y: &BigInt) -> DivResult<Self> {
        if y.is_zero() {
            return Err(DivError::DivisionByZero);
        }

        let (trunc, rem) = x.div_rem(y);
        let abs_rem2 = (&rem << 1u32).abs();

        Ok(TruncatedPair {
            trunc,
            rem,
            quotient_sign: sign_of(x) * sign_of(y),
            quotient_negative: x.is_negative() != y.is_negative(),
            abs_rem2,
            abs_y: y.abs(),
        })
    }

    /// Whether the division has a nonzero remainder
    pub fn is_inexact(&self) -> bool {
        !self.rem.is_zero()
    }

    /// Offset (-1, 0 or 1) that `mode` adds to [`TruncatedPair::trunc`].
    pub fn offset(&self, mode: RoundingMode) -> i8 {
        if !self.is_inexact() {
            return 0;
        }

        let trunc_odd = self.trunc.is_odd();
        let step_away = match mode {
            RoundingMode::Trunc => false,
            RoundingMode::Mag => true,
            RoundingMode::Floor => self.quotient_negative,
            RoundingMode::Ceil => !self.quotient_negative,
            RoundingMode::Odd => !trunc_odd,
            RoundingMode::Even => trunc_odd,
            RoundingMode::TiesTrunc => self.past_half(true),
            RoundingMode::TiesMag => self.past_half(false),
            RoundingMode::TiesFloor => self.past_half(!self.quotient_negative),
            RoundingMode::TiesCeil => self.past_half(self.quotient_negative),
            RoundingMode::TiesOdd => self.past_half(trunc_odd),
            RoundingMode::TiesEven => self.past_half(!trunc_odd),
        };

        if step_away {
            self.quotient_sign
        } else {
            0
        }
    }

    /// Quotient under `mode`
    pub fn quotient(&self, mode: RoundingMode) -> BigInt {
        &self.trunc + BigInt::from(self.offset(mode))
    }

    /// `|2 * rem| >= |y| + eps`; `keep_ties` sets `eps = 1`.
    fn past_half(&self, keep_ties: bool) -> bool {
        if keep_ties {
            self.abs_rem2 > self.abs_y
        } else {
            self.abs_rem2 >= self.abs_y
        }
    }
}

fn sign_of(value: &BigInt) -> i8 {
    match value.sign() {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

/// A quotient together with the remainder that makes `x = quotient * y + remainder` hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivRem {
    #[serde(with = "crate::decimal")]
    pub quotient: BigInt,
    #[serde(with = "crate::decimal")]
    pub remainder: BigInt,
}

/// Every rounding variant of one division.
///
/// ## JSON Example
///
/// ```json
/// {
///   "x": "7",
///   "y": "2",
///   "double": 3.5,
///   "trunc": "3",
///   "mag": "4",
///   "floor": "3",
///   "ceil": "4",
///   "odd": "3",
///   "even": "4",
///   "ties_trunc": "3",
///   "ties_mag": "4",
///   "ties_floor": "3",
///   "ties_ceil": "4",
///   "ties_odd": "3",
///   "ties_even": "4",
///   "rem_trunc": "1",
///   "rem_floor": "1"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionResult {
    /// Dividend
    #[serde(with = "crate::decimal")]
    pub x: BigInt,
    /// Divisor, never zero
    #[serde(with = "crate::decimal")]
    pub y: BigInt,

    /// Floating-point `x / y`. Approximate; may be infinite or NaN for huge operands.
    /// JSON has no non-finite numbers, so those are written as `null` and read back as NaN.
    #[serde(deserialize_with = "deserialize_approximate")]
    pub double: f64,

    #[serde(with = "crate::decimal")]
    pub trunc: BigInt,
    #[serde(with = "crate::decimal")]
    pub mag: BigInt,
    #[serde(with = "crate::decimal")]
    pub floor: BigInt,
    #[serde(with = "crate::decimal")]
    pub ceil: BigInt,
    #[serde(with = "crate::decimal")]
    pub odd: BigInt,
    #[serde(with = "crate::decimal")]
    pub even: BigInt,

    #[serde(with = "crate::decimal")]
    pub ties_trunc: BigInt,
    #[serde(with = "crate::decimal")]
    pub ties_mag: BigInt,
    #[serde(with = "crate::decimal")]
    pub ties_floor: BigInt,
    #[serde(with = "crate::decimal")]
    pub ties_ceil: BigInt,
    #[serde(with = "crate::decimal")]
    pub ties_odd: BigInt,
    #[serde(with = "crate::decimal")]
    pub ties_even: BigInt,

    /// Remainder of truncating division (sign of `x`)
    #[serde(with = "crate::decimal")]
    pub rem_trunc: BigInt,
    /// Remainder of flooring division (sign of `y`)
    #[serde(with = "crate::decimal")]
    pub rem_floor: BigInt,
}

impl DivisionResult {
    /// Quotient under `mode`
    pub fn quotient(&self, mode: RoundingMode) -> &BigInt {
        match mode {
            RoundingMode::Trunc => &self.trunc,
            RoundingMode::Mag => &self.mag,
            RoundingMode::Floor => &self.floor,
            RoundingMode::Ceil => &self.ceil,
            RoundingMode::Odd => &self.odd,
            RoundingMode::Even => &self.even,
            RoundingMode::TiesTrunc => &self.ties_trunc,
            RoundingMode::TiesMag => &self.ties_mag,
            RoundingMode::TiesFloor => &self.ties_floor,
            RoundingMode::TiesCeil => &self.ties_ceil,
            RoundingMode::TiesOdd => &self.ties_odd,
            RoundingMode::TiesEven => &self.ties_even,
        }
    }

    /// Remainder `x - q * y` paired with the quotient under `mode`
    pub fn remainder(&self, mode: RoundingMode) -> BigInt {
        &self.x - self.quotient(mode) * &self.y
    }

    /// Quotient and remainder under `mode`
    pub fn div_rem(&self, mode: RoundingMode) -> DivRem {
        DivRem {
            quotient: self.quotient(mode).clone(),
            remainder: self.remainder(mode),
        }
    }

    /// Whether `y` divides `x` exactly
    pub fn is_exact(&self) -> bool {
        self.rem_trunc.is_zero()
    }
}

/// Divide `x` by `y` under every rounding policy.
///
/// # Returns
///
/// * `Ok(DivisionResult)` - All variants
/// * `Err(DivError::DivisionByZero)` - If `y == 0`
pub fn divide(x: BigInt, y: BigInt) -> DivResult<DivisionResult> {
    let pair = TruncatedPair::new(&x, &y)?;
    trace!("{} / {} truncates to {} rem {}", x, y, pair.trunc, pair.rem);

    let floor = pair.quotient(RoundingMode::Floor);
    let rem_floor = &x - &floor * &y;
    let double = approximate_quotient(&x, &y);

    Ok(DivisionResult {
        double,
        mag: pair.quotient(RoundingMode::Mag),
        ceil: pair.quotient(RoundingMode::Ceil),
        odd: pair.quotient(RoundingMode::Odd),
        even: pair.quotient(RoundingMode::Even),
        ties_trunc: pair.quotient(RoundingMode::TiesTrunc),
        ties_mag: pair.quotient(RoundingMode::TiesMag),
        ties_floor: pair.quotient(RoundingMode::TiesFloor),
        ties_ceil: pair.quotient(RoundingMode::TiesCeil),
        ties_odd: pair.quotient(RoundingMode::TiesOdd),
        ties_even: pair.quotient(RoundingMode::TiesEven),
        floor,
        rem_floor,
        rem_trunc: pair.rem,
        trunc: pair.trunc,
        x,
        y,
    })
}

/// Best-effort floating-point quotient. Operands beyond `f64` range become infinities.
fn approximate_quotient(x: &BigInt, y: &BigInt) -> f64 {
    let xf = x.to_f64().unwrap_or(f64::NAN);
    let yf = y.to_f64().unwrap_or(f64::NAN);
    xf / yf
}

/// Quotient and remainder of `x / y` under a single policy.
///
/// # Example
/// ```
/// use intdiv_core::division::div_rem;
/// use intdiv_core::rounding::RoundingMode;
/// use num_bigint::BigInt;
///
/// let r = div_rem(&BigInt::from(-7), &BigInt::from(2), RoundingMode::Floor).unwrap();
/// assert_eq!(r.quotient, BigInt::from(-4));
/// assert_eq!(r.remainder, BigInt::from(1));
/// ```
pub fn div_rem(x: &BigInt, y: &BigInt, mode: RoundingMode) -> DivResult<DivRem> {
    let pair = TruncatedPair::new(x, y)?;
    let quotient = pair.quotient(mode);
    let remainder = x - &quotient * y;
    Ok(DivRem { quotient, remainder })
}

/// Floored remainder: zero or the sign of `y`.
pub fn modulo(x: &BigInt, y: &BigInt) -> DivResult<BigInt> {
    div_rem(x, y, RoundingMode::Floor).map(|r| r.remainder)
}

fn deserialize_approximate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Parse both operand texts and divide.
///
/// A divisor that parses to zero is reported as [`DivError::DivisionByZero`]
/// before the dividend is looked at; otherwise the first operand that fails
/// to parse (dividend first) is reported as [`DivError::InvalidOperand`].
/// So `evaluate("abc", "0")` is a division by zero, not a syntax error,
/// unlike a front end that parses both operands before checking the divisor.
pub fn evaluate(x_text: &str, y_text: &str) -> DivResult<DivisionResult> {
    let divisor = parse_operand(DIVISOR, y_text);
    if matches!(&divisor, Ok(y) if y.is_zero()) {
        return Err(DivError::DivisionByZero);
    }

    let x = parse_operand(DIVIDEND, x_text)?;
    let y = divisor?;
    divide(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn div(x: i64, y: i64) -> DivisionResult {
        divide(big(x), big(y)).unwrap()
    }

    #[test]
    fn test_seven_by_two() {
        let r = div(7, 2);
        assert_eq!(r.trunc, big(3));
        assert_eq!(r.mag, big(4));
        assert_eq!(r.floor, big(3));
        assert_eq!(r.ceil, big(4));
        assert_eq!(r.odd, big(3));
        assert_eq!(r.even, big(4));
        assert_eq!(r.ties_trunc, big(3));
        assert_eq!(r.ties_mag, big(4));
        assert_eq!(r.ties_floor, big(3));
        assert_eq!(r.ties_ceil, big(4));
        assert_eq!(r.ties_odd, big(3));
        assert_eq!(r.ties_even, big(4));
        assert_eq!(r.rem_trunc, big(1));
        assert_eq!(r.rem_floor, big(1));
        assert_eq!(r.double, 3.5);
    }

    #[test]
    fn test_negative_dividend() {
        let r = div(-7, 2);
        assert_eq!(r.trunc, big(-3));
        assert_eq!(r.rem_trunc, big(-1));
        assert_eq!(r.mag, big(-4));
        assert_eq!(r.floor, big(-4));
        assert_eq!(r.ceil, big(-3));
        assert_eq!(r.rem_floor, big(1));
        assert_eq!(r.ties_floor, big(-4));
        assert_eq!(r.ties_ceil, big(-3));
        assert_eq!(r.ties_odd, big(-3));
        assert_eq!(r.ties_even, big(-4));
    }

    #[test]
    fn test_negative_divisor() {
        let r = div(7, -2);
        assert_eq!(r.trunc, big(-3));
        assert_eq!(r.rem_trunc, big(1));
        assert_eq!(r.floor, big(-4));
        assert_eq!(r.rem_floor, big(-1));
        assert_eq!(r.ceil, big(-3));
    }

    #[test]
    fn test_ties_even_on_even_trunc() {
        // 5 / 2 = 2.5: trunc 2 is already even
        let r = div(5, 2);
        assert_eq!(r.ties_even, big(2));
        assert_eq!(r.ties_odd, big(3));
        assert_eq!(r.odd, big(3));
        assert_eq!(r.even, big(2));
    }

    #[test]
    fn test_non_tie_rounds_to_nearest() {
        // 7 / 3 = 2.33 and 8 / 3 = 2.67
        for mode in RoundingMode::ALL.into_iter().filter(|m| m.is_ties()) {
            assert_eq!(*div(7, 3).quotient(mode), big(2), "{}", mode);
            assert_eq!(*div(8, 3).quotient(mode), big(3), "{}", mode);
            assert_eq!(*div(-8, 3).quotient(mode), big(-3), "{}", mode);
        }
    }

    #[test]
    fn test_exact_division_is_never_adjusted() {
        let r = div(-12, 4);
        for mode in RoundingMode::ALL {
            assert_eq!(*r.quotient(mode), big(-3), "{}", mode);
            assert!(r.remainder(mode).is_zero());
        }
        assert!(r.is_exact());
    }

    #[test]
    fn test_zero_dividend() {
        let r = div(0, -5);
        for mode in RoundingMode::ALL {
            assert!(r.quotient(mode).is_zero());
        }
        assert!(r.rem_trunc.is_zero());
        assert!(r.rem_floor.is_zero());
        assert_eq!(r.double, 0.0);
    }

    #[test]
    fn test_truncated_pair_signs() {
        let pair = TruncatedPair::new(&big(-7), &big(-2)).unwrap();
        assert_eq!(pair.quotient_sign, 1);
        assert!(!pair.quotient_negative);
        assert_eq!(pair.rem, big(-1));

        let zero = TruncatedPair::new(&big(0), &big(3)).unwrap();
        assert_eq!(zero.quotient_sign, 0);
        assert!(!zero.is_inexact());
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(big(5), big(0)), Err(DivError::DivisionByZero));
        assert_eq!(modulo(&big(5), &big(0)), Err(DivError::DivisionByZero));
    }

    #[test]
    fn test_div_rem_and_modulo() {
        let r = div_rem(&big(7), &big(2), RoundingMode::Ceil).unwrap();
        assert_eq!(r, DivRem { quotient: big(4), remainder: big(-1) });
        assert_eq!(modulo(&big(-7), &big(3)).unwrap(), big(2));
        assert_eq!(modulo(&big(7), &big(-3)).unwrap(), big(-2));
    }

    #[test]
    fn test_huge_operands() {
        let x: BigInt = "1000000000000000000000000000000000000001".parse().unwrap();
        let y: BigInt = "-1000000000000000000000000000000000000000".parse().unwrap();
        let r = divide(x, y).unwrap();
        assert_eq!(r.trunc, big(-1));
        assert_eq!(r.floor, big(-2));
        assert_eq!(r.ties_mag, big(-1));
        assert!((r.double + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_approximate_overflows_to_nan() {
        let huge = BigInt::from(1) << 2000u32;
        let r = divide(huge.clone(), huge).unwrap();
        assert_eq!(r.trunc, big(1));
        assert!(r.double.is_nan());
    }

    #[test]
    fn test_evaluate() {
        let r = evaluate("7", "2").unwrap();
        assert_eq!(r.ties_even, big(4));
        assert_eq!(evaluate("5", "0").unwrap_err().label(), "DIVISION BY ZERO");
        assert_eq!(evaluate("abc", "2").unwrap_err().label(), "SYNTAX ERROR");
        assert_eq!(evaluate("2", "abc").unwrap_err().label(), "SYNTAX ERROR");
    }

    #[test]
    fn test_zero_divisor_reported_before_bad_dividend() {
        assert_eq!(evaluate("abc", "0"), Err(DivError::DivisionByZero));
        assert_eq!(evaluate("abc", "0x0"), Err(DivError::DivisionByZero));
    }

    #[test]
    fn test_result_serialization() {
        let r = div(7, 2);
        let json = serde_json::to_string_pretty(&r).unwrap();
        assert!(json.contains("\"ties_even\": \"4\""));
        let roundtrip: DivisionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, roundtrip);
    }

    #[test]
    fn test_non_finite_approximate_reads_back() {
        let r = divide(BigInt::from(1) << 2000u32, big(3)).unwrap();
        assert!(r.double.is_infinite());

        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"double\":null"));
        let roundtrip: DivisionResult = serde_json::from_str(&json).unwrap();
        assert!(roundtrip.double.is_nan());
        assert_eq!(roundtrip.trunc, r.trunc);
        assert_eq!(roundtrip.rem_floor, r.rem_floor);
    }
}
