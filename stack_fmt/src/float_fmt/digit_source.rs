// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decimal digit generation. A [`DigitSource`] turns a positive, finite, non-zero
//! [f64] into ASCII digits plus the position of the decimal point. Everything about
//! presentation (signs, separators, exponents, padding) happens later in
//! [`crate::FloatRenderer`].

use std::fmt::Write as _;

use smallstr::SmallString;

use crate::{DIGIT_BUFFER_SIZE, DigitBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtoaMode {
    /// Fewest digits that parse back to the same [f64].
    Shortest,
    /// Fewest digits that parse back to the same [f32].
    ShortestSingle,
    /// Exactly `requested_digits` correctly rounded significant digits. Trailing zeros
    /// may be omitted, so callers pad if they need the full count.
    FixedPrecision,
}

/// `digits` hold ASCII `'0'..='9'`. `decimal_point` is where the separator goes,
/// counted from the first digit: `"125"` with `decimal_point == 1` is `1.25`,
/// with `decimal_point == -1` it is `0.0125`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitResult {
    pub sign: bool,
    pub digits: DigitBuffer,
    pub decimal_point: i32,
}

impl DigitResult {
    #[must_use]
    pub fn len(&self) -> usize { self.digits.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.digits.is_empty() }

    /// The digit at `index`, or `'0'` past the end. Layouts that need more digits than
    /// were generated read the implicit trailing zeros through this.
    #[must_use]
    pub fn digit_at(&self, index: usize) -> u8 {
        self.digits.get(index).copied().unwrap_or(b'0')
    }

    /// Right pad with `'0'` to at least `count` digits.
    pub fn pad_to(&mut self, count: usize) {
        if self.digits.len() < count {
            self.digits.resize(count, b'0');
        }
    }

    /// Drop trailing `'0'` digits, keeping at least one digit.
    pub fn trim_trailing_zeros(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&b'0') {
            self.digits.pop();
        }
    }

    /// Base 10 exponent of the first digit in scientific notation.
    #[must_use]
    pub fn exponent(&self) -> i32 { self.decimal_point - 1 }
}

/// Produces digits for the renderer. Callers strip the sign and handle zero, NaN and
/// the infinities before calling [`DigitSource::generate`], so implementations only
/// ever see positive finite non-zero magnitudes.
///
/// `FixedPrecision` with `requested_digits == 0` returns no digits. Its
/// `decimal_point` is still meaningful: the rounded order of magnitude plus one.
pub trait DigitSource {
    fn generate(&self, magnitude: f64, mode: DtoaMode, requested_digits: usize)
    -> DigitResult;
}

/// Digit source backed by the standard library's float formatting, which is correctly
/// rounded in both shortest and exact mode. The formatted text goes into a stack
/// [`SmallString`] and is parsed back into mantissa digits and exponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdDigitSource;

type ScratchString = SmallString<[u8; DIGIT_BUFFER_SIZE]>;

impl DigitSource for StdDigitSource {
    fn generate(
        &self,
        magnitude: f64,
        mode: DtoaMode,
        requested_digits: usize,
    ) -> DigitResult {
        let mut scratch = ScratchString::new();
        // Writing into a SmallString can't fail, it spills instead.
        let _unused = match mode {
            DtoaMode::Shortest => write!(scratch, "{magnitude:e}"),
            #[allow(clippy::cast_possible_truncation)]
            DtoaMode::ShortestSingle => write!(scratch, "{:e}", magnitude as f32),
            DtoaMode::FixedPrecision => write!(
                scratch,
                "{magnitude:.precision$e}",
                precision = requested_digits.saturating_sub(1)
            ),
        };

        let mut result = parse_lower_exp(scratch.as_str());
        result.sign = magnitude.is_sign_negative();

        if mode == DtoaMode::FixedPrecision {
            if requested_digits == 0 {
                result.digits.clear();
            } else {
                result.trim_trailing_zeros();
            }
        }

        result
    }
}

/// Parse the output of `{:e}` / `{:.Ne}`: `d[.ddd]e[-]x`.
fn parse_lower_exp(text: &str) -> DigitResult {
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));

    let digits: DigitBuffer = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let (negative, exponent_digits) = match exponent.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, exponent),
    };
    let magnitude = exponent_digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0_i32, |acc, digit| acc * 10 + i32::from(digit - b'0'));
    let exponent = if negative { -magnitude } else { magnitude };

    DigitResult {
        sign: false,
        digits,
        decimal_point: exponent + 1,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn digits_of(result: &DigitResult) -> &str {
        std::str::from_utf8(&result.digits).unwrap()
    }

    #[test_case(1.0, "1", 1)]
    #[test_case(1234.5, "12345", 4)]
    #[test_case(0.0001, "1", -3)]
    #[test_case(0.1, "1", 0)]
    #[test_case(5e-324, "5", -323)]
    #[test_case(1.7976931348623157e308, "17976931348623157", 309)]
    #[test_case(9.9999963865116115e10, "9999996386511612", 11)]
    fn test_shortest(value: f64, digits: &str, decimal_point: i32) {
        let result = StdDigitSource.generate(value, DtoaMode::Shortest, 0);
        assert_eq2!(digits_of(&result), digits);
        assert_eq2!(result.decimal_point, decimal_point);
        assert!(!result.sign);
    }

    #[test]
    fn test_shortest_single() {
        let value = f64::from(1.000_000_3e-5_f32);
        let result = StdDigitSource.generate(value, DtoaMode::ShortestSingle, 0);
        assert_eq2!(digits_of(&result), "10000003");
        assert_eq2!(result.decimal_point, -4);

        // The same bits as a double need many more digits.
        let result = StdDigitSource.generate(value, DtoaMode::Shortest, 0);
        assert!(result.len() > 8);
    }

    #[test_case(0.0047237873077392578, 10, "4723787308", -2)]
    #[test_case(9.9999999996e9, 10, "1", 11 ; "rounds up into next decade")]
    #[test_case(1000.0, 5, "1", 4 ; "trailing zeros trimmed")]
    #[test_case(0.005859375, 10, "5859375", -2)]
    fn test_fixed_precision(value: f64, count: usize, digits: &str, decimal_point: i32) {
        let result = StdDigitSource.generate(value, DtoaMode::FixedPrecision, count);
        assert_eq2!(digits_of(&result), digits);
        assert_eq2!(result.decimal_point, decimal_point);
    }

    #[test]
    fn test_fixed_precision_zero_digits() {
        let result = StdDigitSource.generate(970.0, DtoaMode::FixedPrecision, 0);
        assert!(result.is_empty());
        assert_eq2!(result.decimal_point, 4);
    }

    #[test]
    fn test_digit_helpers() {
        let mut result = StdDigitSource.generate(1.25, DtoaMode::Shortest, 0);
        assert_eq2!(result.exponent(), 0);
        assert_eq2!(result.digit_at(2), b'5');
        assert_eq2!(result.digit_at(7), b'0');
        result.pad_to(5);
        assert_eq2!(digits_of(&result), "12500");
        result.trim_trailing_zeros();
        assert_eq2!(digits_of(&result), "125");
    }
}
