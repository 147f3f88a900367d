// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Layouts shared by the render policies. Each takes digits that are already final
//! (rounded, padded or trimmed as the policy requires) and only decides where the
//! separator and exponent go.

use crate::{DigitResult, ExponentWindow, FloatFormatConfig, FormatOut, write_decimal};

pub(crate) fn to_usize(value: i32) -> usize { usize::try_from(value).unwrap_or(0) }

/// Fixed-point: `0.00ddd`, `ddd000` or `dd.d`. An integer result gets the trailing
/// decimal point and zero only when the config asks for them.
pub(crate) fn write_decimal_representation(
    digits: &[u8],
    decimal_point: i32,
    config: &FloatFormatConfig,
    out: &mut dyn FormatOut,
) {
    let int_len = to_usize(decimal_point);
    if decimal_point <= 0 {
        out.write_text("0.");
        out.write_fill(b'0', to_usize(-decimal_point));
        out.write_span(digits);
    } else if int_len >= digits.len() {
        out.write_span(digits);
        out.write_fill(b'0', int_len - digits.len());
        if config.emit_trailing_decimal_point {
            out.write_byte(b'.');
            if config.emit_trailing_zero_after_point {
                out.write_byte(b'0');
            }
        }
    } else {
        let (int_part, fraction) = digits.split_at(int_len);
        out.write_span(int_part);
        out.write_byte(b'.');
        out.write_span(fraction);
    }
}

/// Scientific with a minimal exponent: `1.25e+3`, `1e-7`, `5e+0`.
pub(crate) fn write_exponential_representation(
    digits: &[u8],
    exponent: i32,
    config: &FloatFormatConfig,
    out: &mut dyn FormatOut,
) {
    write_mantissa(digits, out);
    out.write_byte(config.exponent_char);
    if exponent < 0 {
        out.write_byte(b'-');
    } else if config.emit_positive_exponent_sign {
        out.write_byte(b'+');
    }
    write_decimal(out, u128::from(exponent.unsigned_abs()));
}

/// `printf` style exponent: always signed, at least two digits. `e+06`, `e-10`, `e+100`.
pub(crate) fn write_signed_exponent(
    exponent: i32,
    config: &FloatFormatConfig,
    out: &mut dyn FormatOut,
) {
    out.write_byte(config.exponent_char);
    out.write_byte(if exponent < 0 { b'-' } else { b'+' });
    let magnitude = exponent.unsigned_abs();
    if magnitude < 10 {
        out.write_byte(b'0');
    }
    write_decimal(out, u128::from(magnitude));
}

/// First digit, then `.` and the rest if there is a rest.
fn write_mantissa(digits: &[u8], out: &mut dyn FormatOut) {
    match digits.split_first() {
        Some((first, [])) => out.write_byte(*first),
        Some((first, rest)) => {
            out.write_byte(*first);
            out.write_byte(b'.');
            out.write_span(rest);
        }
        None => out.write_byte(b'0'),
    }
}

/// C `%g`: `result` holds the significant digits with trailing zeros already removed.
pub(crate) fn write_general(
    result: &DigitResult,
    window: ExponentWindow,
    config: &FloatFormatConfig,
    out: &mut dyn FormatOut,
) {
    let exponent = result.exponent();
    if !window.contains(exponent) {
        write_mantissa(&result.digits, out);
        write_signed_exponent(exponent, config, out);
        return;
    }

    let decimal_point = result.decimal_point;
    if decimal_point < 1 {
        out.write_text("0.");
        out.write_fill(b'0', to_usize(-decimal_point));
        out.write_span(&result.digits);
        return;
    }

    let int_len = to_usize(decimal_point);
    for index in 0..int_len {
        out.write_byte(result.digit_at(index));
    }
    if let Some(fraction) = result.digits.get(int_len..).filter(|it| !it.is_empty()) {
        out.write_byte(b'.');
        out.write_span(fraction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn decimal(digits: &str, decimal_point: i32, config: &FloatFormatConfig) -> String {
        let mut out = String::new();
        write_decimal_representation(digits.as_bytes(), decimal_point, config, &mut out);
        out
    }

    #[test]
    fn test_decimal_representation() {
        let config = FloatFormatConfig::new();
        assert_eq2!(decimal("125", 1, &config), "1.25");
        assert_eq2!(decimal("125", -1, &config), "0.0125");
        assert_eq2!(decimal("125", 0, &config), "0.125");
        assert_eq2!(decimal("125", 5, &config), "12500");
        assert_eq2!(decimal("125", 3, &config), "125");

        let trailing = FloatFormatConfig {
            emit_trailing_decimal_point: true,
            ..config
        };
        assert_eq2!(decimal("1", 3, &trailing), "100.");
        let trailing_zero = FloatFormatConfig {
            emit_trailing_zero_after_point: true,
            ..trailing
        };
        assert_eq2!(decimal("1", 3, &trailing_zero), "100.0");
        assert_eq2!(decimal("15", 1, &trailing_zero), "1.5");
    }

    #[test]
    fn test_exponential_representation() {
        let config = FloatFormatConfig::new();
        let mut out = String::new();
        write_exponential_representation(b"125", 3, &config, &mut out);
        assert_eq2!(out, "1.25e+3");

        let config = FloatFormatConfig {
            exponent_char: b'E',
            emit_positive_exponent_sign: false,
            ..config
        };
        let mut out = String::new();
        write_exponential_representation(b"1", 21, &config, &mut out);
        write_exponential_representation(b"5", -7, &config, &mut out);
        write_exponential_representation(b"5", 0, &config, &mut out);
        assert_eq2!(out, "1E215E-75E0");
    }

    #[test]
    fn test_signed_exponent() {
        let config = FloatFormatConfig::new();
        let mut out = String::new();
        write_signed_exponent(6, &config, &mut out);
        write_signed_exponent(-10, &config, &mut out);
        write_signed_exponent(100, &config, &mut out);
        write_signed_exponent(0, &config, &mut out);
        assert_eq2!(out, "e+06e-10e+100e+00");
    }
}
