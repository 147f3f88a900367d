// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed-width float layout. The renderer requests `width` significant digits and
//! then picks one of four layouts, dropping digits to make the value fit:
//!
//! | exponent / decimal point         | layout            | digits kept            |
//! | :------------------------------- | :---------------- | :--------------------- |
//! | exponent outside the window      | `d.ddde+XX`       | `width - exp_len - 3`  |
//! | `decimal_point < 1`              | `0.000ddd`        | `width - 2 + dp`       |
//! | `1 <= decimal_point < width`     | `ddd.ddd`         | `width - 1`            |
//! | `decimal_point == width`         | `dddddd`          | `width`                |
//!
//! Dropping digits re-rounds half to even. A carry out of the first digit moves the
//! decimal point (or exponent) one place right and the layout is picked again, so
//! `0.999999996` in 10 columns becomes `1.00000000` rather than `0.100000000`.

use crate::{Carry, DigitResult, ExponentWindow, FloatFormatConfig, FormatOut,
            float_fmt::{float_layout::{to_usize, write_signed_exponent},
                        render_policy::to_i32},
            round_digits_at};

/// Lay out `result` in exactly `width` columns. `width` excludes the sign column,
/// which the caller has already written.
pub(crate) fn write_fixed_width(
    mut result: DigitResult,
    width: usize,
    config: &FloatFormatConfig,
    out: &mut dyn FormatOut,
) {
    if !ExponentWindow::for_fixed_width(width).contains(result.exponent()) {
        write_fixed_width_scientific(result, width, config, out);
        return;
    }

    let decimal_point = result.decimal_point;
    let width_i32 = to_i32(width);

    if decimal_point < 1 {
        // The window guarantees at least one significant digit fits here.
        let keep = to_usize(width_i32 - 2 + decimal_point).max(1);
        if round_digits_at(&mut result.digits, keep) == Carry::ShiftRight {
            result.decimal_point += 1;
            write_fixed_width(result, width, config, out);
            return;
        }
        out.write_text("0.");
        out.write_fill(b'0', to_usize(-decimal_point));
        for index in 0..keep {
            out.write_byte(result.digit_at(index));
        }
    } else if decimal_point < width_i32 {
        let keep = width - 1;
        if round_digits_at(&mut result.digits, keep) == Carry::ShiftRight {
            result.decimal_point += 1;
            write_fixed_width(result, width, config, out);
            return;
        }
        let int_len = to_usize(decimal_point);
        for index in 0..int_len {
            out.write_byte(result.digit_at(index));
        }
        out.write_byte(b'.');
        for index in int_len..keep {
            out.write_byte(result.digit_at(index));
        }
    } else {
        for index in 0..width {
            out.write_byte(result.digit_at(index));
        }
    }
}

/// `d.ddde+XX` with as many mantissa digits as fit. One mantissa digit renders `d.`
/// (keeping the width exact), zero or fewer renders a bare `d`.
fn write_fixed_width_scientific(
    mut result: DigitResult,
    width: usize,
    config: &FloatFormatConfig,
    out: &mut dyn FormatOut,
) {
    let mut exponent = result.exponent();
    let mantissa_len = loop {
        let mantissa_len = scientific_mantissa_len(width, exponent);
        let keep = to_usize(mantissa_len).max(1);
        match round_digits_at(&mut result.digits, keep) {
            Carry::None => break mantissa_len,
            // The exponent may have grown a digit, recompute the mantissa room.
            Carry::ShiftRight => exponent += 1,
        }
    };

    out.write_byte(result.digit_at(0));
    if mantissa_len >= 1 {
        out.write_byte(b'.');
        for index in 1..to_usize(mantissa_len) {
            out.write_byte(result.digit_at(index));
        }
    }
    write_signed_exponent(exponent, config, out);
}

/// Columns left for mantissa digits: `width` minus the `.`, the exponent char, the
/// exponent sign and two or three exponent digits.
fn scientific_mantissa_len(width: usize, exponent: i32) -> i32 {
    let exponent_len = if exponent.unsigned_abs() < 100 { 2 } else { 3 };
    to_i32(width) - exponent_len - 3
}
