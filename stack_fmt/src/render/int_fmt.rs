// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack-allocated integer formatting without heap allocation or [`std::fmt`]
//! machinery.
//!
//! Digits are produced right to left into a fixed-size [u8] array that is wide enough
//! for [`u128::MAX`] in the given radix. Unused leading slots stay `0` (NUL) and are
//! trimmed by [`trim_digit_array`]. Decimal conversion emits two digits per division
//! using a lookup table.
//!
//! # Examples
//!
//! ```
//! use r3bl_stack_fmt::{decimal_to_u8_array, trim_digit_array};
//!
//! let array = decimal_to_u8_array(1_234_567_890);
//! assert_eq!(trim_digit_array(&array), b"1234567890");
//!
//! let array = decimal_to_u8_array(0);
//! assert_eq!(trim_digit_array(&array), b"0");
//! ```

use std::fmt::Debug;

use crate::{FormatOut, FormatResult, Render};

/// Maximum number of decimal digits needed to represent a [u128].
/// - <https://doc.rust-lang.org/std/primitive.u128.html>
pub const U128_FMT_MAX_DIGITS: usize = 39;

/// Maximum number of octal digits needed to represent a [u128]. Hex needs fewer (32),
/// so this also sizes the hex array.
pub const U128_RADIX_MAX_DIGITS: usize = 43;

const DIGIT_PAIRS: &[u8; 200] = b"\
0001020304050607080910111213141516171819\
2021222324252627282930313233343536373839\
4041424344454647484950515253545556575859\
6061626364656667686970717273747576777879\
8081828384858687888990919293949596979899";

const LOWER_HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[must_use]
pub fn decimal_to_u8_array(num: u128) -> [u8; U128_FMT_MAX_DIGITS] {
    let mut num_copy = num;
    let mut result = [0; U128_FMT_MAX_DIGITS];
    let mut index = U128_FMT_MAX_DIGITS;

    while num_copy >= 100 {
        let pair = usize::try_from(num_copy % 100).unwrap_or(0) * 2;
        num_copy /= 100;
        index -= 2;
        result[index..index + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    }

    if num_copy >= 10 {
        let pair = usize::try_from(num_copy).unwrap_or(0) * 2;
        index -= 2;
        result[index..index + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    } else {
        index -= 1;
        result[index] = b'0' + u8::try_from(num_copy).unwrap_or(0);
    }

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixStyle {
    LowerHex,
    UpperHex,
    Octal,
}

impl RadixStyle {
    fn bits_and_table(self) -> (u32, &'static [u8; 16]) {
        match self {
            RadixStyle::LowerHex => (4, LOWER_HEX_DIGITS),
            RadixStyle::UpperHex => (4, UPPER_HEX_DIGITS),
            RadixStyle::Octal => (3, LOWER_HEX_DIGITS),
        }
    }
}

#[must_use]
pub fn radix_to_u8_array(num: u128, style: RadixStyle) -> [u8; U128_RADIX_MAX_DIGITS] {
    let (bits, table) = style.bits_and_table();
    let mask = (1_u128 << bits) - 1;

    let mut num_copy = num;
    let mut result = [0; U128_RADIX_MAX_DIGITS];
    let mut index = U128_RADIX_MAX_DIGITS;

    loop {
        let digit = usize::try_from(num_copy & mask).unwrap_or(0);
        index -= 1;
        result[index] = table[digit];
        num_copy >>= bits;
        if num_copy == 0 {
            break;
        }
    }

    result
}

/// Drop the unused leading NUL slots of a digit array.
#[must_use]
pub fn trim_digit_array(arg: &[u8]) -> &[u8] {
    let start = arg.iter().position(|&it| it != 0).unwrap_or(arg.len());
    &arg[start..]
}

/// Write `num` in decimal.
pub fn write_decimal(out: &mut dyn FormatOut, num: u128) {
    out.write_span(trim_digit_array(&decimal_to_u8_array(num)));
}

/// Primitive integers, widened to [u128] for digit generation.
pub trait Integer: Copy + Debug {
    fn is_negative(self) -> bool;
    /// Magnitude, so that `i128::MIN` doesn't overflow.
    fn unsigned_magnitude(self) -> u128;
    /// Two's complement bits at the type's own width: `-1_i8` is `0xff`.
    fn twos_complement_bits(self) -> u128;
}

macro_rules! impl_integer_unsigned {
    ($($t:ty),*) => {$(
        #[allow(clippy::cast_lossless, trivial_numeric_casts)]
        impl Integer for $t {
            fn is_negative(self) -> bool { false }
            fn unsigned_magnitude(self) -> u128 { self as u128 }
            fn twos_complement_bits(self) -> u128 { self as u128 }
        }

        impl Render for $t {
            fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
                write_decimal(out, self.unsigned_magnitude());
                Ok(())
            }
        }
    )*};
}

macro_rules! impl_integer_signed {
    ($($t:ty => $unsigned:ty),*) => {$(
        #[allow(clippy::cast_lossless, clippy::cast_sign_loss, trivial_numeric_casts)]
        impl Integer for $t {
            fn is_negative(self) -> bool { self < 0 }
            fn unsigned_magnitude(self) -> u128 { self.unsigned_abs() as u128 }
            fn twos_complement_bits(self) -> u128 { (self as $unsigned) as u128 }
        }

        impl Render for $t {
            fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
                if self.is_negative() {
                    out.write_byte(b'-');
                }
                write_decimal(out, self.unsigned_magnitude());
                Ok(())
            }
        }
    )*};
}

impl_integer_unsigned!(u8, u16, u32, u64, u128, usize);
impl_integer_signed!(
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize
);

/// An integer rendered in hex or octal, without a `0x` / `0o` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix<T> {
    pub value: T,
    pub style: RadixStyle,
}

impl<T: Integer> Render for Radix<T> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        let array = radix_to_u8_array(self.value.twos_complement_bits(), self.style);
        out.write_span(trim_digit_array(&array));
        Ok(())
    }
}

#[must_use]
pub fn hex<T: Integer>(value: T) -> Radix<T> {
    Radix {
        value,
        style: RadixStyle::LowerHex,
    }
}

#[must_use]
pub fn upper_hex<T: Integer>(value: T) -> Radix<T> {
    Radix {
        value,
        style: RadixStyle::UpperHex,
    }
}

#[must_use]
pub fn oct<T: Integer>(value: T) -> Radix<T> {
    Radix {
        value,
        style: RadixStyle::Octal,
    }
}
