// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The two kinds of float that never reach a [`crate::DigitSource`] and are rendered as
/// configured symbols instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum SpecialValue {
    Infinity,
    NaN,
}

/// Presentation knobs shared by every [`crate::RenderPolicy`]. The defaults render like
/// C's `printf` family (`inf`, `nan`, `1e+21`), and [`FloatFormatConfig::ecma_script`]
/// renders like JavaScript's `Number.prototype.toString`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormatConfig {
    pub exponent_char: u8,
    /// `1e+21` vs `1e21`. Negative exponents always get their `-`.
    pub emit_positive_exponent_sign: bool,
    /// `100.` vs `100` when free-form output ends on the integer part.
    pub emit_trailing_decimal_point: bool,
    /// `100.0` vs `100.`; only has an effect together with
    /// `emit_trailing_decimal_point`.
    pub emit_trailing_zero_after_point: bool,
    /// Free-form renders fixed-point when `low <= exponent < high`.
    pub decimal_in_shortest_low: i32,
    pub decimal_in_shortest_high: i32,
    /// [None] turns infinities into [`crate::FormatError::UnsupportedSpecialValue`].
    pub infinity_symbol: Option<&'static str>,
    /// [None] turns NaN into [`crate::FormatError::UnsupportedSpecialValue`].
    pub nan_symbol: Option<&'static str>,
    /// Render `-0.0` as `0`.
    pub unique_zero: bool,
}

impl Default for FloatFormatConfig {
    fn default() -> Self { Self::new() }
}

impl FloatFormatConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exponent_char: b'e',
            emit_positive_exponent_sign: true,
            emit_trailing_decimal_point: false,
            emit_trailing_zero_after_point: false,
            decimal_in_shortest_low: -6,
            decimal_in_shortest_high: 21,
            infinity_symbol: Some("inf"),
            nan_symbol: Some("nan"),
            unique_zero: false,
        }
    }

    #[must_use]
    pub const fn ecma_script() -> Self {
        Self {
            infinity_symbol: Some("Infinity"),
            nan_symbol: Some("NaN"),
            unique_zero: true,
            ..Self::new()
        }
    }

    /// The symbol for `special_value`, if one is configured.
    #[must_use]
    pub fn symbol_for(&self, special_value: SpecialValue) -> Option<&'static str> {
        match special_value {
            SpecialValue::Infinity => self.infinity_symbol,
            SpecialValue::NaN => self.nan_symbol,
        }
    }

    /// Whether a zero with its sign bit set gets a `-`.
    #[must_use]
    pub fn signs_zero(&self, negative: bool) -> bool { negative && !self.unique_zero }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_every_special_value_has_a_default_symbol() {
        for config in [FloatFormatConfig::new(), FloatFormatConfig::ecma_script()] {
            for special_value in SpecialValue::iter() {
                assert!(config.symbol_for(special_value).is_some(), "{special_value}");
            }
        }
    }

    #[test]
    fn test_special_value_display() {
        assert_eq2!(SpecialValue::Infinity.to_string(), "Infinity");
        assert_eq2!(SpecialValue::NaN.to_string(), "NaN");
    }

    #[test]
    fn test_signs_zero() {
        assert!(FloatFormatConfig::new().signs_zero(true));
        assert!(!FloatFormatConfig::new().signs_zero(false));
        assert!(!FloatFormatConfig::ecma_script().signs_zero(true));
    }
}
