// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FloatFormatConfig, FormatError, FormatResult, MAX_PRECISION_DIGITS};

/// How a finite float is laid out. NaN and the infinities ignore the policy except for
/// [`RenderPolicy::FixedWidth`] padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Shortest digits that round-trip, fixed-point inside the configured exponent
    /// window and scientific outside it.
    FreeForm,
    /// Exactly this many significant digits, always scientific: `1.2340e+3`.
    FixedPrecision(usize),
    /// Exactly this many characters (sign included). Digits are dropped and re-rounded
    /// until the value fits.
    ///
    /// The value is first rounded to `width` significant digits, and that result is
    /// rounded again to the digits the layout has room for. This can differ from
    /// rounding the exact value once: `1.00014999999999999e-20` in 10 columns renders
    /// `1.0002e-20`, not `1.0001e-20`.
    FixedWidth(usize),
    /// Shortest digits, never scientific. `1e300` is 301 characters long.
    AlwaysFixedPoint,
    /// C `printf("%.*g")`: this many significant digits, trailing zeros stripped.
    General(usize),
}

/// Half-open range of base 10 exponents that render fixed-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentWindow {
    pub low: i32,
    pub high: i32,
}

impl ExponentWindow {
    pub const EMPTY: Self = Self { low: 0, high: 0 };
    pub const UNBOUNDED: Self = Self {
        low: i32::MIN,
        high: i32::MAX,
    };

    #[must_use]
    pub fn contains(self, exponent: i32) -> bool {
        self.low <= exponent && exponent < self.high
    }

    /// Window for a fixed-width field with `width` columns available for digits and
    /// separator (the sign column already removed).
    #[must_use]
    pub fn for_fixed_width(width: usize) -> Self {
        let width = to_i32(width);
        Self {
            low: (-4).max(2 - width),
            high: width,
        }
    }
}

impl RenderPolicy {
    /// # Errors
    ///
    /// [`FormatError::InvalidArgument`] if a digit count or width is out of range.
    pub fn validate(self) -> FormatResult {
        let (what, value, min) = match self {
            RenderPolicy::FreeForm | RenderPolicy::AlwaysFixedPoint => return Ok(()),
            RenderPolicy::FixedPrecision(digits) => ("fixed precision digits", digits, 1),
            RenderPolicy::FixedWidth(width) => ("fixed width", width, 1),
            RenderPolicy::General(digits) => ("general precision digits", digits, 0),
        };
        if (min..=MAX_PRECISION_DIGITS).contains(&value) {
            Ok(())
        } else {
            Err(FormatError::InvalidArgument {
                what,
                value,
                min,
                max: MAX_PRECISION_DIGITS,
            })
        }
    }

    /// Which exponents render fixed-point under this policy. `negative` matters only to
    /// [`RenderPolicy::FixedWidth`], where the `-` takes a column.
    #[must_use]
    pub fn exponent_window(self, config: &FloatFormatConfig, negative: bool) -> ExponentWindow {
        match self {
            RenderPolicy::FreeForm => ExponentWindow {
                low: config.decimal_in_shortest_low,
                high: config.decimal_in_shortest_high,
            },
            RenderPolicy::FixedPrecision(_) => ExponentWindow::EMPTY,
            RenderPolicy::FixedWidth(width) => {
                ExponentWindow::for_fixed_width(width.saturating_sub(usize::from(negative)))
            }
            RenderPolicy::AlwaysFixedPoint => ExponentWindow::UNBOUNDED,
            RenderPolicy::General(digits) => ExponentWindow {
                low: -4,
                high: to_i32(digits.max(1)),
            },
        }
    }
}

/// Widths and digit counts are validated against [`MAX_PRECISION_DIGITS`] long before
/// they get here.
pub(crate) fn to_i32(value: usize) -> i32 { i32::try_from(value).unwrap_or(i32::MAX) }
