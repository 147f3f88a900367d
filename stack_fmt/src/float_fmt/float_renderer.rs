// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::smallvec;

use crate::{DigitBuffer, DigitResult, DigitSource, DtoaMode, FloatFormatConfig, FormatError,
            FormatOut, FormatResult, RenderPolicy, SpecialValue, StdDigitSource,
            float_fmt::{fixed_width::write_fixed_width,
                        float_layout::{write_decimal_representation,
                                       write_exponential_representation, write_general}}};

/// Whether a value started life as an [f32] or an [f64]. Shortest digits differ: the
/// [f32] `0.1` widened to [f64] is `0.10000000149011612`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceWidth {
    Single,
    Double,
}

/// Renders floats under a [`RenderPolicy`] with the presentation rules of a
/// [`FloatFormatConfig`]. Digits come from `D`.
///
/// Every call validates the policy first and returns
/// [`FormatError::InvalidArgument`] without writing anything if it is out of range.
///
/// ```
/// use r3bl_stack_fmt::{FloatRenderer, RenderPolicy};
///
/// let renderer = FloatRenderer::new();
/// let mut out = String::new();
/// renderer.render_f64(0.999_999_996, RenderPolicy::FixedWidth(10), &mut out).unwrap();
/// assert_eq!(out, "1.00000000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloatRenderer<D = StdDigitSource> {
    pub config: FloatFormatConfig,
    pub digit_source: D,
}

impl FloatRenderer {
    #[must_use]
    pub const fn new() -> Self { Self::with_config(FloatFormatConfig::new()) }

    #[must_use]
    pub const fn with_config(config: FloatFormatConfig) -> Self {
        Self {
            config,
            digit_source: StdDigitSource,
        }
    }
}

impl<D: DigitSource> FloatRenderer<D> {
    #[must_use]
    pub fn with_digit_source(config: FloatFormatConfig, digit_source: D) -> Self {
        Self {
            config,
            digit_source,
        }
    }

    /// # Errors
    ///
    /// - [`FormatError::InvalidArgument`] for an out of range policy.
    /// - [`FormatError::UnsupportedSpecialValue`] for NaN or an infinity when the config
    ///   has no symbol for it.
    pub fn render_f64(
        &self,
        value: f64,
        policy: RenderPolicy,
        out: &mut dyn FormatOut,
    ) -> FormatResult {
        self.render(value, SourceWidth::Double, policy, out)
    }

    /// Same as [`FloatRenderer::render_f64`], except that free-form and fixed-point
    /// policies use the shortest digits that round-trip as an [f32].
    ///
    /// # Errors
    ///
    /// See [`FloatRenderer::render_f64`].
    pub fn render_f32(
        &self,
        value: f32,
        policy: RenderPolicy,
        out: &mut dyn FormatOut,
    ) -> FormatResult {
        self.render(f64::from(value), SourceWidth::Single, policy, out)
    }

    fn render(
        &self,
        value: f64,
        source_width: SourceWidth,
        policy: RenderPolicy,
        out: &mut dyn FormatOut,
    ) -> FormatResult {
        if let Err(error) = policy.validate() {
            tracing::warn!(?policy, %error, "Rejected float render policy");
            return Err(error);
        }

        if value.is_nan() {
            return self.render_special(SpecialValue::NaN, false, policy, out);
        }
        if value.is_infinite() {
            return self.render_special(SpecialValue::Infinity, value < 0.0, policy, out);
        }

        let negative = value.is_sign_negative();
        if value == 0.0 {
            self.render_zero(negative, policy, out);
            return Ok(());
        }

        if negative {
            out.write_byte(b'-');
        }
        let magnitude = value.abs();
        let config = &self.config;

        match policy {
            RenderPolicy::FreeForm => {
                let result = self.shortest(magnitude, source_width);
                if policy
                    .exponent_window(config, negative)
                    .contains(result.exponent())
                {
                    write_decimal_representation(
                        &result.digits,
                        result.decimal_point,
                        config,
                        out,
                    );
                } else {
                    write_exponential_representation(
                        &result.digits,
                        result.exponent(),
                        config,
                        out,
                    );
                }
            }
            RenderPolicy::AlwaysFixedPoint => {
                let result = self.shortest(magnitude, source_width);
                write_decimal_representation(
                    &result.digits,
                    result.decimal_point,
                    config,
                    out,
                );
            }
            RenderPolicy::FixedPrecision(digit_count) => {
                let mut result = self.digit_source.generate(
                    magnitude,
                    DtoaMode::FixedPrecision,
                    digit_count,
                );
                result.pad_to(digit_count);
                write_exponential_representation(
                    &result.digits,
                    result.exponent(),
                    config,
                    out,
                );
            }
            RenderPolicy::FixedWidth(total_width) => {
                let width = total_width - usize::from(negative);
                let result = self.digit_source.generate(
                    magnitude,
                    DtoaMode::FixedPrecision,
                    width.max(1),
                );
                write_fixed_width(result, width, config, out);
            }
            RenderPolicy::General(digit_count) => {
                let mut result = self.digit_source.generate(
                    magnitude,
                    DtoaMode::FixedPrecision,
                    digit_count.max(1),
                );
                result.trim_trailing_zeros();
                write_general(
                    &result,
                    policy.exponent_window(config, negative),
                    config,
                    out,
                );
            }
        }

        Ok(())
    }

    fn shortest(&self, magnitude: f64, source_width: SourceWidth) -> DigitResult {
        let mode = match source_width {
            SourceWidth::Single => DtoaMode::ShortestSingle,
            SourceWidth::Double => DtoaMode::Shortest,
        };
        self.digit_source.generate(magnitude, mode, 0)
    }

    /// NaN never gets a sign. Under [`RenderPolicy::FixedWidth`] the symbol is padded
    /// with spaces on the right, the `-` of `-inf` counting toward the width.
    fn render_special(
        &self,
        special_value: SpecialValue,
        negative: bool,
        policy: RenderPolicy,
        out: &mut dyn FormatOut,
    ) -> FormatResult {
        let Some(symbol) = self.config.symbol_for(special_value) else {
            tracing::warn!(%special_value, "No symbol configured");
            return Err(FormatError::UnsupportedSpecialValue { special_value });
        };

        if negative {
            out.write_byte(b'-');
        }
        out.write_text(symbol);

        if let RenderPolicy::FixedWidth(width) = policy {
            let written = usize::from(negative) + symbol.chars().count();
            out.write_fill(b' ', width.saturating_sub(written));
        }

        Ok(())
    }

    fn render_zero(&self, negative: bool, policy: RenderPolicy, out: &mut dyn FormatOut) {
        let config = &self.config;
        let signed = config.signs_zero(negative);
        if signed {
            out.write_byte(b'-');
        }

        match policy {
            RenderPolicy::FreeForm | RenderPolicy::AlwaysFixedPoint => {
                write_decimal_representation(b"0", 1, config, out);
            }
            RenderPolicy::FixedPrecision(digit_count) => {
                let digits: DigitBuffer = smallvec![b'0'; digit_count];
                write_exponential_representation(&digits, 0, config, out);
            }
            RenderPolicy::FixedWidth(total_width) => {
                let width = total_width.saturating_sub(usize::from(signed));
                if width >= 2 {
                    out.write_text("0.");
                    out.write_fill(b'0', width - 2);
                } else {
                    out.write_byte(b'0');
                }
            }
            RenderPolicy::General(_) => out.write_byte(b'0'),
        }
    }
}
