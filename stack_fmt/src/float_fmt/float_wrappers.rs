// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Wrappers that pick a [`RenderPolicy`] for a single float argument, eg:
//! `stack_format!(64, "%0|%1", pad_float(x, 8), scientific_float(y, 3))`.
//!
//! A bare [f64] or [f32] argument renders like `printf("%g")`.

use std::fmt::Debug;

use crate::{FloatFormatConfig, FloatRenderer, FormatOut, FormatResult, Render,
            RenderPolicy};

/// [f32] or [f64].
pub trait FloatValue: Copy + Debug {
    /// # Errors
    ///
    /// See [`FloatRenderer::render_f64`].
    fn render_with(
        self,
        renderer: &FloatRenderer,
        policy: RenderPolicy,
        out: &mut dyn FormatOut,
    ) -> FormatResult;
}

impl FloatValue for f64 {
    fn render_with(
        self,
        renderer: &FloatRenderer,
        policy: RenderPolicy,
        out: &mut dyn FormatOut,
    ) -> FormatResult {
        renderer.render_f64(self, policy, out)
    }
}

impl FloatValue for f32 {
    fn render_with(
        self,
        renderer: &FloatRenderer,
        policy: RenderPolicy,
        out: &mut dyn FormatOut,
    ) -> FormatResult {
        renderer.render_f32(self, policy, out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedFloat<T> {
    pub value: T,
    pub policy: RenderPolicy,
    pub config: FloatFormatConfig,
}

impl<T: FloatValue> FormattedFloat<T> {
    #[must_use]
    pub fn new(value: T, policy: RenderPolicy) -> Self {
        Self {
            value,
            policy,
            config: FloatFormatConfig::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FloatFormatConfig) -> Self {
        self.config = config;
        self
    }
}

impl<T: FloatValue> Render for FormattedFloat<T> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        self.value
            .render_with(&FloatRenderer::with_config(self.config), self.policy, out)
    }
}

/// Shortest digits that parse back to the same value, JavaScript style: `0.1`,
/// `1e+21`, `Infinity`. Nothing drifts when the text is parsed and printed again.
#[must_use]
pub fn shortest_float<T: FloatValue>(value: T) -> FormattedFloat<T> {
    FormattedFloat::new(value, RenderPolicy::FreeForm)
        .with_config(FloatFormatConfig::ecma_script())
}

/// `printf("%.*g", digits, value)`.
#[must_use]
pub fn precise_float<T: FloatValue>(value: T, digits: usize) -> FormattedFloat<T> {
    FormattedFloat::new(value, RenderPolicy::General(digits))
}

/// Always scientific with exactly `digits` significant digits: `1.230e+4`.
#[must_use]
pub fn scientific_float<T: FloatValue>(value: T, digits: usize) -> FormattedFloat<T> {
    FormattedFloat::new(value, RenderPolicy::FixedPrecision(digits))
}

/// Exactly `width` characters, for columns of numbers.
#[must_use]
pub fn pad_float<T: FloatValue>(value: T, width: usize) -> FormattedFloat<T> {
    FormattedFloat::new(value, RenderPolicy::FixedWidth(width))
}

/// Never scientific: `1e-7` renders as `0.0000001`.
#[must_use]
pub fn float_as_fixed<T: FloatValue>(value: T) -> FormattedFloat<T> {
    FormattedFloat::new(value, RenderPolicy::AlwaysFixedPoint)
}
