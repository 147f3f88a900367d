// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties that must hold for every finite value, not just the hand picked vectors in
//! the unit tests:
//! - free-form output parses back to the identical bit pattern,
//! - fixed-width output is exactly as wide as requested.

use r3bl_stack_fmt::{FloatFormatConfig, FloatRenderer, RenderPolicy, assert_eq2};
use test_case::test_case;

/// Deterministic bit patterns spread over the whole [f64] range (xorshift64).
fn sample_bits(count: usize, mut seed: u64) -> Vec<u64> {
    (0..count)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        })
        .collect()
}

fn interesting_values() -> Vec<f64> {
    let mut values = vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.1,
        0.2 + 0.1,
        1.0 / 3.0,
        2.0 / 3.0,
        123_456.789,
        9.999_999_999_6e9,
        0.999_999_996,
        5e-324,
        -5e-324,
        2.225_073_858_507_201e-308,
        f64::MIN_POSITIVE,
        f64::MAX,
        f64::MIN,
        f64::EPSILON,
        1e21,
        1e-7,
        1.5e300,
        9.995_000_436_902_046_2e-5,
    ];
    values.extend(
        sample_bits(2_000, 0x9E37_79B9_7F4A_7C15)
            .into_iter()
            .map(f64::from_bits)
            .filter(|it| it.is_finite()),
    );
    values
}

fn render(renderer: &FloatRenderer, value: f64, policy: RenderPolicy) -> String {
    let mut out = String::new();
    renderer.render_f64(value, policy, &mut out).unwrap();
    out
}

#[test_case(FloatFormatConfig::new() ; "printf symbols")]
#[test_case(FloatFormatConfig { unique_zero: false, ..FloatFormatConfig::ecma_script() } ; "ecma symbols")]
fn test_free_form_round_trips_bit_exact(config: FloatFormatConfig) {
    let renderer = FloatRenderer::with_config(config);
    for value in interesting_values() {
        let text = render(&renderer, value, RenderPolicy::FreeForm);
        let parsed: f64 = text.parse().unwrap();
        assert_eq2!(parsed.to_bits(), value.to_bits(), "{value:e} rendered as {text}");
    }
}

#[test]
fn test_always_fixed_point_round_trips() {
    let renderer = FloatRenderer::new();
    for value in interesting_values() {
        let text = render(&renderer, value, RenderPolicy::AlwaysFixedPoint);
        assert!(!text.contains('e'), "{text}");
        let parsed: f64 = text.parse().unwrap();
        assert_eq2!(parsed.to_bits(), value.to_bits(), "{value:e} rendered as {text}");
    }
}

#[test]
fn test_free_form_single_round_trips() {
    let renderer = FloatRenderer::new();
    let values = sample_bits(2_000, 0xD1B5_4A32_D192_ED03)
        .into_iter()
        .map(|it| f32::from_bits((it >> 32) as u32))
        .filter(|it| it.is_finite())
        .chain([0.1_f32, -0.0, f32::MAX, f32::MIN_POSITIVE, 1e-45]);

    for value in values {
        let mut text = String::new();
        renderer
            .render_f32(value, RenderPolicy::FreeForm, &mut text)
            .unwrap();
        let parsed: f32 = text.parse().unwrap();
        assert_eq2!(parsed.to_bits(), value.to_bits(), "{value:e} rendered as {text}");
    }
}

fn decimal_exponent(value: f64) -> i32 {
    let text = format!("{value:e}");
    text.split('e').nth(1).unwrap().parse().unwrap()
}

#[test]
fn test_fixed_width_is_exact() {
    let renderer = FloatRenderer::new();
    let values = interesting_values();
    for width in 7..=30 {
        for &value in &values {
            let text = render(&renderer, value, RenderPolicy::FixedWidth(width));
            assert_eq2!(text.len(), width, "{value:e} in {width} columns: {text}");
        }
    }
}

#[test]
fn test_fixed_width_six_is_exact_below_three_digit_exponents() {
    let renderer = FloatRenderer::new();
    let values = interesting_values()
        .into_iter()
        .filter(|&it| it >= 0.0 || decimal_exponent(it).abs() < 100);
    for value in values {
        let text = render(&renderer, value, RenderPolicy::FixedWidth(6));
        assert_eq2!(text.len(), 6, "{value:e} in 6 columns: {text}");
    }
}

#[test_case(-1e-100, "-1e-100")]
#[test_case(-5e-324, "-5e-324")]
#[test_case(f64::MIN, "-2e+308")]
fn test_fixed_width_six_negative_three_digit_exponent(value: f64, expected: &str) {
    let text = render(&FloatRenderer::new(), value, RenderPolicy::FixedWidth(6));
    assert_eq2!(text, expected);
}

#[test]
fn test_fixed_width_close_to_value() {
    let renderer = FloatRenderer::new();
    for value in [1.0 / 3.0, 123_456.789, -2.5e-3, 6.022e23, -1.6e-19] {
        let text = render(&renderer, value, RenderPolicy::FixedWidth(12));
        let parsed: f64 = text.trim_end_matches('.').parse().unwrap();
        let relative_error = ((parsed - value) / value).abs();
        assert!(relative_error < 1e-5, "{value:e} rendered as {text}");
    }
}

#[test]
fn test_fixed_precision_digit_count() {
    let renderer = FloatRenderer::new();
    for digits in [1, 2, 5, 17, 40] {
        for value in [1.0 / 3.0, 5e-324, f64::MAX, -7.0] {
            let text = render(&renderer, value, RenderPolicy::FixedPrecision(digits));
            let mantissa = text.split('e').next().unwrap();
            let digit_count = mantissa.chars().filter(char::is_ascii_digit).count();
            assert_eq2!(digit_count, digits, "{value:e} rendered as {text}");
        }
    }
}
