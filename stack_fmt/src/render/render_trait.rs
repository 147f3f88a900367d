// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display, Formatter, Write as _};

use crate::{FinishedText, FloatRenderer, FormatOut, FormatResult, RenderPolicy};

/// Anything that can write itself through a [`FormatOut`] cursor. This is the per-type
/// recipe the template engine, the padding helpers and the container impls dispatch
/// through. The trait is object safe, so arguments of mixed types travel together as
/// `&[&dyn Render]`.
///
/// Implementations must write forward only and may return early with an error, leaving
/// whatever they already wrote in `out`.
///
/// ```
/// use r3bl_stack_fmt::{FormatOut, FormatResult, Render, stack_format};
///
/// struct Point { x: i32, y: i32 }
///
/// impl Render for Point {
///     fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
///         out.write_byte(b'(');
///         self.x.render(out)?;
///         out.write_text(", ");
///         self.y.render(out)?;
///         out.write_byte(b')');
///         Ok(())
///     }
/// }
///
/// let text = stack_format!(32, "at %0", Point { x: 3, y: -4 }).unwrap();
/// assert_eq!(text, "at (3, -4)");
/// ```
pub trait Render {
    /// # Errors
    ///
    /// Whatever the value's renderer rejects, see [`crate::FormatError`].
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult;
}

impl Render for str {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        out.write_text(self);
        Ok(())
    }
}

impl Render for String {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        out.write_text(self);
        Ok(())
    }
}

impl Render for char {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        let mut buffer = [0; 4];
        out.write_text(self.encode_utf8(&mut buffer));
        Ok(())
    }
}

impl Render for bool {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        out.write_text(if *self { "true" } else { "false" });
        Ok(())
    }
}

/// `printf("%g")`: six significant digits.
impl Render for f64 {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        FloatRenderer::new().render_f64(*self, RenderPolicy::General(6), out)
    }
}

/// `printf("%g")`: six significant digits.
impl Render for f32 {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        FloatRenderer::new().render_f32(*self, RenderPolicy::General(6), out)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult { (**self).render(out) }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult { (**self).render(out) }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult { (**self).render(out) }
}

/// Nested formatting: text finished by one sink is copied into another.
impl<const N: usize> Render for FinishedText<N> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        out.write_span(self.as_bytes());
        Ok(())
    }
}

/// Adapter that lets [`std::fmt`] machinery write into a [`FormatOut`].
pub struct FmtWriteAdapter<'out> {
    pub out: &'out mut dyn FormatOut,
}

impl Debug for FmtWriteAdapter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("FmtWriteAdapter")
    }
}

impl std::fmt::Write for FmtWriteAdapter<'_> {
    fn write_str(&mut self, text: &str) -> std::fmt::Result {
        self.out.write_text(text);
        Ok(())
    }
}

/// Renders any [Display] value. There is no blanket impl of [Render] for [Display]
/// types (it would collide with the specific impls above), so this wrapper is the
/// explicit fallback for types that only know [`std::fmt`].
#[derive(Debug, Clone, Copy)]
pub struct ViaDisplay<'a, T: ?Sized>(pub &'a T);

#[must_use]
pub fn via_display<T: Display + ?Sized>(value: &T) -> ViaDisplay<'_, T> { ViaDisplay(value) }

impl<T: Display + ?Sized> Render for ViaDisplay<'_, T> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        let mut adapter = FmtWriteAdapter { out };
        write!(adapter, "{}", self.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::{FormatError, StackSink, assert_eq2, stack_format};

    fn render_to_string(value: &dyn Render) -> String {
        let mut out = String::new();
        value.render(&mut out).unwrap();
        out
    }

    #[test]
    fn test_scalars() {
        assert_eq2!(render_to_string(&"str"), "str");
        assert_eq2!(render_to_string(&String::from("string")), "string");
        assert_eq2!(render_to_string(&'ß'), "ß");
        assert_eq2!(render_to_string(&true), "true");
        assert_eq2!(render_to_string(&false), "false");
        assert_eq2!(render_to_string(&Box::new(5_u8)), "5");
    }

    #[test]
    fn test_floats_default_to_general() {
        assert_eq2!(render_to_string(&1.0_f64), "1");
        assert_eq2!(render_to_string(&0.1_f32), "0.1");
        assert_eq2!(render_to_string(&1_234_567.0_f64), "1.23457e+06");
        assert_eq2!(render_to_string(&f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_nested_finished_text() {
        let mut inner = StackSink::<8>::new();
        inner.write_text("inner");
        let inner = inner.finish();
        let text = stack_format!(32, "[%0]", inner).unwrap();
        assert_eq2!(text, "[inner]");
    }

    #[test]
    fn test_via_display() {
        let address = Ipv4Addr::new(127, 0, 0, 1);
        assert_eq2!(render_to_string(&via_display(&address)), "127.0.0.1");
    }

    #[test]
    fn test_via_display_failure() {
        struct Broken;
        impl Display for Broken {
            fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result { Err(std::fmt::Error) }
        }
        let mut out = String::new();
        assert_eq2!(
            via_display(&Broken).render(&mut out),
            Err(FormatError::DisplayFailed)
        );
    }
}
