// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Padding and separator helpers. They wrap another [Render] value and are themselves
//! [Render], so they nest: `pad_left(with_separator(&[1, 2, 3], "-"), 8, '.')`.

use std::fmt::{Debug, Formatter};

use crate::{FormatOut, FormatResult, Integer, PAD_SCRATCH_CAPACITY, Render, StackSink,
            write_decimal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadSide {
    /// Fill goes before the value (right aligned).
    Left,
    /// Fill goes after the value (left aligned).
    Right,
    /// Fill on both sides, the odd one out on the left.
    Both,
}

/// A value padded to at least `width` characters. Width is counted in [char]s, not
/// bytes or grapheme clusters. Values that are already wider are never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padded<T> {
    pub value: T,
    pub width: usize,
    pub fill: char,
    pub side: PadSide,
}

#[must_use]
pub fn pad_left<T: Render>(value: T, width: usize, fill: char) -> Padded<T> {
    Padded {
        value,
        width,
        fill,
        side: PadSide::Left,
    }
}

#[must_use]
pub fn pad_right<T: Render>(value: T, width: usize, fill: char) -> Padded<T> {
    Padded {
        value,
        width,
        fill,
        side: PadSide::Right,
    }
}

#[must_use]
pub fn pad_both<T: Render>(value: T, width: usize, fill: char) -> Padded<T> {
    Padded {
        value,
        width,
        fill,
        side: PadSide::Both,
    }
}

impl<T: Render> Render for Padded<T> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        // Measure first. The scratch sink spills for very long values, which is fine.
        let mut scratch = StackSink::<PAD_SCRATCH_CAPACITY>::new();
        self.value.render(&mut scratch)?;
        let rendered = scratch.finish();

        let missing = self.width.saturating_sub(count_chars(rendered.as_bytes()));
        let (before, after) = match self.side {
            PadSide::Left => (missing, 0),
            PadSide::Right => (0, missing),
            PadSide::Both => (missing - missing / 2, missing / 2),
        };

        write_fill_char(out, self.fill, before);
        out.write_span(rendered.as_bytes());
        write_fill_char(out, self.fill, after);
        Ok(())
    }
}

/// An integer padded to `width`, with the `-` ahead of the fill: `pad_int(-12, 4, '0')`
/// renders `-012`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddedInt<T> {
    pub value: T,
    pub width: usize,
    pub fill: char,
}

#[must_use]
pub fn pad_int<T: Integer>(value: T, width: usize, fill: char) -> PaddedInt<T> {
    PaddedInt { value, width, fill }
}

impl<T: Integer> Render for PaddedInt<T> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        let mut digits = StackSink::<64>::new();
        write_decimal(&mut digits, self.value.unsigned_magnitude());
        let digits = digits.finish();

        let negative = self.value.is_negative();
        let used = usize::from(negative) + digits.len();
        if negative {
            out.write_byte(b'-');
        }
        write_fill_char(out, self.fill, self.width.saturating_sub(used));
        out.write_span(digits.as_bytes());
        Ok(())
    }
}

/// Items of a collection joined by `separator`, without brackets.
pub struct Separated<'a, 's, C: ?Sized> {
    pub items: &'a C,
    pub separator: &'s str,
}

impl<C: ?Sized> Debug for Separated<'_, '_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Separated")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

#[must_use]
pub fn with_separator<'a, 's, C: ?Sized>(
    items: &'a C,
    separator: &'s str,
) -> Separated<'a, 's, C>
where
    for<'i> &'i C: IntoIterator,
{
    Separated { items, separator }
}

impl<C: ?Sized> Render for Separated<'_, '_, C>
where
    for<'i> &'i C: IntoIterator,
    for<'i> <&'i C as IntoIterator>::Item: Render,
{
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        let mut writer = SeparatedWriter::new(out, self.separator);
        for item in self.items {
            writer.push(&item)?;
        }
        Ok(())
    }
}

/// Forward cursor adapter that writes `separator` between the values pushed into it.
pub struct SeparatedWriter<'out, 's> {
    out: &'out mut dyn FormatOut,
    separator: &'s str,
    is_first: bool,
}

impl Debug for SeparatedWriter<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeparatedWriter")
            .field("separator", &self.separator)
            .field("is_first", &self.is_first)
            .finish_non_exhaustive()
    }
}

impl<'out, 's> SeparatedWriter<'out, 's> {
    pub fn new(out: &'out mut dyn FormatOut, separator: &'s str) -> Self {
        Self {
            out,
            separator,
            is_first: true,
        }
    }

    /// # Errors
    ///
    /// Whatever `value` fails to render with. The separator is already written then.
    pub fn push(&mut self, value: &dyn Render) -> FormatResult {
        if !self.is_first {
            self.out.write_text(self.separator);
        }
        self.is_first = false;
        value.render(self.out)
    }
}

fn write_fill_char(out: &mut dyn FormatOut, fill: char, count: usize) {
    if fill.is_ascii() {
        let mut buffer = [0; 1];
        fill.encode_utf8(&mut buffer);
        out.write_fill(buffer[0], count);
    } else {
        let mut buffer = [0; 4];
        let encoded = fill.encode_utf8(&mut buffer);
        for _ in 0..count {
            out.write_text(encoded);
        }
    }
}

/// UTF-8 continuation bytes don't start a [char].
fn count_chars(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&it| (it & 0xC0) != 0x80).count()
}
