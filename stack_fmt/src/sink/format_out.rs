// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A write-once forward cursor. Every renderer in this crate writes through this trait,
/// one byte or one span at a time, and never reads back or seeks. That is what allows
/// a [`crate::StackSink`] to move its contents from the stack to the heap in the middle
/// of a render without the renderer noticing.
///
/// Writes are infallible. A sink that runs out of room grows instead of failing.
///
/// The method names are deliberately distinct from [`std::fmt::Write`] and
/// [`std::io::Write`] so that a type can implement all of them without ambiguity.
pub trait FormatOut {
    /// Append a single byte.
    fn write_byte(&mut self, byte: u8);

    /// Append a run of bytes.
    fn write_span(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    /// Append UTF-8 text.
    fn write_text(&mut self, text: &str) { self.write_span(text.as_bytes()); }

    /// Append `byte` repeated `count` times.
    fn write_fill(&mut self, byte: u8, count: usize) {
        for _ in 0..count {
            self.write_byte(byte);
        }
    }
}

impl<O: FormatOut + ?Sized> FormatOut for &mut O {
    fn write_byte(&mut self, byte: u8) { (**self).write_byte(byte); }
    fn write_span(&mut self, bytes: &[u8]) { (**self).write_span(bytes); }
    fn write_text(&mut self, text: &str) { (**self).write_text(text); }
    fn write_fill(&mut self, byte: u8, count: usize) { (**self).write_fill(byte, count); }
}

impl FormatOut for Vec<u8> {
    fn write_byte(&mut self, byte: u8) { self.push(byte); }
    fn write_span(&mut self, bytes: &[u8]) { self.extend_from_slice(bytes); }
    fn write_fill(&mut self, byte: u8, count: usize) {
        self.resize(self.len() + count, byte);
    }
}

/// A [String] can only hold UTF-8. Text and spans that come from this crate's renderers
/// always are, but a stray non-ASCII byte pushed through [`FormatOut::write_byte`] is
/// replaced with [`char::REPLACEMENT_CHARACTER`].
impl FormatOut for String {
    fn write_byte(&mut self, byte: u8) {
        if byte.is_ascii() {
            self.push(char::from(byte));
        } else {
            self.push(char::REPLACEMENT_CHARACTER);
        }
    }

    fn write_span(&mut self, bytes: &[u8]) {
        self.push_str(&String::from_utf8_lossy(bytes));
    }

    fn write_text(&mut self, text: &str) { self.push_str(text); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn write_greeting(out: &mut dyn FormatOut) {
        out.write_text("hi");
        out.write_byte(b' ');
        out.write_fill(b'!', 3);
    }

    #[test]
    fn test_vec_and_string_targets() {
        let mut vec = Vec::new();
        write_greeting(&mut vec);
        assert_eq2!(vec, b"hi !!!".to_vec());

        let mut string = String::new();
        write_greeting(&mut string);
        assert_eq2!(string, "hi !!!");
    }

    #[test]
    fn test_mut_ref_forwarding() {
        let mut string = String::new();
        {
            let mut by_ref = &mut string;
            let out: &mut dyn FormatOut = &mut by_ref;
            out.write_span("ünï".as_bytes());
            out.write_byte(0xFF);
        }
        assert_eq2!(string, "ünï\u{FFFD}");
    }
}
