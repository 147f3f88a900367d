// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The bounded sink: a fixed-capacity inline buffer that migrates to the heap exactly
//! once, at the byte that would have consumed the last inline slot. The last slot is
//! always kept for the NUL terminator that [`StackSink::finish`] writes, so the
//! finished text can be handed to C APIs as-is.

use std::fmt::{Debug, Formatter};

use super::{FinishedText, FormatOut};

/// Callback that observes the inline contents at the moment the sink spills.
pub type OverflowHook<'hook> = &'hook mut dyn FnMut(&[u8]);

enum SinkState<const N: usize> {
    Inline { buffer: [u8; N], cursor: usize },
    Overflowed { buffer: Vec<u8> },
}

/// Output cursor backed by `[u8; N]` on the stack. It accepts writes inline while there
/// is room for the byte plus the terminator. The write that doesn't fit moves every
/// byte written so far into a [Vec] with capacity `2 * N` and continues there. Callers
/// see no difference except [`StackSink::did_overflow`].
///
/// A sink with `N == 0` starts on the heap. Its overflow hook never runs because there
/// is no inline phase to leave.
///
/// ```
/// use r3bl_stack_fmt::{FormatOut, StackSink};
///
/// let mut sink = StackSink::<8>::new();
/// sink.write_text("hello");
/// assert!(!sink.did_overflow());
/// sink.write_text(" world");
/// assert!(sink.did_overflow());
///
/// let text = sink.finish();
/// assert_eq!(text, "hello world");
/// assert_eq!(text.as_bytes_with_nul().last(), Some(&0));
/// ```
pub struct StackSink<'hook, const N: usize> {
    state: SinkState<N>,
    on_overflow: Option<OverflowHook<'hook>>,
}

impl<const N: usize> Default for StackSink<'_, N> {
    fn default() -> Self { Self::new() }
}

impl<'hook, const N: usize> StackSink<'hook, N> {
    #[must_use]
    pub fn new() -> Self {
        let state = if N == 0 {
            SinkState::Overflowed { buffer: Vec::new() }
        } else {
            SinkState::Inline {
                buffer: [0; N],
                cursor: 0,
            }
        };
        Self {
            state,
            on_overflow: None,
        }
    }

    /// `hook` receives the inline bytes (everything before the byte that triggered the
    /// spill) once, if and when the sink spills.
    #[must_use]
    pub fn with_overflow_hook(hook: OverflowHook<'hook>) -> Self {
        let mut it = Self::new();
        it.on_overflow = Some(hook);
        it
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.state {
            SinkState::Inline { cursor, .. } => *cursor,
            SinkState::Overflowed { buffer } => buffer.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn did_overflow(&self) -> bool {
        matches!(self.state, SinkState::Overflowed { .. })
    }

    /// Terminate with a NUL byte and freeze. Reading the text is only possible through
    /// the returned [`FinishedText`], and nothing can be written to it.
    #[must_use]
    pub fn finish(self) -> FinishedText<N> {
        match self.state {
            SinkState::Inline { mut buffer, cursor } => {
                // Inline state guarantees cursor < N.
                buffer[cursor] = 0;
                FinishedText::Inline {
                    buffer,
                    len: cursor,
                }
            }
            SinkState::Overflowed { mut buffer } => {
                buffer.push(0);
                FinishedText::Heap(buffer.into_boxed_slice())
            }
        }
    }

    #[cold]
    #[inline(never)]
    fn spill(&mut self, byte: u8) {
        let heap_buffer = match &self.state {
            SinkState::Inline { buffer, cursor } => {
                let written = &buffer[..*cursor];
                if let Some(hook) = self.on_overflow.as_mut() {
                    hook(written);
                }
                let mut heap_buffer = Vec::with_capacity(2 * N);
                heap_buffer.extend_from_slice(written);
                heap_buffer.push(byte);
                tracing::debug!(
                    message = "StackSink spilled to heap",
                    inline_capacity = N,
                    inline_len = *cursor
                );
                heap_buffer
            }
            SinkState::Overflowed { .. } => {
                self.write_byte(byte);
                return;
            }
        };
        self.state = SinkState::Overflowed {
            buffer: heap_buffer,
        };
    }
}

impl<const N: usize> FormatOut for StackSink<'_, N> {
    #[inline]
    fn write_byte(&mut self, byte: u8) {
        match &mut self.state {
            SinkState::Inline { buffer, cursor } if *cursor + 1 < N => {
                buffer[*cursor] = byte;
                *cursor += 1;
            }
            SinkState::Inline { .. } => self.spill(byte),
            SinkState::Overflowed { buffer } => buffer.push(byte),
        }
    }

    fn write_span(&mut self, bytes: &[u8]) {
        match &mut self.state {
            SinkState::Inline { buffer, cursor } if bytes.len() < N - *cursor => {
                let end = *cursor + bytes.len();
                buffer[*cursor..end].copy_from_slice(bytes);
                *cursor = end;
            }
            SinkState::Overflowed { buffer } => buffer.extend_from_slice(bytes),
            SinkState::Inline { .. } => {
                // Byte by byte so the spill happens at the same offset as it would
                // for individual writes.
                for &byte in bytes {
                    self.write_byte(byte);
                }
            }
        }
    }

    fn write_fill(&mut self, byte: u8, count: usize) {
        match &mut self.state {
            SinkState::Inline { buffer, cursor } if count < N - *cursor => {
                let end = *cursor + count;
                buffer[*cursor..end].fill(byte);
                *cursor = end;
            }
            SinkState::Overflowed { buffer } => buffer.resize(buffer.len() + count, byte),
            SinkState::Inline { .. } => {
                for _ in 0..count {
                    self.write_byte(byte);
                }
            }
        }
    }
}

impl<const N: usize> std::fmt::Write for StackSink<'_, N> {
    fn write_str(&mut self, text: &str) -> std::fmt::Result {
        self.write_text(text);
        Ok(())
    }
}

impl<const N: usize> Debug for StackSink<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackSink")
            .field("capacity", &N)
            .field("len", &self.len())
            .field("did_overflow", &self.did_overflow())
            .field("has_overflow_hook", &self.on_overflow.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_fits_inline() {
        let mut sink = StackSink::<10>::new();
        sink.write_text("foo");
        sink.write_text("bar");
        assert_eq2!(sink.len(), 6);
        assert!(!sink.did_overflow());

        let text = sink.finish();
        assert_eq2!(text.as_bytes(), b"foobar");
        assert_eq2!(text.as_bytes_with_nul(), b"foobar\0");
        assert!(!text.did_overflow());
    }

    #[test]
    fn test_last_slot_is_reserved_for_terminator() {
        let mut sink = StackSink::<4>::new();
        sink.write_text("abc");
        assert!(!sink.did_overflow());
        sink.write_byte(b'd');
        assert!(sink.did_overflow());
        assert_eq2!(sink.finish(), "abcd");
    }

    #[test]
    fn test_overflow_hook_sees_inline_prefix() {
        let mut seen: Vec<Vec<u8>> = vec![];
        let mut hook = |written: &[u8]| seen.push(written.to_vec());
        {
            let mut sink = StackSink::<5>::with_overflow_hook(&mut hook);
            sink.write_text("foo");
            sink.write_text("bar");
            sink.write_text("baz");
            assert_eq2!(sink.finish(), "foobarbaz");
        }
        assert_eq2!(seen, vec![b"foob".to_vec()]);
    }

    #[test]
    fn test_overflow_hook_not_called_when_it_fits() {
        let mut calls = 0;
        let mut hook = |_: &[u8]| calls += 1;
        {
            let mut sink = StackSink::<10>::with_overflow_hook(&mut hook);
            sink.write_text("foobar");
            let _unused = sink.finish();
        }
        assert_eq2!(calls, 0);
    }

    #[test]
    fn test_zero_capacity_never_calls_hook() {
        let mut calls = 0;
        let mut hook = |_: &[u8]| calls += 1;
        {
            let mut sink = StackSink::<0>::with_overflow_hook(&mut hook);
            assert!(sink.did_overflow());
            sink.write_text("foo");
            sink.write_byte(b'!');
            let text = sink.finish();
            assert_eq2!(text, "foo!");
            assert_eq2!(text.len(), 4);
        }
        assert_eq2!(calls, 0);
    }

    #[test]
    fn test_zero_capacity_empty() {
        let text = StackSink::<0>::new().finish();
        assert!(text.is_empty());
        assert_eq2!(text.as_bytes_with_nul(), b"\0");
    }

    #[test_case(1, "abcdefghij" ; "capacity one")]
    #[test_case(2, "abcdefghij" ; "capacity two")]
    #[test_case(7, "abcdefghij" ; "capacity seven")]
    #[test_case(11, "abcdefghij" ; "exactly fits")]
    #[test_case(64, "abcdefghij" ; "roomy")]
    fn test_prefix_preserved_across_write_patterns(capacity: usize, input: &str) {
        fn run<const N: usize>(input: &str) -> (bool, bool) {
            // Byte at a time, span at a time, and filled runs must all agree.
            let mut by_byte = StackSink::<N>::new();
            for byte in input.bytes() {
                by_byte.write_byte(byte);
            }
            let mut by_span = StackSink::<N>::new();
            let (head, tail) = input.split_at(input.len() / 2);
            by_span.write_text(head);
            by_span.write_text(tail);

            let spilled = by_byte.did_overflow();
            assert_eq2!(spilled, by_span.did_overflow());
            let (by_byte, by_span) = (by_byte.finish(), by_span.finish());
            (by_byte == input, by_span == input)
        }
        let result = match capacity {
            1 => run::<1>(input),
            2 => run::<2>(input),
            7 => run::<7>(input),
            11 => run::<11>(input),
            _ => run::<64>(input),
        };
        assert_eq2!(result, (true, true));
    }

    #[test]
    fn test_write_fill_across_spill() {
        let mut sink = StackSink::<4>::new();
        sink.write_fill(b'-', 2);
        sink.write_fill(b'=', 5);
        assert!(sink.did_overflow());
        sink.write_fill(b'.', 1);
        assert_eq2!(sink.finish(), "--=====.");
    }

    #[test]
    fn test_fmt_write() {
        let mut sink = StackSink::<32>::new();
        write!(sink, "{}-{:>3}", "x", 7).unwrap();
        assert_eq2!(sink.finish(), "x-  7");
    }

    #[test]
    fn test_debug() {
        let mut sink = StackSink::<4>::new();
        sink.write_text("ab");
        assert_eq2!(
            format!("{sink:?}"),
            "StackSink { capacity: 4, len: 2, did_overflow: false, has_overflow_hook: false }"
        );
    }
}
