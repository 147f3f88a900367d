// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ffi::CStr,
          fmt::{Debug, Display, Formatter},
          str::Utf8Error};

/// The frozen output of a [`crate::StackSink`]. The bytes are NUL terminated in both
/// variants; [`FinishedText::as_bytes`] excludes the terminator and
/// [`FinishedText::as_bytes_with_nul`] includes it.
#[derive(Clone)]
pub enum FinishedText<const N: usize> {
    /// Never spilled. `buffer[len]` holds the terminator.
    Inline { buffer: [u8; N], len: usize },
    /// Spilled to the heap. The last byte is the terminator.
    Heap(Box<[u8]>),
}

impl<const N: usize> FinishedText<N> {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let with_nul = self.as_bytes_with_nul();
        with_nul
            .split_last()
            .map_or(with_nul, |(_terminator, text)| text)
    }

    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        match self {
            FinishedText::Inline { buffer, len } => &buffer[..=*len],
            FinishedText::Heap(buffer) => buffer,
        }
    }

    /// [None] if the text contains an interior NUL byte.
    #[must_use]
    pub fn as_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(self.as_bytes_with_nul()).ok()
    }

    /// # Errors
    ///
    /// Returns an error if something wrote bytes that are not valid UTF-8.
    pub fn to_str(&self) -> Result<&str, Utf8Error> { std::str::from_utf8(self.as_bytes()) }

    #[must_use]
    pub fn len(&self) -> usize { self.as_bytes().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.as_bytes().is_empty() }

    #[must_use]
    pub fn did_overflow(&self) -> bool { matches!(self, FinishedText::Heap(_)) }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> { self.as_bytes().iter() }
}

impl<'a, const N: usize> IntoIterator for &'a FinishedText<N> {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<const N: usize> AsRef<[u8]> for FinishedText<N> {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

impl<const N: usize> Display for FinishedText<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<const N: usize> Debug for FinishedText<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinishedText")
            .field("text", &String::from_utf8_lossy(self.as_bytes()))
            .field("did_overflow", &self.did_overflow())
            .finish()
    }
}

impl<const N: usize, const M: usize> PartialEq<FinishedText<M>> for FinishedText<N> {
    fn eq(&self, other: &FinishedText<M>) -> bool { self.as_bytes() == other.as_bytes() }
}

impl<const N: usize> Eq for FinishedText<N> {}

impl<const N: usize> PartialEq<str> for FinishedText<N> {
    fn eq(&self, other: &str) -> bool { self.as_bytes() == other.as_bytes() }
}

impl<const N: usize> PartialEq<&str> for FinishedText<N> {
    fn eq(&self, other: &&str) -> bool { self.as_bytes() == other.as_bytes() }
}
