// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting these tuning parameters. Every one of them is a stack
//! allocation somewhere in a render path. Larger inline sizes mean fewer heap spills but
//! deeper stack frames, and nested renders (padding inside containers inside templates)
//! multiply them.

use smallvec::SmallVec;

/// Inline capacity for callers that have no better estimate of their output size.
pub const DEFAULT_STACK_CAPACITY: usize = 1024;

/// Digits produced by a [`crate::DigitSource`] for one value. The longest exact
/// expansion requested by any policy is [`MAX_PRECISION_DIGITS`] digits, and the
/// shortest round-trip representation of an [f64] is at most 17 digits.
pub const DIGIT_BUFFER_SIZE: usize = 128;

/// Scratch sink used by the padding helpers to measure the rendered width of a value
/// before the fill is written.
pub const PAD_SCRATCH_CAPACITY: usize = 1024;

/// Upper bound for fixed precision digit counts and fixed-width field widths.
pub const MAX_PRECISION_DIGITS: usize = 120;

/// Number of template arguments tracked inline (for unused argument detection) before
/// the tracking bitmap spills to the heap.
pub const INLINE_ARG_COUNT: usize = 16;

/// ASCII digit storage for a single generated float.
pub type DigitBuffer = SmallVec<[u8; DIGIT_BUFFER_SIZE]>;
