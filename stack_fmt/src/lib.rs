// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_stack_fmt
//!
//! Composable text rendering into stack buffers.
//!
//! Values of any supported type are written through a write-once, forward-only output
//! cursor ([`FormatOut`]). The usual cursor is a [`StackSink<N>`]: a `[u8; N]` buffer on
//! the stack that moves everything to the heap, once, only if the output outgrows it.
//! Finishing the sink freezes it into a NUL terminated [`FinishedText<N>`].
//!
//! ```
//! use r3bl_stack_fmt::{pad_float, pad_left, shortest_float, stack_format, stack_print};
//!
//! let text = stack_format!(64, "%0 is %1 (%0)", "pi", shortest_float(3.141_592_653_589_793))
//!     .unwrap();
//! assert_eq!(text, "pi is 3.141592653589793 (pi)");
//! assert!(!text.did_overflow());
//!
//! // Fixed-width floats always take exactly `width` characters, sign included.
//! let row = stack_print!(64, pad_float(1.0 / 3.0, 8), pad_float(-12_345_678.9, 8)).unwrap();
//! assert_eq!(row, "0.333333 -1.2e+07");
//!
//! // Containers and padding nest.
//! let text = stack_format!(64, "[%0]", pad_left(vec![1, 2], 10, '.')).unwrap();
//! assert_eq!(text, "[..{ 1, 2 }]");
//! ```
//!
//! # Table of contents
//!
//! | Module         | What                                                          |
//! |----------------|---------------------------------------------------------------|
//! | [`sink`]       | [`FormatOut`] cursor, [`StackSink`], [`FinishedText`]         |
//! | [`float_fmt`]  | [`FloatRenderer`], [`RenderPolicy`], [`FloatFormatConfig`]    |
//! | [`render`]     | [`Render`] trait, integers, templates, helpers, containers    |
//! | [`error`]      | [`FormatError`]                                               |
//! | [`log`]        | Optional [`tracing`] subscriber setup, [`init_tracing`]       |
//! | [`sizes`]      | Inline capacities of every stack buffer                       |
//!
//! # Float policies
//!
//! | Policy                          | `1234.5678`        | `1e-7`          |
//! |---------------------------------|--------------------|-----------------|
//! | [`RenderPolicy::FreeForm`]      | `1234.5678`        | `1e-7`          |
//! | [`RenderPolicy::FixedPrecision`]| `1.23e+3` (3)      | `1.00e-7` (3)   |
//! | [`RenderPolicy::FixedWidth`]    | `1234.57` (7)      | `1.0e-07` (7)   |
//! | [`RenderPolicy::AlwaysFixedPoint`] | `1234.5678`     | `0.0000001`     |
//! | [`RenderPolicy::General`]       | `1234.57` (6)      | `1e-07` (6)     |
//!
//! Digits come from a [`DigitSource`]. The default [`StdDigitSource`] produces the
//! shortest round-trip digits and correctly rounded fixed precision expansions. When a
//! policy has to drop more digits, it re-rounds half to even ([`round_digits_at`]).

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod error;
pub mod float_fmt;
pub mod log;
pub mod macros;
pub mod render;
pub mod sink;
pub mod sizes;

// Re-export.
pub use error::*;
pub use float_fmt::*;
pub use log::*;
pub use render::*;
pub use sink::*;
pub use sizes::*;
