// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

use crate::SpecialValue;

/// Result type returned by every render operation. The output cursor is passed in by the
/// caller, so on success there is usually nothing to return.
pub type FormatResult<T = ()> = Result<T, FormatError>;

/// Everything that can go wrong while rendering. Running out of inline capacity is not
/// in this list: a [`crate::StackSink`] spills to the heap instead of failing.
///
/// When an error is returned part of the output may already have been written to the
/// caller's cursor. The [`crate::stack_format`] family drops its sink in that case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum FormatError {
    #[error("Invalid argument: {what} = {value}, supported range is {min}..={max}")]
    #[diagnostic(
        code(r3bl_stack_fmt::invalid_argument),
        help("Digit counts and field widths are limited to what the digit buffer can hold")
    )]
    InvalidArgument {
        what: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("No symbol configured for {special_value}")]
    #[diagnostic(
        code(r3bl_stack_fmt::unsupported_special_value),
        help("Set `infinity_symbol` / `nan_symbol` in the FloatFormatConfig")
    )]
    UnsupportedSpecialValue { special_value: SpecialValue },

    #[error("Template has '%' at byte {position} not followed by a digit or '%'")]
    #[diagnostic(
        code(r3bl_stack_fmt::unmatched_placeholder),
        help("Use %0, %1, ... for arguments and %% for a literal percent sign")
    )]
    UnmatchedPlaceholder { position: usize },

    #[error("Template ends with a lone '%'")]
    #[diagnostic(
        code(r3bl_stack_fmt::dangling_escape),
        help("Use %% for a literal percent sign")
    )]
    DanglingEscape,

    #[error("Template references %{index} but only {arg_count} argument(s) were passed")]
    #[diagnostic(code(r3bl_stack_fmt::index_out_of_range))]
    IndexOutOfRange { index: usize, arg_count: usize },

    #[error("Argument {index} is never referenced by the template")]
    #[diagnostic(
        code(r3bl_stack_fmt::unused_argument),
        help("Remove the argument or reference it from the template")
    )]
    UnusedArgument { index: usize },

    #[error("A Display implementation returned an error")]
    #[diagnostic(code(r3bl_stack_fmt::display_failed))]
    DisplayFailed,
}

impl From<std::fmt::Error> for FormatError {
    fn from(_: std::fmt::Error) -> Self { FormatError::DisplayFailed }
}
