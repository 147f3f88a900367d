// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq`!] macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Render a `%N` template into a [`crate::StackSink`] with inline capacity `N` and
/// return the [`crate::FinishedText`].
///
/// ```
/// use r3bl_stack_fmt::stack_format;
///
/// let text = stack_format!(64, "%0 + %0 = %1", 2, 4).unwrap();
/// assert_eq!(text, "2 + 2 = 4");
/// ```
#[macro_export]
macro_rules! stack_format {
    ($capacity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::stack_format::<{ $capacity }>(
            $template,
            &[$(&$arg),*],
        )
    };
}

/// Render the arguments back to back, separated by a single space, into a
/// [`crate::StackSink`] with inline capacity `N`.
///
/// ```
/// use r3bl_stack_fmt::stack_print;
///
/// let text = stack_print!(32, "x", 1, 2.5).unwrap();
/// assert_eq!(text, "x 1 2.5");
/// ```
#[macro_export]
macro_rules! stack_print {
    ($capacity:expr $(, $arg:expr)* $(,)?) => {
        $crate::stack_print::<{ $capacity }>(&[$(&$arg),*])
    };
}
