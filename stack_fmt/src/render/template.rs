// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Positional `%N` templates and the entry points that render into a fresh
//! [`StackSink`].
//!
//! | Template     | Output                                    |
//! |--------------|-------------------------------------------|
//! | `%0`, `%12`  | argument 0, argument 12 (greedy digits)   |
//! | `%00`        | argument 0 (leading zeros are allowed)    |
//! | `%%`         | a literal `%`                             |
//! | anything else| copied as is                              |
//!
//! Every argument must be referenced at least once. Arguments may be referenced any
//! number of times and in any order.

use smallvec::SmallVec;

use crate::{FinishedText, FormatError, FormatOut, FormatResult, INLINE_ARG_COUNT, Render,
            SeparatedWriter, StackSink};

/// Render `template` into `out`, substituting `%N` with `args[N]`.
///
/// # Errors
///
/// - [`FormatError::DanglingEscape`] if the template ends with `%`.
/// - [`FormatError::UnmatchedPlaceholder`] if `%` is followed by anything other than a
///   digit or `%`.
/// - [`FormatError::IndexOutOfRange`] if `N >= args.len()`.
/// - [`FormatError::UnusedArgument`] if an argument is never referenced. This is only
///   known after the whole template was written.
/// - Any error returned by an argument's [`Render`] impl.
pub fn render_template(
    out: &mut dyn FormatOut,
    template: &str,
    args: &[&dyn Render],
) -> FormatResult {
    try_render_template(out, template, args).inspect_err(|error| {
        tracing::warn!(
            message = "Template rejected",
            template = template,
            arg_count = args.len(),
            error = %error
        );
    })
}

fn try_render_template(
    out: &mut dyn FormatOut,
    template: &str,
    args: &[&dyn Render],
) -> FormatResult {
    let bytes = template.as_bytes();
    let mut is_used: SmallVec<[bool; INLINE_ARG_COUNT]> = SmallVec::from_elem(false, args.len());

    let mut literal_start = 0;
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] != b'%' {
            index += 1;
            continue;
        }

        out.write_span(&bytes[literal_start..index]);
        let percent_position = index;
        index += 1;

        match bytes.get(index) {
            None => return Err(FormatError::DanglingEscape),
            Some(b'%') => {
                out.write_byte(b'%');
                index += 1;
            }
            Some(it) if it.is_ascii_digit() => {
                let (arg_index, digits_len) = parse_arg_index(&bytes[index..]);
                index += digits_len;
                let Some(arg) = args.get(arg_index) else {
                    return Err(FormatError::IndexOutOfRange {
                        index: arg_index,
                        arg_count: args.len(),
                    });
                };
                is_used[arg_index] = true;
                arg.render(out)?;
            }
            Some(_) => {
                return Err(FormatError::UnmatchedPlaceholder {
                    position: percent_position,
                });
            }
        }
        literal_start = index;
    }
    out.write_span(&bytes[literal_start..]);

    match is_used.iter().position(|&it| !it) {
        Some(index) => Err(FormatError::UnusedArgument { index }),
        None => Ok(()),
    }
}

/// Leading run of ASCII digits as an index, and how many bytes it spans. Saturates
/// instead of wrapping, so an absurdly long index is reported as out of range.
fn parse_arg_index(bytes: &[u8]) -> (usize, usize) {
    let digits_len = bytes.iter().take_while(|it| it.is_ascii_digit()).count();
    let value = bytes[..digits_len].iter().fold(0_usize, |acc, &digit| {
        acc.saturating_mul(10)
            .saturating_add(usize::from(digit - b'0'))
    });
    (value, digits_len)
}

/// Render every argument in order with `separator` between them.
///
/// # Errors
///
/// The first error returned by an argument's [`Render`] impl.
pub fn print_separated(
    out: &mut dyn FormatOut,
    separator: &str,
    args: &[&dyn Render],
) -> FormatResult {
    let mut writer = SeparatedWriter::new(out, separator);
    for arg in args {
        writer.push(*arg)?;
    }
    Ok(())
}

/// [`print_separated`] with a single space.
///
/// # Errors
///
/// See [`print_separated`].
pub fn print_spaced(out: &mut dyn FormatOut, args: &[&dyn Render]) -> FormatResult {
    print_separated(out, " ", args)
}

/// [`print_separated`] with nothing in between.
///
/// # Errors
///
/// See [`print_separated`].
pub fn print_packed(out: &mut dyn FormatOut, args: &[&dyn Render]) -> FormatResult {
    print_separated(out, "", args)
}

/// Run `write` against a fresh [`StackSink<N>`] and finish it. The sink is dropped if
/// `write` fails, so partial output never escapes.
///
/// # Errors
///
/// Whatever `write` returns.
pub fn stack_format_with<const N: usize>(
    write: impl FnOnce(&mut dyn FormatOut) -> FormatResult,
) -> FormatResult<FinishedText<N>> {
    let mut sink = StackSink::<N>::new();
    write(&mut sink)?;
    Ok(sink.finish())
}

/// [`render_template`] into a fresh [`StackSink<N>`]. Usually called through the
/// [`crate::stack_format!`] macro.
///
/// # Errors
///
/// See [`render_template`].
pub fn stack_format<const N: usize>(
    template: &str,
    args: &[&dyn Render],
) -> FormatResult<FinishedText<N>> {
    stack_format_with::<N>(|out| render_template(out, template, args))
}

/// [`print_spaced`] into a fresh [`StackSink<N>`]. Usually called through the
/// [`crate::stack_print!`] macro.
///
/// # Errors
///
/// See [`print_separated`].
pub fn stack_print<const N: usize>(args: &[&dyn Render]) -> FormatResult<FinishedText<N>> {
    stack_format_with::<N>(|out| print_spaced(out, args))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{DEFAULT_STACK_CAPACITY, assert_eq2, hex, pad_int, stack_format, stack_print};

    #[test]
    fn test_multi_digit_indices() {
        let text = stack_format!(
            128,
            "%0%1%2%3%4%5%6%7%8%9%10%11%12%13%00%02",
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13
        )
        .unwrap();
        assert_eq2!(text, "01234567891011121302");
    }

    #[test]
    fn test_small_capacity_spills() {
        let text = stack_format!(4, "%0, %1", 10_000.0_f32, 66.0_f32).unwrap();
        assert_eq2!(text, "10000, 66");
        assert!(text.did_overflow());
    }

    #[test]
    fn test_reuse_and_reorder() {
        let text = stack_format!(32, "%1-%0-%1", "a", "b").unwrap();
        assert_eq2!(text, "b-a-b");
    }

    #[test_case("100%%", "100%")]
    #[test_case("%%%0%%", "%x%")]
    #[test_case("no placeholders %0", "no placeholders x")]
    #[test_case("ünïcode %0 ✓", "ünïcode x ✓" ; "unicode literal")]
    fn test_literals(template: &str, expected: &str) {
        let text = stack_format!(64, template, "x").unwrap();
        assert_eq2!(text, expected);
    }

    #[test]
    fn test_empty_template_without_args() {
        let text = stack_format::<8>("", &[]).unwrap();
        assert!(text.is_empty());
    }

    #[test_case("%0 %", FormatError::DanglingEscape)]
    #[test_case("%0 %x", FormatError::UnmatchedPlaceholder { position: 3 })]
    #[test_case("%0 %2", FormatError::IndexOutOfRange { index: 2, arg_count: 1 })]
    #[test_case(
        "%99999999999999999999999",
        FormatError::IndexOutOfRange { index: usize::MAX, arg_count: 1 }
    )]
    #[test_case("none", FormatError::UnusedArgument { index: 0 })]
    fn test_template_errors(template: &str, expected: FormatError) {
        assert_eq2!(stack_format!(32, template, 1), Err(expected));
    }

    #[test]
    fn test_unused_argument_reports_first_gap() {
        let result = stack_format!(32, "%0 %2", 'a', 'b', 'c');
        assert_eq2!(result, Err(FormatError::UnusedArgument { index: 1 }));
    }

    #[test]
    fn test_render_template_into_string() {
        let mut out = String::new();
        render_template(&mut out, "0x%0 [%1]", &[&hex(48_879_u16), &pad_int(-7, 3, '0')])
            .unwrap();
        assert_eq2!(out, "0xbeef [-07]");
    }

    #[test]
    fn test_partial_output_left_in_caller_cursor() {
        let mut out = String::new();
        let result = render_template(&mut out, "ok %0 %", &[&1]);
        assert_eq2!(result, Err(FormatError::DanglingEscape));
        assert_eq2!(out, "ok 1 ");
    }

    #[test]
    fn test_print_family() {
        let mut out = Vec::new();
        print_separated(&mut out, ", ", &[&1, &"two", &3.0]).unwrap();
        assert_eq2!(out, b"1, two, 3".to_vec());

        let mut out = String::new();
        print_packed(&mut out, &[&'a', &'b', &true]).unwrap();
        assert_eq2!(out, "abtrue");

        let mut out = String::new();
        print_spaced(&mut out, &[]).unwrap();
        assert_eq2!(out, "");
    }

    #[test]
    fn test_stack_print() {
        let text = stack_print!(DEFAULT_STACK_CAPACITY, "sum", 1 + 2, -0.5).unwrap();
        assert_eq2!(text, "sum 3 -0.5");
        assert!(!text.did_overflow());
    }

    #[test]
    fn test_stack_format_with() {
        let text = stack_format_with::<16>(|out| {
            out.write_text("[");
            print_packed(out, &[&1, &2])?;
            out.write_text("]");
            Ok(())
        })
        .unwrap();
        assert_eq2!(text, "[12]");

        let result = stack_format_with::<16>(|out| {
            out.write_text("partial");
            Err(FormatError::DisplayFailed)
        });
        assert_eq2!(result, Err(FormatError::DisplayFailed));
    }
}
