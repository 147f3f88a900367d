// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Re-rounding of already generated decimal digits. Fixed-width layouts often have room
//! for fewer digits than the digit source produced, so the tail is cut off here with
//! round-half-to-even.

use crate::DigitBuffer;

/// Whether a digit shifted left past the decimal point moved past the first digit, eg:
/// `"999"` rounded to two digits is `"10"` with the decimal point one place further
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carry {
    None,
    ShiftRight,
}

/// Should `digit` be bumped when `next` (and maybe more digits after it) is dropped?
/// Above `'5'` always rounds up. Exactly `'5'` is a tie only when nothing non-zero
/// follows (`has_more == false`), and ties go to the even digit.
#[must_use]
pub fn round_char_to_even(digit: u8, next: u8, has_more: bool) -> bool {
    match next.cmp(&b'5') {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => has_more || (digit - b'0') % 2 == 1,
        std::cmp::Ordering::Less => false,
    }
}

/// Cut `digits` down to `keep` digits, rounding half to even.
///
/// When the round-up carries out of the first digit (all nines), the buffer becomes
/// `"1"` followed by zeros, still `keep` long, and [`Carry::ShiftRight`] tells the
/// caller to add one to its decimal point. If `keep` is `0` the result is either empty
/// or `"1"` with a shift.
pub fn round_digits_at(digits: &mut DigitBuffer, keep: usize) -> Carry {
    let Some(&next) = digits.get(keep) else {
        return Carry::None;
    };
    let has_more = digits
        .get(keep + 1..)
        .is_some_and(|rest| rest.iter().any(|&it| it != b'0'));
    let last_kept = keep
        .checked_sub(1)
        .and_then(|index| digits.get(index).copied())
        .unwrap_or(b'0');

    digits.truncate(keep);

    if !round_char_to_even(last_kept, next, has_more) {
        return Carry::None;
    }

    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return Carry::None;
        }
    }

    match digits.first_mut() {
        Some(first) => *first = b'1',
        None => digits.push(b'1'),
    }
    Carry::ShiftRight
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(b'4', b'6', false, true ; "above half")]
    #[test_case(b'4', b'4', true, false ; "below half")]
    #[test_case(b'4', b'5', false, false ; "tie to even stays")]
    #[test_case(b'3', b'5', false, true ; "tie to even bumps odd")]
    #[test_case(b'4', b'5', true, true ; "not a tie")]
    fn test_round_char_to_even(digit: u8, next: u8, has_more: bool, expected: bool) {
        assert_eq2!(round_char_to_even(digit, next, has_more), expected);
    }

    #[test_case("12345", 3, "123", Carry::None)]
    #[test_case("12351", 3, "124", Carry::None)]
    #[test_case("12250", 3, "122", Carry::None ; "trailing zero is not more")]
    #[test_case("12350", 3, "124", Carry::None ; "odd tie")]
    #[test_case("19999", 2, "20", Carry::None)]
    #[test_case("99999", 3, "100", Carry::ShiftRight)]
    #[test_case("9", 0, "1", Carry::ShiftRight ; "keep nothing rounds up")]
    #[test_case("4", 0, "", Carry::None ; "keep nothing rounds down")]
    #[test_case("12", 5, "12", Carry::None ; "nothing to cut")]
    fn test_round_digits_at(input: &str, keep: usize, expected: &str, carry: Carry) {
        let mut digits: DigitBuffer = input.bytes().collect();
        assert_eq2!(round_digits_at(&mut digits, keep), carry);
        assert_eq2!(std::str::from_utf8(&digits).unwrap(), expected);
    }
}
