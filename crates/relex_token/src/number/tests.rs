use pretty_assertions::assert_eq;

use super::*;

// === Base selection ===

#[test]
fn each_base_flag_maps_to_its_value() {
    assert_eq!(NumberPrefixFlags::BASE_2.base(), 2);
    assert_eq!(NumberPrefixFlags::BASE_4.base(), 4);
    assert_eq!(NumberPrefixFlags::BASE_8.base(), 8);
    assert_eq!(NumberPrefixFlags::BASE_10.base(), 10);
    assert_eq!(NumberPrefixFlags::BASE_12.base(), 12);
    assert_eq!(NumberPrefixFlags::BASE_16.base(), 16);
}

#[test]
fn unset_base_defaults_to_ten() {
    assert_eq!(NumberPrefixFlags::empty().base(), 10);
    assert_eq!(NumberPrefixFlags::EMPTY_DIGITS_OK.base(), 10);
}

#[test]
fn base_flag_survives_other_flags() {
    let flags = NumberPrefixFlags::BASE_16 | NumberPrefixFlags::EMPTY_DIGITS_OK;
    assert_eq!(flags.base(), 16);
}

// === Digit requirement ===

#[test]
fn requires_digits_unless_empty_ok() {
    assert!(NumberPrefixFlags::BASE_16.requires_digits());
    assert!(!(NumberPrefixFlags::BASE_16 | NumberPrefixFlags::EMPTY_DIGITS_OK).requires_digits());
}

// === is_digit_allowed ===

#[test]
fn decimal_digits_in_base_ten() {
    for symbol in '0'..='9' {
        assert!(is_digit_allowed(symbol, 10), "{symbol} should pass base 10");
    }
    assert!(!is_digit_allowed('a', 10));
    assert!(!is_digit_allowed('F', 10));
}

#[test]
fn hex_digits_in_base_sixteen() {
    assert!(is_digit_allowed('F', 16));
    assert!(is_digit_allowed('f', 16));
    assert!(is_digit_allowed('a', 16));
    assert!(is_digit_allowed('9', 16));
    assert!(!is_digit_allowed('g', 16));
    assert!(!is_digit_allowed('G', 16));
}

#[test]
fn binary_rejects_anything_past_one() {
    assert!(is_digit_allowed('0', 2));
    assert!(is_digit_allowed('1', 2));
    assert!(!is_digit_allowed('2', 2));
}

#[test]
fn base_twelve_admits_a_and_b_only() {
    assert!(is_digit_allowed('a', 12));
    assert!(is_digit_allowed('B', 12));
    assert!(!is_digit_allowed('c', 12));
}

#[test]
fn non_digits_never_pass() {
    assert!(!is_digit_allowed('_', 16));
    assert!(!is_digit_allowed(' ', 10));
    assert!(!is_digit_allowed('<', 16));
}

// === base_or_default ===

#[test]
fn explicit_base_wins_when_positive() {
    assert_eq!(base_or_default(16, 10), 16);
    assert_eq!(base_or_default(2, 10), 2);
}

#[test]
fn zero_explicit_falls_back_to_default() {
    assert_eq!(base_or_default(0, 10), 10);
    assert_eq!(base_or_default(0, 8), 8);
}
