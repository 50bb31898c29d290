use super::*;

#[test]
fn digits_only_strips_letters() {
    assert_eq!(digits_only("a1b2c3"), "123");
}

#[test]
fn digits_only_strips_separators_and_whitespace() {
    assert_eq!(digits_only("12,000"), "12000");
    assert_eq!(digits_only("010-1234-5678"), "01012345678");
    assert_eq!(digits_only(" 42 "), "42");
}

#[test]
fn digits_only_passes_digit_strings_through() {
    assert_eq!(digits_only("0123456789"), "0123456789");
}

#[test]
fn digits_only_empty_when_no_digits() {
    assert_eq!(digits_only("abc"), "");
    assert_eq!(digits_only(""), "");
}

#[test]
fn plate_accepts_two_or_three_leading_digits() {
    assert!(is_plate_number("12가3456"));
    assert!(is_plate_number("123가4567"));
}

#[test]
fn plate_rejects_wrong_shapes() {
    assert!(!is_plate_number(""));
    assert!(!is_plate_number("1234"));
    assert!(!is_plate_number("12AB3456"));
    assert!(!is_plate_number("1가3456"));
    assert!(!is_plate_number("12가345"));
    assert!(!is_plate_number("12가34567"));
    assert!(!is_plate_number("1234가5678"));
    assert!(!is_plate_number("12가34a6"));
}

#[test]
fn plate_requires_a_full_hangul_syllable() {
    assert!(is_plate_number("12힣3456"));
    // Jamo sits outside the syllable block and is not a valid class letter.
    assert!(!is_plate_number("12ㄱ3456"));
}
