//! Pure input-normalization helpers for form fields.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Keep only ASCII decimal digits from a raw input value.
///
/// Applied on every keystroke for the phone and mileage fields, so
/// separators and letters never reach stored state.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Check the Korean vehicle plate pattern: two or three digits, one
/// Hangul syllable, four digits (e.g. `12가3456`).
pub fn is_plate_number(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();
    if !(7..=8).contains(&len) {
        return false;
    }
    // Trailing block is always 4 digits, so the leading digit run is
    // whatever precedes the syllable.
    let lead = len - 5;
    chars[..lead].iter().all(char::is_ascii_digit)
        && is_hangul_syllable(chars[lead])
        && chars[lead + 1..].iter().all(char::is_ascii_digit)
}

/// Precomposed Hangul syllable block (U+AC00..=U+D7A3), the `[가-힣]`
/// class of the plate pattern. Jamo and other letters are excluded.
fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}
