//! Result formatting
//!
//! Turns a computed `f64` into the exact text shown on the display.
//!
//! # Rules
//!
//! - Integral values have no fractional part: `10`, `-3`
//! - Other values are rounded half-up to at most `fraction_digits` places,
//!   then trailing zeros are trimmed: `2.5`, `0.66666667`
//! - Negative zero is shown as `0`
//! - Non-finite values have no text; the caller decides what to show
//!
//! Rounding works on the shortest round-trip decimal form of the value, so
//! `0.123456785` rounds to `0.12345679` even though its binary value is a
//! hair below the midpoint.

/// Fractional digits kept when no configuration overrides it
pub const DEFAULT_FRACTION_DIGITS: usize = 8;

/// Display text for a calculation that has no finite result
pub const ERROR_TEXT: &str = "Error";

/// Format a computed value for display.
///
/// Returns `None` for infinities and NaN.
pub fn format_result(value: f64, fraction_digits: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    // f64 Display never switches to exponent notation
    let magnitude = value.abs().to_string();
    let (int_part, frac_part) = magnitude
        .split_once('.')
        .unwrap_or((magnitude.as_str(), ""));

    let mut int_digits = int_part.as_bytes().to_vec();
    let mut frac_digits = frac_part.as_bytes().to_vec();

    if frac_digits.len() > fraction_digits {
        let round_up = frac_digits[fraction_digits] >= b'5';
        frac_digits.truncate(fraction_digits);
        if round_up && increment(&mut frac_digits) && increment(&mut int_digits) {
            int_digits.insert(0, b'1');
        }
    }

    while frac_digits.last() == Some(&b'0') {
        frac_digits.pop();
    }

    let is_zero = int_digits
        .iter()
        .chain(frac_digits.iter())
        .all(|&d| d == b'0');

    let mut text = String::with_capacity(int_digits.len() + frac_digits.len() + 2);
    if value.is_sign_negative() && !is_zero {
        text.push('-');
    }
    text.extend(int_digits.iter().map(|&d| d as char));
    if !frac_digits.is_empty() {
        text.push('.');
        text.extend(frac_digits.iter().map(|&d| d as char));
    }
    Some(text)
}

/// Parse an operand string as typed on the keypad.
///
/// Only an optional leading `-`, ASCII digits and a single `.` are accepted,
/// so strings like `inf` or `1e5` that `f64::from_str` would take are
/// rejected. At least one digit is required.
pub fn parse_operand(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let mut seen_digit = false;
    let mut seen_point = false;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return None,
        }
    }
    if !seen_digit {
        return None;
    }
    text.parse().ok()
}

/// Add one to a run of ASCII decimal digits. Returns the carry out.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}
