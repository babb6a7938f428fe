/// Parses text that looks like a decimal number.
///
/// Accepted: optional surrounding whitespace, an optional sign, digits with an
/// optional fractional part (a leading `.` is allowed when digits follow it),
/// and an optional exponent. Spellings such as `inf` or `NaN` are rejected
/// even though `f64::from_str` would accept them.
///
/// ## Parameters
/// - `text`: The text to inspect.
///
/// ## Returns
/// - `Some(f64)`: The parsed number if the whole text is numeric.
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use qualex::util::num::parse_numeric;
///
/// assert_eq!(parse_numeric(" 42 "), Some(42.0));
/// assert_eq!(parse_numeric("-1.5e3"), Some(-1500.0));
/// assert_eq!(parse_numeric("12abc"), None);
/// assert_eq!(parse_numeric("inf"), None);
/// ```
#[must_use]
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !is_numeric(trimmed) {
        return None;
    }
    trimmed.parse().ok()
}

/// Returns `true` if `text` (already trimmed) has the shape of a decimal
/// number.
fn is_numeric(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let integer_digits = count_digits(&bytes[i..]);
    i += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        fraction_digits = count_digits(&bytes[i..]);
        i += fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exponent_digits = count_digits(&bytes[i..]);
        if exponent_digits == 0 {
            return false;
        }
        i += exponent_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Writes a number the way it is shown to users and compared as text.
///
/// Integral values print without a fractional part and negative zero prints
/// as `0`.
///
/// ## Example
/// ```
/// use qualex::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
