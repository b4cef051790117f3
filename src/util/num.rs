/// Converts the text of a number literal into a runtime value.
///
/// The lexer only produces runs of decimal digits, which always convert.
/// Literals beyond `2^53` round to the nearest representable double.
///
/// ## Parameters
/// - `text`: The literal text, such as `"42"`.
///
/// ## Returns
/// - `Some(f64)`: The converted value.
/// - `None`: If `text` is empty or contains anything but ASCII digits.
///
/// ## Example
/// ```
/// use pushkin::util::num::literal_to_f64;
///
/// assert_eq!(literal_to_f64("42"), Some(42.0));
/// assert_eq!(literal_to_f64("007"), Some(7.0));
/// assert_eq!(literal_to_f64("-1"), None);
/// assert_eq!(literal_to_f64("1.5"), None);
/// ```
#[must_use]
pub fn literal_to_f64(text: &str) -> Option<f64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

/// Formats a runtime value the way `print` emits it.
///
/// Integral values print without a decimal point and negative values with a
/// leading `-`. Negative zero prints as `0`.
///
/// ## Example
/// ```
/// use pushkin::util::num::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(-15.0), "-15");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.5), "0.5");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    value.to_string()
}
