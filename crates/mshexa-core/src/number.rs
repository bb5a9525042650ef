//! Number Formatting
//!
//! Lenient parsing of user-typed numbers and thousands grouping for display.
//! Parsing never fails: anything unreadable is treated as 0.

/// Parse a user-typed number, ignoring `,` grouping separators.
///
/// Reads the longest numeric prefix (`"12abc"` is 12); empty or non-numeric
/// input yields 0.
pub fn parse_number(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    parse_float_prefix(&cleaned).unwrap_or(0.0)
}

/// Parse the rate field. Grouping separators are not accepted here.
pub fn parse_rate(text: &str) -> f64 {
    parse_float_prefix(text).unwrap_or(0.0)
}

/// Render a number with `,` every three integer digits.
///
/// Zero and NaN render as an empty string. The fractional part is kept as is.
pub fn format_number(value: f64) -> String {
    if value == 0.0 || value.is_nan() {
        return String::new();
    }
    group_digits(&value.to_string())
}

/// Insert grouping separators into the integer part of an already formatted
/// number string (`"1234.50"` -> `"1,234.50"`).
pub fn group_digits(text: &str) -> String {
    let (integer, fraction) = match text.find('.') {
        Some(dot) => (&text[..dot], Some(&text[dot + 1..])),
        None => (text, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut out = String::with_capacity(text.len() + digits.len() / 3);
    out.push_str(sign);
    let len = digits.chars().count();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 && ch.is_ascii_digit() {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Fixed-point text with `places` decimals. Exact ties round away from zero
/// (`0.125` at 2 places is `"0.13"`); everything else rounds to nearest.
pub fn to_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() || !is_exact_tie(value, places) {
        return format!("{:.*}", places, value);
    }
    let scale = 10f64.powi(places as i32);
    // Exact for ties: the scaled value is k + 0.5
    let rounded = ((value.abs() * scale).floor() + 1.0) / scale;
    format!("{:.*}", places, rounded.copysign(value))
}

/// Round to a fixed number of decimal places, dropping trailing zeros
/// (`41.15223` at 4 places is `41.1522`).
pub fn round_to(value: f64, places: usize) -> f64 {
    to_fixed(value, places).parse().unwrap_or(value)
}

/// Enough fraction digits to print any `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// True when `value` lies exactly halfway between two `places`-decimal numbers
fn is_exact_tie(value: f64, places: usize) -> bool {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    match exact.trim_end_matches('0').split_once('.') {
        Some((_, fraction)) => fraction.len() == places + 1 && fraction.ends_with('5'),
        None => false,
    }
}

/// Parse a leading integer: optional sign then decimal digits, anything after
/// is ignored (`"120 souls"` is 120). `None` when no digit leads the text.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    trimmed[..end].parse().ok()
}

/// Longest prefix of `text` (after leading whitespace) that reads as a float.
fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            mantissa_digits += 1;
        }
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}
