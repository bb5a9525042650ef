//! Chinese Magnitude Formatter
//!
//! Renders an amount as 億 (1e8) / 萬 (1e4) / remainder, e.g.
//! `8512952725` -> `85億1295萬2725`.

const YI: f64 = 100_000_000.0;
const WAN: f64 = 10_000.0;

/// Format a non-negative amount with 億 / 萬 units.
///
/// Fractions are truncated. A `0萬` placeholder is emitted when 億 is present,
/// the 萬 slot is empty and a remainder follows. Zero, negative and NaN input
/// yields an empty string.
pub fn format_chinese_money(value: f64) -> String {
    if !(value > 0.0) {
        return String::new();
    }

    let yi = (value / YI).floor();
    let after_yi = value % YI;
    let wan = (after_yi / WAN).floor();
    let remainder = (after_yi % WAN).floor();

    let mut result = String::new();
    if yi > 0.0 {
        result.push_str(&format!("{}億", yi));
    }
    if wan > 0.0 {
        result.push_str(&format!("{}萬", wan));
    } else if yi > 0.0 && remainder > 0.0 {
        result.push_str("0萬");
    }
    if remainder > 0.0 {
        result.push_str(&format!("{}", remainder));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_units() {
        assert_eq!(format_chinese_money(8_512_952_725.0), "85億1295萬2725");
    }

    #[test]
    fn test_zero_wan_placeholder() {
        assert_eq!(format_chinese_money(100_000_001.0), "1億0萬1");
    }

    #[test]
    fn test_exact_units() {
        assert_eq!(format_chinese_money(100_000_000.0), "1億");
        assert_eq!(format_chinese_money(50_000.0), "5萬");
        assert_eq!(format_chinese_money(5_000_000.0), "500萬");
        assert_eq!(format_chinese_money(300_050_000.0), "3億5萬");
    }

    #[test]
    fn test_small_and_fractional() {
        assert_eq!(format_chinese_money(2725.0), "2725");
        assert_eq!(format_chinese_money(12_345.99), "1萬2345");
        assert_eq!(format_chinese_money(0.5), "");
    }

    #[test]
    fn test_empty_cases() {
        assert_eq!(format_chinese_money(0.0), "");
        assert_eq!(format_chinese_money(-5.0), "");
        assert_eq!(format_chinese_money(f64::NAN), "");
    }
}
