use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Plain decimal number with optional sign, fraction and exponent
    /// Examples: "12", "-0.5", ".25", "3.", "1e3", "+6.02E23"
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// Parse user input as a finite decimal number.
/// Returns None for anything else, including "inf", "NaN" and empty input.
pub fn parse_value(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if !NUMBER_PATTERN.is_match(trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_decimal_forms() {
        assert_eq!(parse_value("100"), Some(100.0));
        assert_eq!(parse_value(" -20.5 "), Some(-20.5));
        assert_eq!(parse_value(".25"), Some(0.25));
        assert_eq!(parse_value("3."), Some(3.0));
        assert_eq!(parse_value("1e3"), Some(1000.0));
        assert_eq!(parse_value("+6.5E-1"), Some(0.65));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("12 m"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("1e999"), None);
        assert_eq!(parse_value("."), None);
    }
}
