use crate::calc::format_number;
use crate::units::error::ConversionError;
use crate::units::number::parse_value;
use crate::units::table;
use crate::units::types::{Unit, UnitCategory};

/// Decimal digits used for display unless configured otherwise
pub const DEFAULT_PRECISION: usize = 6;

/// Convert a value between two units of a category.
///
/// Identity conversions always succeed. Any other pair must be tabled
/// explicitly for `category`; there is no chaining through other units.
pub fn try_convert(
    category: UnitCategory,
    from: Unit,
    to: Unit,
    value: f64,
) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(value);
    }

    let conversion = table::lookup(category, from, to).ok_or_else(|| {
        ConversionError::NoConversionPath {
            category,
            from: from.to_string(),
            to: to.to_string(),
        }
    })?;

    let converted = conversion(value);
    tracing::trace!(%category, %from, %to, value, converted, "applied conversion");

    if !converted.is_finite() {
        return Err(ConversionError::NonFiniteResult { value, from, to });
    }

    Ok(converted)
}

/// Convert from raw user input, returning the display string.
///
/// Unit names are matched literally: equal names are an identity
/// conversion even when the name is not a known unit. Identity results
/// keep every digit of the input value; `precision` only applies to
/// tabled conversions.
pub fn convert_str(
    category: &str,
    from: &str,
    to: &str,
    value: &str,
    precision: usize,
) -> Result<String, ConversionError> {
    let category: UnitCategory = category
        .parse()
        .map_err(ConversionError::UnknownCategory)?;

    let value =
        parse_value(value).ok_or_else(|| ConversionError::InvalidNumericInput(value.to_string()))?;

    if from == to {
        return Ok(format_number(value));
    }

    let no_path = || ConversionError::NoConversionPath {
        category,
        from: from.to_string(),
        to: to.to_string(),
    };
    let from_unit: Unit = from.parse().map_err(|_| no_path())?;
    let to_unit: Unit = to.parse().map_err(|_| no_path())?;

    try_convert(category, from_unit, to_unit, value).map(|v| format_value(v, precision))
}

/// Convert from raw user input at the default precision.
/// Every failure becomes the empty string.
pub fn convert(category: &str, from: &str, to: &str, value: &str) -> String {
    match convert_str(category, from, to, value, DEFAULT_PRECISION) {
        Ok(result) => result,
        Err(e) => {
            tracing::debug!(error = %e, "conversion produced no result");
            String::new()
        }
    }
}

/// Format with a fixed number of decimals, then drop trailing zeros and
/// a dangling decimal point: 1.000000 -> "1", 1.500000 -> "1.5".
pub fn format_value(value: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, value);

    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_strips_zeros() {
        assert_eq!(format_value(1.0, 6), "1");
        assert_eq!(format_value(1.5, 6), "1.5");
        assert_eq!(format_value(100.0, 6), "100");
        assert_eq!(format_value(0.0, 6), "0");
        assert_eq!(format_value(0.1234567, 6), "0.123457");
        assert_eq!(format_value(-0.0000001, 6), "0");
        assert_eq!(format_value(2.25, 0), "2");
    }

    #[test]
    fn test_identity_ignores_table() {
        assert_eq!(
            try_convert(UnitCategory::Length, Unit::Mile, Unit::Mile, 7.25),
            Ok(7.25)
        );
    }

    #[test]
    fn test_missing_edge_is_no_path() {
        let err = try_convert(UnitCategory::Length, Unit::Mile, Unit::Foot, 1.0).unwrap_err();
        assert!(matches!(err, ConversionError::NoConversionPath { .. }));
    }

    #[test]
    fn test_overflow_is_not_a_result() {
        let err = try_convert(UnitCategory::Digital, Unit::Gigabyte, Unit::Megabyte, f64::MAX)
            .unwrap_err();
        assert!(matches!(err, ConversionError::NonFiniteResult { .. }));
    }

    #[test]
    fn test_convert_str_errors() {
        assert!(matches!(
            convert_str("area", "meter", "meter", "1", 6),
            Err(ConversionError::UnknownCategory(_))
        ));
        assert!(matches!(
            convert_str("length", "meter", "kilometer", "ten", 6),
            Err(ConversionError::InvalidNumericInput(_))
        ));
        assert!(matches!(
            convert_str("length", "meter", "furlong", "1", 6),
            Err(ConversionError::NoConversionPath { .. })
        ));
    }

    #[test]
    fn test_identity_keeps_full_value() {
        assert_eq!(convert("length", "meter", "meter", "0.1234567"), "0.1234567");
        assert_eq!(convert("time", "day", "day", " 1e3 "), "1000");
        assert_eq!(convert("weight", "gram", "gram", "-0"), "0");
        assert_eq!(
            convert_str("length", "meter", "meter", "2.123456789", 2).unwrap(),
            "2.123456789"
        );
        assert_eq!(convert("length", "meter", "kilometer", "0.1234567"), "0.000123");
    }

    #[test]
    fn test_invalid_number_short_circuits_identity() {
        assert_eq!(convert("length", "meter", "meter", ""), "");
    }
}
