use crate::units::types::{Unit, UnitCategory};
use thiserror::Error;

/// Why a conversion produced no usable result.
/// None of these are fatal; the string-level API renders them as empty output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("no conversion from '{from}' to '{to}' in {category}")]
    NoConversionPath {
        category: UnitCategory,
        from: String,
        to: String,
    },

    #[error("invalid numeric input: {0:?}")]
    InvalidNumericInput(String),

    #[error("unknown unit category: {0:?}")]
    UnknownCategory(String),

    #[error("converting {value} from {from} to {to} does not give a finite number")]
    NonFiniteResult { value: f64, from: Unit, to: Unit },
}
