// Unit conversion over a fixed table of explicit directed pairs

pub mod engine;
pub mod error;
pub mod number;
pub mod table;
pub mod types;


pub use engine::{convert, convert_str, format_value, try_convert, DEFAULT_PRECISION};
pub use error::ConversionError;
pub use number::parse_value;
pub use types::{Unit, UnitCategory};
