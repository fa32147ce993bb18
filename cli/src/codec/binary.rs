use crate::codec::error::CodecError;
use crate::codec::groups::{decode_groups, encode_groups};
use crate::codec::Representation;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One byte written in base 2: 1 to 8 binary digits
    static ref BINARY_GROUP: Regex = Regex::new(r"^[01]{1,8}$").unwrap();
}

/// "A" -> "01000001"
pub fn text_to_binary(text: &str) -> String {
    encode_groups(text, 8, |unit| format!("{:b}", unit))
}

/// "01000001 01000010" -> "AB"
pub fn binary_to_text(binary: &str) -> Result<String, CodecError> {
    decode_groups(binary, &BINARY_GROUP, 8, 2, Representation::Binary)
}
