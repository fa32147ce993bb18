use crate::codec::error::CodecError;
use crate::codec::groups::{decode_groups, encode_groups};
use crate::codec::Representation;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One byte written in base 16, either case
    static ref HEX_GROUP: Regex = Regex::new(r"^[0-9a-fA-F]{1,2}$").unwrap();
}

/// "A" -> "41"
pub fn text_to_hex(text: &str) -> String {
    encode_groups(text, 2, |unit| format!("{:x}", unit))
}

/// "48 69" -> "Hi"
pub fn hex_to_text(hex: &str) -> Result<String, CodecError> {
    decode_groups(hex, &HEX_GROUP, 2, 16, Representation::Hex)
}
