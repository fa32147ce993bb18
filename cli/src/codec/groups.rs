use crate::codec::error::CodecError;
use crate::codec::Representation;
use regex::Regex;

/// Render each UTF-16 code unit in `radix`, zero-padded to at least `width`
/// digits, joined by single spaces. Code units wider than `width` keep
/// every digit rather than being masked.
pub fn encode_groups(text: &str, width: usize, render: fn(u16) -> String) -> String {
    text.encode_utf16()
        .map(|unit| {
            let digits = render(unit);
            format!("{:0>width$}", digits, width = width)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on single spaces and turn every group back into one character.
/// Any group that fails `pattern` rejects the whole input; nothing partial
/// is returned. A lone group may be shortened, but once there is more than
/// one group each must be exactly `width` digits.
pub fn decode_groups(
    input: &str,
    pattern: &Regex,
    width: usize,
    radix: u32,
    representation: Representation,
) -> Result<String, CodecError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let multiple = input.contains(' ');
    let mut text = String::with_capacity(input.len() / 2);
    for (position, chunk) in input.split(' ').enumerate() {
        let invalid = || CodecError::InvalidInput {
            representation,
            chunk: chunk.to_string(),
            position,
        };

        if !pattern.is_match(chunk) || (multiple && chunk.len() != width) {
            tracing::debug!(%representation, position, chunk, "rejecting malformed group");
            return Err(invalid());
        }

        // Patterns cap groups at one byte, so every value is a valid char
        let code = u32::from_str_radix(chunk, radix).map_err(|_| invalid())?;
        let ch = char::from_u32(code).ok_or_else(invalid)?;
        text.push(ch);
    }

    Ok(text)
}
