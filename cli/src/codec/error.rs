use crate::codec::Representation;
use crate::config::InputTooLarge;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A group failed its pattern; the whole input is rejected
    #[error("invalid {representation} input: group {position} ({chunk:?}) is malformed")]
    InvalidInput {
        representation: Representation,
        chunk: String,
        position: usize,
    },

    #[error(transparent)]
    InputTooLarge(#[from] InputTooLarge),
}

impl CodecError {
    /// Message shown to the person using the tool
    pub fn user_message(&self) -> String {
        match self {
            CodecError::InvalidInput {
                representation: Representation::Binary,
                ..
            } => "Invalid binary input. Please use space-separated 8-bit binary values.".to_string(),
            CodecError::InvalidInput {
                representation: Representation::Hex,
                ..
            } => "Invalid hexadecimal input. Please use space-separated 2-digit hex values."
                .to_string(),
            CodecError::InvalidInput { .. } => "Invalid input.".to_string(),
            CodecError::InputTooLarge(e) => {
                format!("Input is too large. The limit is {} bytes.", e.max)
            }
        }
    }
}
