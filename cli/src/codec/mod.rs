// Text <-> binary/hex byte group transforms

pub mod binary;
pub mod error;
pub mod groups;
pub mod hex;

#[cfg(test)]
mod tests;

pub use binary::{binary_to_text, text_to_binary};
pub use error::CodecError;
pub use hex::{hex_to_text, text_to_hex};

use crate::config::Limits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Plain text, one character per code unit
    Text,
    /// Space-separated 8-digit base-2 groups
    Binary,
    /// Space-separated 2-digit base-16 groups
    Hex,
}

impl Representation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::Text => "text",
            Representation::Binary => "binary",
            Representation::Hex => "hex",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Representation::Text),
            "binary" | "bin" => Ok(Representation::Binary),
            "hex" | "hexadecimal" => Ok(Representation::Hex),
            other => Err(format!("Unknown representation: {}", other)),
        }
    }
}

/// Routes input between any two representations under an input size limit
pub struct Codec {
    limits: Limits,
}

impl Codec {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn convert(
        &self,
        from: Representation,
        to: Representation,
        input: &str,
    ) -> Result<String, CodecError> {
        self.limits.check(input)?;

        // Same-representation routes are decoded and re-encoded too
        let text = match from {
            Representation::Text => input.to_string(),
            Representation::Binary => binary_to_text(input)?,
            Representation::Hex => hex_to_text(input)?,
        };

        Ok(match to {
            Representation::Text => text,
            Representation::Binary => text_to_binary(&text),
            Representation::Hex => text_to_hex(&text),
        })
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}
