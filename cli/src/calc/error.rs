use crate::config::InputTooLarge;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Expression cannot be empty")]
    Empty,

    #[error("Invalid character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Function '{name}' takes {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: &'static str,
        found: usize,
    },

    #[error("Expression is nested more than {max} levels deep")]
    TooDeep { max: usize },

    #[error("Graph range needs more than {max} samples; widen the step or narrow the range")]
    TooManySamples { max: usize },

    #[error(transparent)]
    InputTooLarge(#[from] InputTooLarge),
}
