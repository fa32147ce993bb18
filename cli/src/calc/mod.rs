// Calculator: expression evaluation and graph sampling

pub mod error;
pub mod eval;
pub mod graph;
pub mod lexer;
pub mod parser;

pub use error::CalcError;
pub use eval::format_number;
pub use graph::{sample_graph, Point};
pub use parser::{parse_expression, Expr};

use crate::config::Limits;

/// Evaluate a constant expression such as "2 * (3 + 4)"
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    let result = parse_expression(expression)?.eval(None);
    if let Err(e) = &result {
        tracing::debug!(expression, error = %e, "evaluation failed");
    }
    result
}

/// Same as `evaluate`, rejecting expressions over the input limit first
pub fn evaluate_within(expression: &str, limits: &Limits) -> Result<f64, CalcError> {
    limits.check(expression)?;
    evaluate(expression)
}
