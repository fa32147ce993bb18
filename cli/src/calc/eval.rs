use crate::calc::error::CalcError;
use crate::calc::parser::{BinaryOp, Expr};
use std::f64::consts::{E, PI};

/// Name of the free variable when plotting `f(x)`
pub const GRAPH_VARIABLE: &str = "x";

impl Expr {
    /// Evaluate with an optional binding for the graph variable.
    /// Domain errors follow IEEE rules (NaN/inf) rather than failing.
    pub fn eval(&self, x: Option<f64>) -> Result<f64, CalcError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Variable(name) => lookup_variable(name, x),
            Expr::Neg(inner) => Ok(-inner.eval(x)?),
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.eval(x)?;
                let b = rhs.eval(x)?;
                Ok(apply_binary(*op, a, b))
            }
            Expr::Call(name, args) => {
                let values = args
                    .iter()
                    .map(|arg| arg.eval(x))
                    .collect::<Result<Vec<_>, _>>()?;
                call_function(name, &values)
            }
        }
    }
}

fn lookup_variable(name: &str, x: Option<f64>) -> Result<f64, CalcError> {
    match (name, x) {
        (GRAPH_VARIABLE, Some(value)) => Ok(value),
        ("pi" | "PI", _) => Ok(PI),
        ("e" | "E", _) => Ok(E),
        _ => Err(CalcError::UnknownIdentifier(name.to_string())),
    }
}

fn apply_binary(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        // Floored: result takes the sign of the divisor
        BinaryOp::Mod => {
            if b == 0.0 {
                a
            } else {
                a - b * (a / b).floor()
            }
        }
        BinaryOp::Pow => a.powf(b),
    }
}

fn call_function(name: &str, args: &[f64]) -> Result<f64, CalcError> {
    let unary: Option<fn(f64) -> f64> = match name {
        "sin" => Some(f64::sin),
        "cos" => Some(f64::cos),
        "tan" => Some(f64::tan),
        "asin" => Some(f64::asin),
        "acos" => Some(f64::acos),
        "atan" => Some(f64::atan),
        "sqrt" => Some(f64::sqrt),
        "abs" => Some(f64::abs),
        "exp" => Some(f64::exp),
        "ln" => Some(f64::ln),
        "log10" => Some(f64::log10),
        "log2" => Some(f64::log2),
        "floor" => Some(f64::floor),
        "ceil" => Some(f64::ceil),
        "round" => Some(f64::round),
        _ => None,
    };

    if let Some(f) = unary {
        return match args {
            [v] => Ok(f(*v)),
            _ => Err(arity(name, "1", args.len())),
        };
    }

    match name {
        // log(x) is natural, log(x, base) picks the base
        "log" => match args {
            [v] => Ok(v.ln()),
            [v, base] => Ok(v.ln() / base.ln()),
            _ => Err(arity(name, "1 or 2", args.len())),
        },
        "pow" => match args {
            [a, b] => Ok(a.powf(*b)),
            _ => Err(arity(name, "2", args.len())),
        },
        "min" | "max" if args.is_empty() => Err(arity(name, "at least 1", 0)),
        "min" => Ok(args.iter().copied().fold(f64::INFINITY, f64::min)),
        "max" => Ok(args.iter().copied().fold(f64::NEG_INFINITY, f64::max)),
        _ => Err(CalcError::UnknownFunction(name.to_string())),
    }
}

fn arity(name: &str, expected: &'static str, found: usize) -> CalcError {
    CalcError::Arity {
        name: name.to_string(),
        expected,
        found,
    }
}

/// Shortest decimal that reads back to the same value
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
