//! Evaluation of tally arithmetic expressions.
//!
//! [`evaluate`] is the single entry point: it normalizes display glyphs,
//! tokenizes, converts to postfix and evaluates, returning the first error
//! any stage raises.

pub mod evaluator;

#[cfg(feature = "logging")]
use log::debug;
use tally_lexer::{normalize, tokenize};
use tally_parser::to_postfix;

pub use evaluator::eval_postfix;
pub use tally_lexer::{EvaluationError, Operator, Token};

/// Evaluate an infix expression such as `"(2+3)*4"` or `"50%"`.
///
/// An empty expression evaluates to `0` without running the pipeline.
pub fn evaluate(expr: &str) -> Result<f64, EvaluationError> {
    if expr.is_empty() {
        return Ok(0.0);
    }
    let normalized = normalize(expr);
    let tokens = tokenize(&normalized)?;
    let postfix = to_postfix(&tokens)?;
    let value = eval_postfix(&postfix)?;
    #[cfg(feature = "logging")]
    debug!("evaluated {:?} to {}", expr, value);
    Ok(value)
}

/// Like [`evaluate`], treating a missing expression as empty.
pub fn evaluate_opt(expr: Option<&str>) -> Result<f64, EvaluationError> {
    expr.map_or(Ok(0.0), evaluate)
}
