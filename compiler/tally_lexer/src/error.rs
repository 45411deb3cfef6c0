//! Errors raised by the evaluation pipeline.

use thiserror::Error;

use crate::token::Operator;

/// Every way evaluating an expression can fail.
///
/// The first error raised by any stage aborts the whole evaluation and is
/// handed back to the caller as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// A character outside digits, `.`, `+-*/`, parentheses and `%`
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    /// A numeric run that is not a finite number, e.g. `2..3`
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Unbalanced parentheses in either direction
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// A binary operator reached with fewer than two values on the stack
    #[error("insufficient operands for '{0}'")]
    InsufficientOperands(Operator),

    /// `%` reached with nothing on the stack
    #[error("percent sign without a value")]
    BadPercentUsage,

    /// The divisor of `/` is exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// Evaluation did not end with exactly one value
    #[error("invalid expression")]
    InvalidExpression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        assert_eq!(
            EvaluationError::InvalidCharacter('x').to_string(),
            "invalid character 'x'"
        );
        assert_eq!(
            EvaluationError::InvalidNumber("2..3".to_string()).to_string(),
            "invalid number '2..3'"
        );
        assert_eq!(
            EvaluationError::InsufficientOperands(Operator::Div).to_string(),
            "insufficient operands for '/'"
        );
    }
}
