#[cfg(feature = "logging")]
use log::trace;
use tally_lexer::{EvaluationError, Operator, Token};

/// Evaluates a postfix token sequence with a single operand stack.
///
/// Binary operators pop the right operand first. `%` replaces the top of
/// the stack with a hundredth of it, whatever operator is pending, so
/// `50 10 % +` is `50.1`.
pub fn eval_postfix(tokens: &[Token]) -> Result<f64, EvaluationError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match *token {
            Token::Number(value) => stack.push(value),
            Token::Percent => {
                let a = stack.pop().ok_or(EvaluationError::BadPercentUsage)?;
                stack.push(a / 100.0);
            }
            Token::Operator(op) => {
                let (b, a) = match (stack.pop(), stack.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => return Err(EvaluationError::InsufficientOperands(op)),
                };
                stack.push(apply(op, a, b)?);
            }
            // the converter consumes every parenthesis
            Token::LeftParen | Token::RightParen => {
                return Err(EvaluationError::InvalidExpression)
            }
        }
    }

    #[cfg(feature = "logging")]
    trace!("operand stack after evaluation: {:?}", stack);
    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvaluationError::InvalidExpression),
    }
}

fn apply(op: Operator, a: f64, b: f64) -> Result<f64, EvaluationError> {
    if op == Operator::Div && b == 0.0 {
        return Err(EvaluationError::DivisionByZero);
    }
    Ok(op.apply(a, b))
}
