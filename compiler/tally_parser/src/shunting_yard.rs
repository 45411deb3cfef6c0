// Infix to postfix conversion for tally expressions (shunting-yard)

#[cfg(feature = "logging")]
use log::trace;
use tally_lexer::{EvaluationError, Operator, Token};

/// Entry on the operator stack. Closing parentheses are never pushed.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Operator(Operator),
    LeftParen,
}

/// Rewrites an infix token sequence into postfix (RPN) order.
///
/// Operators of equal precedence are left-associative. A `-` that does not
/// follow a number, `)` or `%` is unary and is desugared by emitting a
/// synthetic `0` in front of it, so the evaluator only ever sees binary
/// operators. `%` is copied to the output where it was scanned.
///
/// Fails with [`EvaluationError::MismatchedParentheses`] when nesting is
/// unbalanced in either direction.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvaluationError> {
    let mut output = Vec::with_capacity(tokens.len() + 1);
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut previous: Option<&Token> = None;

    for token in tokens {
        match *token {
            Token::Number(_) | Token::Percent => output.push(*token),
            Token::Operator(op) => {
                if op == Operator::Sub && !previous.is_some_and(Token::ends_operand) {
                    output.push(Token::Number(0.0));
                }
                while let Some(&StackEntry::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(StackEntry::Operator(op));
            }
            Token::LeftParen => stack.push(StackEntry::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(top)) => output.push(Token::Operator(top)),
                    Some(StackEntry::LeftParen) => break,
                    None => return Err(EvaluationError::MismatchedParentheses),
                }
            },
        }
        previous = Some(token);
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(Token::Operator(op)),
            StackEntry::LeftParen => return Err(EvaluationError::MismatchedParentheses),
        }
    }

    #[cfg(feature = "logging")]
    trace!("postfix: {}", render(&output));
    Ok(output)
}

#[cfg(any(feature = "logging", test))]
fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
