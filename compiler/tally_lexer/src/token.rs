//! Semantic tokens and the four arithmetic operators.

use std::fmt;

/// A binary arithmetic operator.
///
/// Every operator is left-associative. `+` and `-` bind with precedence 1,
/// `*` and `/` with precedence 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Map an ASCII operator character to its operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// The ASCII symbol this operator is written with.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength used by the shunting-yard converter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Plain IEEE arithmetic on `a op b`.
    ///
    /// A zero divisor is not checked here; callers that must reject it do
    /// so before applying [`Operator::Div`].
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single lexical unit of an arithmetic expression.
///
/// Tokens carry no position information; errors describe the offending
/// text instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A finite numeric literal
    Number(f64),
    /// One of `+ - * /`
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Postfix `%`, divides the value before it by 100
    Percent,
}

impl Token {
    /// Whether a value is complete once this token has been read.
    ///
    /// A `-` following such a token is binary; after anything else it is
    /// unary.
    pub fn ends_operand(&self) -> bool {
        match self {
            Token::Number(_) | Token::RightParen | Token::Percent => true,
            Token::Operator(_) | Token::LeftParen => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Percent => write!(f, "%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_round_trips_through_its_symbol() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_char('%'), None);
    }

    #[test]
    fn test_multiplicative_operators_bind_tighter() {
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Sub.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Mul.apply(2.0, 3.0), 6.0);
        assert_eq!(Operator::Div.apply(3.0, 2.0), 1.5);
        // unchecked
        assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_ends_operand() {
        assert!(Token::Number(1.0).ends_operand());
        assert!(Token::RightParen.ends_operand());
        assert!(Token::Percent.ends_operand());
        assert!(!Token::LeftParen.ends_operand());
        assert!(!Token::Operator(Operator::Mul).ends_operand());
    }
}
