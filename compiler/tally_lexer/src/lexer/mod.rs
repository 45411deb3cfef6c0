//! Lexer for tally expressions using the 'logos' crate
//! Recognizes numbers, the four arithmetic operators, parentheses and `%`

use std::borrow::Cow;

#[cfg(feature = "logging")]
use log::trace;
use logos::Logos;

use crate::error::EvaluationError;
use crate::logos_token::{LexError, LogosToken};
use crate::token::{Operator, Token};

#[cfg(test)]
mod tests;

/// Display glyphs accepted in place of `*`, `/` and `-`.
const GLYPHS: &[char] = &['\u{00D7}', '\u{00F7}', '\u{2212}'];

/// Map the multiplication sign, division sign and minus sign glyphs to
/// their ASCII operators.
///
/// Borrows the input when it contains none of them.
pub fn normalize(expr: &str) -> Cow<'_, str> {
    if !expr.contains(GLYPHS) {
        return Cow::Borrowed(expr);
    }
    Cow::Owned(
        expr.chars()
            .map(|c| match c {
                '\u{00D7}' => '*',
                '\u{00F7}' => '/',
                '\u{2212}' => '-',
                other => other,
            })
            .collect(),
    )
}

/// Tokenize a whole expression, stopping at the first malformed input.
///
/// Glyphs are not normalized here; see [`normalize`].
pub fn tokenize(expr: &str) -> Result<Vec<Token>, EvaluationError> {
    let tokens = Lexer::new(expr).collect::<Result<Vec<_>, _>>()?;
    #[cfg(feature = "logging")]
    trace!("tokenized {:?} into {} tokens", expr, tokens.len());
    Ok(tokens)
}

/// tally expression lexer
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, LogosToken>,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given expression
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: LogosToken::lexer(source),
        }
    }

    /// Convert a LogosToken to our semantic Token type
    fn convert_token(logos_token: LogosToken) -> Token {
        match logos_token {
            LogosToken::Number(value) => Token::Number(value),
            LogosToken::Plus => Token::Operator(Operator::Add),
            LogosToken::Minus => Token::Operator(Operator::Sub),
            LogosToken::Star => Token::Operator(Operator::Mul),
            LogosToken::Slash => Token::Operator(Operator::Div),
            LogosToken::Percent => Token::Percent,
            LogosToken::LParen => Token::LeftParen,
            LogosToken::RParen => Token::RightParen,
        }
    }

    fn convert_error(&self, error: LexError) -> EvaluationError {
        match error {
            LexError::MalformedNumber => {
                EvaluationError::InvalidNumber(self.logos_lexer.slice().to_string())
            }
            LexError::UnrecognizedCharacter => {
                let start = self.logos_lexer.span().start;
                let ch = self.logos_lexer.source()[start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                EvaluationError::InvalidCharacter(ch)
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, EvaluationError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match self.logos_lexer.next()? {
            Ok(logos_token) => Ok(Self::convert_token(logos_token)),
            Err(error) => Err(self.convert_error(error)),
        };
        Some(token)
    }
}
