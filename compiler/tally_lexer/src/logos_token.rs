//! Raw tokens produced by the logos-generated scanner.

use logos::Logos;

/// Failure reported by the raw lexer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    /// No token pattern matches at the current position
    #[default]
    UnrecognizedCharacter,
    /// A run of digits and dots that is not a finite number
    MalformedNumber,
}

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum LogosToken {
    // Greedy: a run with several dots is still one run, rejected in the callback
    /// Contiguous digits and decimal points
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),

    // --- Operators ---
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,

    // --- Delimiters ---
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

fn parse_number(lex: &mut logos::Lexer<LogosToken>) -> Result<f64, LexError> {
    let run = lex.slice();
    if run.matches('.').count() > 1 {
        return Err(LexError::MalformedNumber);
    }
    match run.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexError::MalformedNumber),
    }
}
