//! Expression entry with the calculator's input-shaping rules.
//!
//! The evaluator trusts its input to be pre-shaped: no two binary operators
//! in a row, an explicit `*` before a `(` that follows a value, and `%` only
//! after a value. [`Keypad`] is where those rules live.

use log::debug;
use tally_eval::{evaluate, Operator};

use crate::error::TallyError;
use crate::format::{format_number, ERROR_TEXT};
use crate::history::{History, HistoryEntry};

/// A key that appends to the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit, `0..=9`
    Digit(u8),
    Dot,
    Operator(Operator),
    LeftParen,
    RightParen,
}

/// The expression being built, one key at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    expression: String,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// What the expression line shows: `0` when nothing was typed yet.
    pub fn display(&self) -> &str {
        if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }

    pub fn press(&mut self, key: Key) {
        let last = self.expression.chars().last();
        match key {
            Key::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.expression.push(c);
                }
            }
            Key::Dot => self.expression.push('.'),
            Key::Operator(op) => match last {
                // only a leading unary minus may start an expression
                None => {
                    if op == Operator::Sub {
                        self.expression.push('-');
                    }
                }
                Some(c) if Operator::from_char(c).is_some() => {
                    self.expression.pop();
                    self.expression.push(op.symbol());
                }
                Some(_) => self.expression.push(op.symbol()),
            },
            Key::LeftParen => {
                if last.is_some_and(ends_value) {
                    self.expression.push('*');
                }
                self.expression.push('(');
            }
            Key::RightParen => self.expression.push(')'),
        }
    }

    /// Append `%`, only directly after a digit or `)`.
    pub fn percent(&mut self) {
        if self.expression.chars().last().is_some_and(ends_value) {
            self.expression.push('%');
        }
    }

    pub fn backspace(&mut self) {
        self.expression.pop();
    }

    pub fn clear(&mut self) {
        self.expression.clear();
    }

    /// Feed one typed character. Returns `false` for characters that are not
    /// calculator keys, which leave the expression unchanged.
    pub fn press_char(&mut self, ch: char) -> bool {
        match ch {
            '0'..='9' => self.press(Key::Digit(ch as u8 - b'0')),
            '.' => self.press(Key::Dot),
            '(' => self.press(Key::LeftParen),
            ')' => self.press(Key::RightParen),
            '%' => self.percent(),
            '\u{00D7}' => self.press(Key::Operator(Operator::Mul)),
            '\u{00F7}' => self.press(Key::Operator(Operator::Div)),
            '\u{2212}' => self.press(Key::Operator(Operator::Sub)),
            _ => match Operator::from_char(ch) {
                Some(op) => self.press(Key::Operator(op)),
                None => return false,
            },
        }
        true
    }

    /// Live result for the current expression.
    pub fn preview(&self) -> String {
        match evaluate(&self.expression) {
            Ok(value) => format_number(value),
            Err(_) => ERROR_TEXT.to_string(),
        }
    }

    /// Evaluate the expression, record it in `history` and replace the
    /// expression with the formatted result.
    ///
    /// On failure the expression and history are left as they were.
    pub fn equals(&mut self, history: &mut History) -> Result<String, TallyError> {
        let expression = self.display().to_string();
        let value = evaluate(&expression)?;
        if !value.is_finite() {
            return Err(TallyError::NonFiniteResult);
        }
        let result = format_number(value);
        debug!("{expression} = {result}");
        history.push(HistoryEntry::new(expression, result.clone()));
        self.expression = result.clone();
        Ok(result)
    }

    /// Continue from a previous result.
    pub fn recall(&mut self, entry: &HistoryEntry) {
        self.expression = entry.result.clone();
    }
}

fn ends_value(c: char) -> bool {
    c.is_ascii_digit() || c == ')'
}
