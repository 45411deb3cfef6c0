//! tally lexical analyzer module
//!
//! This module turns a calculator expression into the flat token sequence
//! consumed by the shunting-yard converter in `tally_parser`. It also owns
//! the error taxonomy shared by every stage of the evaluation pipeline.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::EvaluationError;
pub use lexer::{normalize, tokenize, Lexer};
pub use logos_token::{LexError, LogosToken};
pub use token::{Operator, Token};
