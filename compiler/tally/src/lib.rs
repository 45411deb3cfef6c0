//! Calculator front end for the tally evaluator: keypad input shaping,
//! result formatting, persisted history and the interactive session.

pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod keypad;
pub mod repl;

pub use config::Config;
pub use error::TallyError;
pub use format::format_number;
pub use history::{History, HistoryEntry};
pub use keypad::{Key, Keypad};
pub use repl::ReplSession;
