use std::path::PathBuf;

use log::{debug, warn};

use crate::config::Config;
use crate::history::History;
use crate::keypad::Keypad;

/// State of an interactive session.
///
/// Each input line is typed into the keypad key by key and then evaluated,
/// so a line starting with an operator continues from the previous result.
/// Lines starting with `:` are session commands.
pub struct ReplSession {
    keypad: Keypad,
    history: History,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl ReplSession {
    /// A session that does not persist its history.
    pub fn new() -> Self {
        Self {
            keypad: Keypad::new(),
            history: History::new(),
            history_path: None,
            prompt: Config::default().prompt,
        }
    }

    /// A session backed by the history file named in `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            keypad: Keypad::new(),
            history: History::load(&config.history_path, config.history_limit),
            history_path: Some(config.history_path.clone()),
            prompt: config.prompt.clone(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Handle one input line. Returns the lines to print and whether the
    /// session should end.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }

        let mut out = Vec::new();
        let ignored: String = trimmed
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '=')
            .filter(|ch| !self.keypad.press_char(*ch))
            .collect();
        if !ignored.is_empty() {
            out.push(format!("note: ignored {ignored:?}"));
        }

        match self.keypad.equals(&mut self.history) {
            Ok(result) => {
                out.push(result);
                if let Err(e) = self.persist() {
                    out.push(format!("error: {e}"));
                }
            }
            Err(e) => {
                debug!("evaluation of {:?} failed: {e}", self.keypad.expression());
                out.push(format!("error: {e}"));
            }
        }
        (out, false)
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).unwrap_or_default();

        match command {
            ":help" => (
                vec![
                    "commands: :help, :quit, :history, :clear-history, :recall <n>, :clear, :back, :show"
                        .to_string(),
                    "note: each line is typed onto the current expression and evaluated".to_string(),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":history" => (self.render_history(), false),
            ":clear-history" => {
                self.history.clear();
                match self.persist() {
                    Ok(()) => (vec!["history cleared".to_string()], false),
                    Err(e) => (vec![format!("error: {e}")], false),
                }
            }
            ":recall" => {
                let entry = arg
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| self.history.get(i))
                    .cloned();
                match entry {
                    Some(entry) => {
                        self.keypad.recall(&entry);
                        (vec![self.keypad.display().to_string()], false)
                    }
                    None => (vec!["error: usage: :recall <n>, see :history".to_string()], false),
                }
            }
            ":clear" => {
                self.keypad.clear();
                (vec![self.keypad.display().to_string()], false)
            }
            ":back" => {
                self.keypad.backspace();
                (
                    vec![format!("{}  = {}", self.keypad.display(), self.keypad.preview())],
                    false,
                )
            }
            ":show" => (
                vec![format!("{}  = {}", self.keypad.display(), self.keypad.preview())],
                false,
            ),
            other => (vec![format!("error: unknown command '{other}'")], false),
        }
    }

    fn render_history(&self) -> Vec<String> {
        if self.history.is_empty() {
            return vec!["no history yet".to_string()];
        }
        self.history.numbered_lines()
    }

    fn persist(&self) -> Result<(), crate::error::TallyError> {
        match &self.history_path {
            Some(path) => self.history.save(path).inspect_err(|e| warn!("{e}")),
            None => Ok(()),
        }
    }
}

impl Default for ReplSession {
    fn default() -> Self {
        Self::new()
    }
}
