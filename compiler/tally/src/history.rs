//! Calculation history, newest first, persisted as JSON.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::TallyError;

/// Most entries a history ever keeps.
pub const MAX_ENTRIES: usize = 50;

/// One completed calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(MAX_ENTRIES)
    }

    /// A history keeping at most `limit` entries, capped at [`MAX_ENTRIES`].
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.min(MAX_ENTRIES),
        }
    }

    /// Record an entry as the newest, dropping the oldest past the limit.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by position, `0` being the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// One `  n  expression = result` line per entry, numbered from 1.
    pub fn numbered_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:>3}  {} = {}", i + 1, h.expression, h.result))
            .collect()
    }

    /// Load a history file.
    ///
    /// A missing or unreadable file yields an empty history; the calculator
    /// keeps working without it.
    pub fn load(path: &Path, limit: usize) -> Self {
        let mut history = Self::with_limit(limit);
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no history at {}", path.display());
                return history;
            }
            Err(e) => {
                warn!("ignoring unreadable history {}: {e}", path.display());
                return history;
            }
        };
        match serde_json::from_str::<Vec<HistoryEntry>>(&text) {
            Ok(mut entries) => {
                entries.truncate(history.limit);
                history.entries = entries;
            }
            Err(e) => warn!("ignoring corrupt history {}: {e}", path.display()),
        }
        history
    }

    pub fn save(&self, path: &Path) -> Result<(), TallyError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json).map_err(|e| TallyError::io(path, e))?;
        debug!("saved {} history entries to {}", self.len(), path.display());
        Ok(())
    }
}
