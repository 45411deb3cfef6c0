use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TallyError;
use crate::history::MAX_ENTRIES;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tally.toml";

/// Environment variable overriding the history location.
pub const HISTORY_ENV: &str = "TALLY_HISTORY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub history_path: PathBuf,
    pub history_limit: usize,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(".tally_history.json"),
            history_limit: MAX_ENTRIES,
            prompt: "tally> ".to_string(),
        }
    }
}

impl Config {
    /// Read a config file; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, TallyError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(parse_config(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(TallyError::io(path, e)),
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = parse_config("prompt = \"= \"\nhistory_limit = 10\n").unwrap();
        assert_eq!(config.prompt, "= ");
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.history_path, Config::default().history_path);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(parse_config("history_limit = \"lots\"").is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "prompt = ").unwrap();
        assert!(matches!(Config::load(&path), Err(TallyError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config {
            history_path: PathBuf::from("/tmp/h.json"),
            history_limit: 5,
            prompt: "> ".to_string(),
        };
        assert_eq!(parse_config(&config.to_toml().unwrap()).unwrap(), config);
    }
}
