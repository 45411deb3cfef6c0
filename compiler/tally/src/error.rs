use std::path::PathBuf;

use tally_eval::EvaluationError;
use thiserror::Error;

/// Errors surfaced by the calculator front end.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("result is too large to display")]
    NonFiniteResult,

    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid history file: {0}")]
    History(#[from] serde_json::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),
}

impl TallyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TallyError::Io {
            path: path.into(),
            source,
        }
    }
}
