use std::fmt::Display;

use thiserror::Error;

pub(crate) type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("JSON error, more details: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not load settings from {path}: {reason}")]
    Settings { path: String, reason: String },
}

impl CliError {
    pub(crate) fn settings(path: impl Display, reason: impl Display) -> Self {
        Self::Settings {
            path: format!("{}", path),
            reason: format!("{}", reason),
        }
    }
}
