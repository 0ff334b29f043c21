// src/error.rs
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures of one browser interaction. Both variants are retried by the fetch loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("timed out after {waited:?} waiting for `{selector}`")]
    Timeout { selector: String, waited: Duration },
    #[error("browser driver error: {0}")]
    Driver(String),
}

/// Per-card extraction failure. The card is skipped, siblings are unaffected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid selector {0}")]
    Selector(String),
    #[error("listing card has no text")]
    EmptyCard,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("{path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        StoreError::Csv { path: path.into(), source }
    }
}

/// Run-level crawl failures. Anything below this is logged and skipped.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("could not start browser: {0}")]
    Launch(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("required input is missing: {}", .0.display())]
    MissingInput(PathBuf),
    #[error(transparent)]
    Store(#[from] StoreError),
}
