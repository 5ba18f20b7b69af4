// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Stage at which a load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document could not be retrieved.
    Transport,
    /// The document was retrieved but is not readable as tabular text.
    Parse,
}

/// Failure of a single `fetch_data` call. The underlying error is carried
/// untouched so callers can inspect it.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching document failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("reading {} failed: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing document failed: {0}")]
    Parse(#[from] csv::Error),
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Transport(_) | LoadError::Read { .. } => ErrorKind::Transport,
            LoadError::Parse(_) => ErrorKind::Parse,
        }
    }

    /// HTTP status for a non-success response, if that is what failed.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            LoadError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid url {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported url scheme {0:?}")]
    UnsupportedScheme(String),

    #[error("file url {0} has no local path")]
    NotAFilePath(String),

    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(String),
}
