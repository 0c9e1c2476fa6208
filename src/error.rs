use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LaunchrecError>;

#[derive(Debug, Error)]
pub enum LaunchrecError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(String),

    #[error("read feed {path}: {source}")]
    FeedRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse feed {path}: {source}")]
    FeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("shortlist count must be non-negative, got {0}")]
    InvalidCount(i64),
}
