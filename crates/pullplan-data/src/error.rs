//! Error types for pullplan-data

use thiserror::Error;

/// Reference data loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized catalog document: {0}")]
    UnrecognizedDocument(String),

    #[error("Duplicate catalog entry: {0}")]
    DuplicateEntry(String),

    #[error("Locale bundle not found: {0}")]
    MissingLocale(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
