//! Error types for pullplan-exchange

use thiserror::Error;

/// Exchange error type
#[derive(Debug, Error)]
pub enum Error {
    /// Export serialization error
    #[error("Export error: {0}")]
    Export(String),

    /// Content not readable as a calculator document
    #[error("Unreadable document: {0}")]
    Unreadable(String),

    /// Import failure, tagged with the offending file name
    #[error("Error importing data from file {file:?}: {source}")]
    ImportFile { file: String, source: Box<Error> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for exchange operations
pub type Result<T> = std::result::Result<T, Error>;
