//! Error types for pullplan-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {field}: {text:?} is not a non-negative number")]
    InvalidInput { field: String, text: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
