//! Core error types.

use thiserror::Error;

/// Core catalog errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage layer error.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Unknown table name.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// Bundle failed consistency validation.
    #[error("schema validation failed with {count} finding(s): {summary}")]
    Validation {
        /// Number of findings.
        count: usize,
        /// First few findings, for the error message.
        summary: String,
    },
}
