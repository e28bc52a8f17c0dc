//! # Dataset Errors
//!
//! Error types for loading the record collection.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Data file could not be read
    #[error("Failed to read dataset '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not a JSON array of records
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Record violates a value constraint
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },
}

impl DatasetError {
    pub fn invalid_record(id: i64, reason: impl Into<String>) -> Self {
        DatasetError::InvalidRecord {
            id,
            reason: reason.into(),
        }
    }
}
