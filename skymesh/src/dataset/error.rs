//! Dataset loading error types.

use std::path::PathBuf;

use crate::domain::{DomainError, IataCode};

/// Errors from reading or writing a dataset snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot is not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An airport record failed validation
    #[error("invalid airport {code}: {source}")]
    InvalidAirport {
        code: IataCode,
        #[source]
        source: DomainError,
    },
}
