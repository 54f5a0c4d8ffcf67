//! Stop loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading stop data.
#[derive(Debug, thiserror::Error)]
pub enum StopsError {
    /// The stop file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid stop JSON (malformed, missing or mistyped fields)
    #[error("invalid stop data: {0}")]
    Json(#[from] serde_json::Error),

    /// A stop has a negative or non-finite distance
    #[error("stop {index} ({name}) has invalid distance {value}")]
    InvalidDistance {
        index: usize,
        name: String,
        value: f64,
    },

    /// The document contains no stops
    #[error("stop data contains no stops")]
    Empty,
}
