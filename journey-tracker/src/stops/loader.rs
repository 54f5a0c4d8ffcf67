//! JSON stop file parsing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::StopsError;
use crate::domain::Stop;

/// On-disk layout of the stop data file.
#[derive(Debug, Serialize, Deserialize)]
pub struct StopsFile {
    /// Stops in journey order.
    pub stops: Vec<Stop>,
}

/// Parse and validate stop data from a JSON string.
///
/// # Errors
///
/// Returns `Err` if the JSON is malformed, any stop is missing a field or has
/// a field of the wrong type, a distance is negative or non-finite, or there
/// are no stops at all.
pub fn parse_stops(json: &str) -> Result<Vec<Stop>, StopsError> {
    let file: StopsFile = serde_json::from_str(json)?;

    if file.stops.is_empty() {
        return Err(StopsError::Empty);
    }

    for (index, stop) in file.stops.iter().enumerate() {
        let value = stop.distance_from_previous;
        if !value.is_finite() || value < 0.0 {
            return Err(StopsError::InvalidDistance {
                index,
                name: stop.name.clone(),
                value,
            });
        }
    }

    Ok(file.stops)
}

/// Read and validate stop data from a file.
pub fn load_stops(path: impl AsRef<Path>) -> Result<Vec<Stop>, StopsError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| StopsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let stops = parse_stops(&contents)?;
    info!(count = stops.len(), path = %path.display(), "loaded stops");
    Ok(stops)
}
