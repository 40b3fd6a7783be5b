//! Error types for dataset loading and lookup.

use thiserror::Error;

/// Errors that can occur while loading or reading the basin datasets.
#[derive(Error, Debug)]
pub enum DataError {
    /// Failed to read a dataset file.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The region GeoJSON could not be parsed.
    #[error("invalid region GeoJSON: {0}")]
    InvalidGeoJson(#[from] serde_json::Error),

    /// A region feature references an unknown basin or model id.
    #[error("invalid region feature: {0}")]
    InvalidRegion(String),

    /// A grid file is malformed.
    #[error("invalid grid file for basin {basin}: {detail}")]
    InvalidGrid { basin: String, detail: String },
}

impl DataError {
    /// Create an InvalidGrid error.
    pub fn invalid_grid(basin: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidGrid {
            basin: basin.into(),
            detail: detail.into(),
        }
    }
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;
