//! Basin term service error types.

use thiserror::Error;

/// Errors surfaced by basin term resolution.
///
/// "Coordinate outside every basin region" is not an error; it resolves to a
/// successful result with both horizons null.
#[derive(Debug, Error)]
pub enum BasinError {
    /// Latitude/longitude out of range or non-finite.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Caller supplied a model identifier not in the known enumeration.
    #[error("Unknown basin model: {0}")]
    UnknownModel(String),

    /// Remote basin-model query failed or timed out.
    #[error("Basin model service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Local dataset access failure.
    #[error("Data access error: {0}")]
    DataAccess(String),
}

impl BasinError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            BasinError::InvalidCoordinate(_) => 400,
            BasinError::UnknownModel(_) => 400,
            BasinError::UpstreamUnavailable(_) => 503,
            BasinError::DataAccess(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            BasinError::InvalidCoordinate("latitude 91".to_string()).status_code(),
            400
        );
        assert_eq!(
            BasinError::UnknownModel("cvm99".to_string()).status_code(),
            400
        );
        assert_eq!(
            BasinError::UpstreamUnavailable("timeout".to_string()).status_code(),
            503
        );
        assert_eq!(
            BasinError::DataAccess("missing grid".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_error_display() {
        let err = BasinError::UnknownModel("cvm99".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Unknown basin model"));
        assert!(display.contains("cvm99"));
    }
}
