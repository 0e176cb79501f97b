use thiserror::Error;

/// Mirrors the three failure codes of the browser geolocation API. The payload is the
/// human-readable message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    #[error("{0}")]
    PermissionDenied(String),
    #[error("{0}")]
    PositionUnavailable(String),
    #[error("{0}")]
    Timeout(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Jitter spread must be a finite, non-negative number of degrees, got {0}")]
pub struct InvalidSpread(pub f64);

impl PositionError {
    pub fn message(&self) -> &str {
        match self {
            PositionError::PermissionDenied(message)
            | PositionError::PositionUnavailable(message)
            | PositionError::Timeout(message) => message,
        }
    }
}
