//! Geocoding error types.

use thiserror::Error;

/// Type alias for Result using our GeocodeError type.
pub type Result<T> = std::result::Result<T, GeocodeError>;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Geocoding access token is not configured")]
    MissingAccessToken,

    #[error("Geocoding request failed: {0}")]
    Request(String),

    #[error("Geocoding provider returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse geocoding response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Request(err.to_string())
    }
}
