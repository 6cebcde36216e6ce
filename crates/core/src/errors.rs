//! Core error types for the Wayfarer application.
//!
//! This module defines backend-agnostic error types. Errors raised by the
//! hosted backend client (HTTP, realtime channel, auth) are converted to
//! these types at the boundary.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the trip planning application.
///
/// Backend-specific errors are wrapped in string form to keep this type
/// agnostic of the hosted platform's client library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Backend operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Change feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Map surface error: {0}")]
    Map(#[from] MapError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for hosted store operations.
///
/// This enum uses `String` for all error details, allowing the backend
/// client to convert its own errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("Failed to reach backend: {0}")]
    ConnectionFailed(String),

    /// The backend rejected a write (constraint, malformed payload).
    #[error("Backend rejected the request: {0}")]
    Rejected(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The caller is not allowed to touch the record (row-level policy).
    #[error("Not authorized: {0}")]
    PermissionDenied(String),

    /// Internal/unexpected backend error.
    #[error("Internal backend error: {0}")]
    Internal(String),
}

/// Errors raised while attaching to or reading the change feed.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to subscribe to channel '{0}'")]
    SubscribeFailed(String),

    #[error("Change feed closed unexpectedly")]
    Closed,
}

/// Errors raised by the map rendering surface.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Map access token is not configured")]
    MissingAccessToken,

    #[error("Map surface failed to initialize: {0}")]
    InitFailed(String),

    #[error("Map surface is not ready")]
    NotReady,

    #[error("Marker operation failed: {0}")]
    Marker(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Coordinates must include both latitude and longitude")]
    PartialCoordinates,

    #[error("Coordinate out of range: {0}")]
    CoordinateOutOfRange(String),
}
