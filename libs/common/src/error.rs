//! Custom error types for the storefront client
//!
//! This module defines the client-side error taxonomy. Errors are handled
//! at the view that issued the call; nothing bubbles to a global handler
//! and no call is ever retried.

use thiserror::Error;

/// Custom error type for session storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error reading or writing the backing file
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be encoded or decoded
    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Custom error type for everything the client applications do
#[derive(Error, Debug)]
pub enum ClientError {
    /// Input rejected before any network call was made
    #[error("validation error: {0}")]
    Validation(String),

    /// The operation needs a logged-in user and the session has none
    #[error("login required")]
    LoginRequired,

    /// Transport-level failure talking to the backend
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected envelope
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// The backend answered but rejected the request
    #[error("backend rejected the request: {0}")]
    Backend(String),

    /// Session storage failure
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl ClientError {
    /// Build a backend error from an optional message field, falling back
    /// to a generic string when the backend sent none.
    pub fn backend(message: Option<String>) -> Self {
        ClientError::Backend(message.unwrap_or_else(|| "request failed".to_string()))
    }
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
