//! API client error types

use thiserror::Error;

/// Result type used across the client - generic over the value type T
pub type ApiResult<T, E = Error> = Result<T, E>;

/// Errors that can occur while preparing or dispatching a request
#[derive(Debug, Error)]
pub enum Error {
    /// Payload could not be encoded for transport
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// HTTP error status returned by a convenience call
    #[error("HTTP error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// Request build error
    #[error("Request build error: {0}")]
    Build(String),
    /// Other transport error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else if err.is_builder() {
            Error::Build(err.to_string())
        } else if let Some(status) = err.status() {
            Error::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Error::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
