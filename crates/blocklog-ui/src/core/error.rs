//! Error types for log and icon loading.

use thiserror::Error;

/// Failure of the primary log fetch. `Display` is the page-level message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The page was opened without a log set selector.
    #[error("no log set selected")]
    MissingSelector,
    /// The API answered with a non-success status.
    #[error("Failed to fetch data")]
    Status {
        /// HTTP status code returned by the API.
        status: u16,
    },
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The response body was not a valid log payload.
    #[error("invalid log payload: {0}")]
    Decode(String),
}

/// Failure of a single block icon fetch. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    /// The asset host answered with a non-success status.
    #[error("Failed to fetch image (http {status})")]
    Status {
        /// HTTP status code returned by the asset host.
        status: u16,
    },
    /// The request or body read failed.
    #[error("image request failed: {0}")]
    Network(String),
}
