//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Each failure class gets its own variant so timeouts, network failures,
//! and bad HTTP statuses can be reported distinctly.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("HTTP error (status {status}): {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
