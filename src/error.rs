// Error types for ghfetch.
// Covers GitHub API failures, invalid usernames, and configuration problems.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl Error {
    /// Whether this error came from talking to the API rather than from the caller.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Api(_)
                | Error::NotFound(_)
                | Error::RateLimited { .. }
                | Error::Status { .. }
                | Error::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
