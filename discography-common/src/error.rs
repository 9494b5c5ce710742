//! Common error types for Discography

use thiserror::Error;

/// Common result type for Discography operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Discography crates
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure talking to the backend (wraps reqwest::Error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend error {status}: {message}")]
    Backend { status: u16, message: String },

    /// Backend payload did not match the expected row shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True when the error was raised by the client-side request deadline
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}
