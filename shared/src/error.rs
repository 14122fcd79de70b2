//! Error types for the calorie tracker Lambda functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while answering a calorie request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Request used a method other than GET
    #[error("{0} is not supported, use GET")]
    MethodNotAllowed(String),

    /// Configuration error
    #[error("{0}")]
    Config(String),

    /// The remote service could not be reached, or did not answer in time
    #[error("Request to Airtable failed: {0}")]
    UpstreamTransport(String),

    /// The remote service answered with a non-success status
    #[error("Airtable responded with status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The remote service answered with a body we could not understand
    #[error("Invalid response from Airtable: {0}")]
    UpstreamFormat(String),

    /// Internal error
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MethodNotAllowed(_) => 405,
            Error::UpstreamTransport(_)
            | Error::UpstreamStatus { .. }
            | Error::UpstreamFormat(_) => 502,
            Error::Config(_) | Error::Internal(_) => 500,
        }
    }

    /// Category reported in the `error` field of a failure response.
    pub fn category(&self) -> &'static str {
        match self {
            Error::MethodNotAllowed(_) => "Method not allowed",
            Error::Config(_) => "Server configuration error",
            Error::UpstreamTransport(_)
            | Error::UpstreamStatus { .. }
            | Error::UpstreamFormat(_) => "External service error",
            Error::Internal(_) => "Internal server error",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::UpstreamFormat(e.to_string())
        } else {
            Error::UpstreamTransport(e.to_string())
        }
    }
}
