//! Error types for EDINET DB API operations.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur talking to the EDINET DB API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API rejected the key (HTTP 401/403).
    #[error("EDINET DB authentication failed (HTTP {status}); check the API key")]
    Auth {
        /// HTTP status returned.
        status: u16,
    },

    /// No company exists for the requested code (HTTP 404).
    #[error("company `{code}` not found in EDINET DB")]
    CompanyNotFound {
        /// EDINET code that was queried.
        code: String,
    },

    /// Any other non-success HTTP status.
    #[error("EDINET DB returned HTTP {status} for {endpoint}")]
    Status {
        /// HTTP status returned.
        status: u16,
        /// Endpoint path that failed.
        endpoint: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("unexpected response shape from {endpoint}")]
    UnexpectedResponse {
        /// Endpoint path that returned the body.
        endpoint: String,
    },
}
