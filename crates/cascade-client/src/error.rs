//! Client error types.

use cascade_core::ValidationError;

/// Errors that can occur when calling the Cascade API.
///
/// The client performs no retries and no local recovery; every failure
/// category is surfaced to the caller unchanged. Each operation is a single
/// atomic remote call, so there are no partial-failure states to report.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request failed before a usable response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Cascade rejected the stored credentials.
    #[error("authentication failed (HTTP {status})")]
    Authentication {
        /// HTTP status code (401 or 403).
        status: u16,
    },

    /// Cascade returned an error response.
    ///
    /// The vendor does not document an error schema, so the raw response body
    /// is carried verbatim.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, or the status line when the body was empty.
        message: String,
    },

    /// A success response did not match the documented shape.
    #[error("invalid response body: {message}")]
    InvalidResponse {
        /// Parse failure detail.
        message: String,
    },

    /// A payload failed local validation; no request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A request payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
