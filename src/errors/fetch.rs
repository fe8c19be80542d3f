//! Catalog request errors
//!
//! Every failure of `GET /api/search/` or `GET /api/assets/{id}/lineage` lands
//! here. Callers never retry; the error is logged and the previous state stays on
//! screen.

use thiserror::Error;

/// A failed catalog request
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (connection refused, reset, TLS)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("Catalog returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, kept for the log line
        body: String,
    },

    /// The base URL or a request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The body was not the JSON document we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Returns true for 5xx responses
    pub fn is_server_error(&self) -> bool {
        matches!(self, FetchError::Status { status, .. } if *status >= 500)
    }

    /// Returns true when the catalog does not know the requested resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}
