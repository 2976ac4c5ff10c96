//! Error types for the provisioning client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the provisioning backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection refused, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the backend.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The body could not be classified or decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request exceeded the configured timeout.
    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: String },

    /// The backend found no cluster for the given segment/env/ris.
    #[error("No matching cluster: {0}")]
    NoMatchingCluster(String),

    /// A field required to build the request is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl ClientError {
    /// Message suitable for the result area.
    ///
    /// API errors show only the backend's own message.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::NoMatchingCluster(message) | Self::MissingField(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::NoMatchingCluster(_) => Some(404),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
