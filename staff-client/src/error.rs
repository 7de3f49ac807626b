//! Client error types

use thiserror::Error;

/// Client error type
///
/// Server-side failures carry the `message` from the JSON error body so it
/// can be shown to the user verbatim.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response received (connection refused, timeout, ...)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Request rejected by validation (400)
    #[error("{0}")]
    Validation(String),

    /// Any other non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Base URL cannot carry a path
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Text shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::NotFound(_) => Some(404),
            Self::Validation(_) => Some(400),
            Self::Server { status, .. } => Some(*status),
            Self::InvalidUrl(_) | Self::InvalidResponse(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
