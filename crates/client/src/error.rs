//! Error types for the Mux Data client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required argument was empty. Raised before any network activity.
    #[error("Invalid argument for {operation}: `{argument}` must not be empty")]
    InvalidArgument {
        operation: &'static str,
        argument: &'static str,
    },

    /// HTTP request error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the API.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Response body could not be parsed.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Credentials were not provided when building the client.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),
}

impl ClientError {
    /// Build an `InvalidArgument` error for an empty argument.
    pub fn invalid_argument(operation: &'static str, argument: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            argument,
        }
    }

    /// Check if this error was produced by the transport layer.
    ///
    /// Transport failures are surfaced exactly as the transport reported
    /// them; resource methods never wrap or reclassify them.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ApiError { .. } | Self::InvalidResponse(_)
        )
    }

    /// Check if this error is an argument validation failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// HTTP status code, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_)) || self.status() == Some(401)
    }
}
